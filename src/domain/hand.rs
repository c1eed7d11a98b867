use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::ValidationError;
use crate::domain::PlayerId;

/// Улица раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Следующая улица и сколько карт борда для неё открыть.
    pub fn next(self) -> Option<(Street, usize)> {
        match self {
            Street::Preflop => Some((Street::Flop, 3)),
            Street::Flop => Some((Street::Turn, 1)),
            Street::Turn => Some((Street::River, 1)),
            Street::River => None,
        }
    }
}

/// Сила руки. Больше = сильнее; заполняется модулем eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Максимум карт в руке для оценки (2 карманные + 5 борда).
pub const MAX_HAND_CARDS: usize = 7;

/// Рука игрока для шоудауна: фиксированный набор карт, привязанный к игроку.
/// После создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    player_id: PlayerId,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(player_id: PlayerId, cards: Vec<Card>) -> Result<Self, ValidationError> {
        if cards.is_empty() || cards.len() > MAX_HAND_CARDS {
            return Err(ValidationError::InvalidHandSize(cards.len()));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(ValidationError::DuplicateCard(*card));
            }
        }
        Ok(Self { player_id, cards })
    }

    /// Рука из строки вида "4c 2s".
    pub fn from_notation(player_id: PlayerId, notation: &str) -> Result<Self, ValidationError> {
        let cards = notation
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(player_id, cards)
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
