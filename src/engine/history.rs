use serde::{Deserialize, Serialize};

use crate::domain::{Action, Card, Chips, PlayerId, SeatIndex, Street};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Раунд начался: позиции кнопки и блайндов.
    RoundStarted {
        button: SeatIndex,
        small_blind: SeatIndex,
        big_blind: SeatIndex,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { player_id: PlayerId, cards: Vec<Card> },

    /// Принятое действие (включая блайнды).
    PlayerActed { action: Action, pot_after: Chips },

    /// Переход на новую улицу; `board` содержит весь борд после раздачи.
    StreetChanged { street: Street, board: Vec<Card> },

    /// Итог ранжирования: группы игроков от сильнейших к слабейшим.
    ShowdownRanked { groups: Vec<Vec<PlayerId>> },

    /// Неуравненная часть ставки вернулась игроку до дележа банка.
    UncalledBetReturned { player_id: PlayerId, amount: Chips },

    /// Выплата банка.
    PotAwarded { player_id: PlayerId, amount: Chips },

    /// Кнопка сдвинута после раунда.
    ButtonMoved { from: SeatIndex, to: SeatIndex },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
