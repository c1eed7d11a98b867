use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Выплата одному игроку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: Chips,
}

/// Общий банк раунда. Сайд-поты не поддерживаются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Разделить банк поровну между победителями.
    ///
    /// `winners` упорядочены по местам, начиная слева от кнопки; лишние фишки
    /// остатка раздаются по одной в этом порядке.
    pub fn split(&self, winners: &[PlayerId]) -> Vec<Payout> {
        if winners.is_empty() {
            return Vec::new();
        }

        let n = winners.len() as u64;
        let share = self.total.amount() / n;
        let remainder = self.total.amount() % n;

        winners
            .iter()
            .enumerate()
            .map(|(i, &player_id)| Payout {
                player_id,
                amount: Chips::new(share + u64::from((i as u64) < remainder)),
            })
            .collect()
    }
}
