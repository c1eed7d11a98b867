use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::client::Client;
use crate::domain::errors::ValidationError;
use crate::domain::PlayerId;

/// Статус места за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeatStatus {
    /// Игрок участвует в раздачах и может получить кнопку.
    Active,
    /// Игрок сидит за столом, но пропускает раздачи (sit out).
    SatOut,
}

/// Игрок за конкретным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Текущий стек за столом.
    pub stack: Chips,
    pub status: SeatStatus,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            status: SeatStatus::Active,
        }
    }

    /// Посадить клиента за стол с бай-ином `stack`.
    pub fn from_client(client: &Client, stack: Chips) -> Self {
        Self::new(client.id, client.name.clone(), stack)
    }

    pub fn is_active(&self) -> bool {
        self.status == SeatStatus::Active
    }

    /// Получит ли карты в следующем раунде: активен и есть фишки.
    pub fn can_be_dealt_in(&self) -> bool {
        self.is_active() && !self.stack.is_zero()
    }

    /// Списать фишки со стека; ниже нуля нельзя.
    pub fn take_chips(&mut self, amount: Chips) -> Result<(), ValidationError> {
        self.stack = self.stack.subtract(amount)?;
        Ok(())
    }

    pub fn award_chips(&mut self, amount: Chips) {
        self.stack += amount;
    }
}
