use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::errors::ValidationError;

/// Минимум и максимум мест за столом.
pub const MIN_SEATS: u8 = 2;
pub const MAX_SEATS: u8 = 10;

/// Кто ставит малый блайнд, когда за столом ровно два активных игрока.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeadsUpBlinds {
    /// Игрок на кнопке ставит SB, второй ставит BB.
    #[default]
    ButtonPostsSmallBlind,
    /// Та же логика мест, что и за полным столом: SB слева от кнопки.
    Standard,
}

/// Стейки стола (SB/BB).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

/// Конфиг стола: сколько мест, какие блайнды, правило хедз-апа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub max_seats: u8,
    pub stakes: TableStakes,
    pub heads_up: HeadsUpBlinds,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_seats: MAX_SEATS,
            stakes: TableStakes::new(Chips::new(25), Chips::new(50)),
            heads_up: HeadsUpBlinds::default(),
        }
    }
}

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl TableConfig {
    /// Разобрать конфиг из JSON и сразу проверить его.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.max_seats) {
            return Err(ValidationError::InvalidConfig(format!(
                "max_seats = {} (допустимо {MIN_SEATS}..={MAX_SEATS})",
                self.max_seats
            )));
        }
        if self.stakes.small_blind.is_zero() {
            return Err(ValidationError::InvalidConfig("small_blind = 0".into()));
        }
        if self.stakes.big_blind <= self.stakes.small_blind {
            return Err(ValidationError::InvalidConfig(format!(
                "big_blind ({}) <= small_blind ({})",
                self.stakes.big_blind, self.stakes.small_blind
            )));
        }
        Ok(())
    }
}
