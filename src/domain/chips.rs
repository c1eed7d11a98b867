use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами
/// и чтобы значение никогда не уходило в минус.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub const fn new(amount: u64) -> Self {
        Chips(amount)
    }

    /// Построить из знакового числа (то, что приходит снаружи).
    pub fn from_amount(amount: i64) -> Result<Self, ValidationError> {
        u64::try_from(amount)
            .map(Chips)
            .map_err(|_| ValidationError::NegativeChips(amount))
    }

    pub const fn amount(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Сложение с проверкой переполнения.
    pub fn add(self, other: Chips) -> Result<Chips, ValidationError> {
        self.0
            .checked_add(other.0)
            .map(Chips)
            .ok_or(ValidationError::ChipsOverflow {
                left: self,
                right: other,
            })
    }

    /// Вычитание. Результат ниже нуля даёт ошибку, а не отрицательное значение.
    pub fn subtract(self, other: Chips) -> Result<Chips, ValidationError> {
        self.0
            .checked_sub(other.0)
            .map(Chips)
            .ok_or(ValidationError::InsufficientChips {
                available: self,
                required: other,
            })
    }
}

/// Операторы упираются в `u64::MAX`. Стол не принимает стеки, сумма которых
/// не помещается в u64, а фишки внутри раунда только перекладываются,
/// так что в движке насыщение не срабатывает.
impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
