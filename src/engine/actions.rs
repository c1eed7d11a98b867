use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Добровольное действие игрока на улице ставок.
///
/// Блайнды сюда не входят: для них у раунда отдельные операции.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Check,
    /// Уравнять текущую ставку.
    Call,
    /// Поднять текущую ставку на указанную сумму (сверх колла).
    Raise(Chips),
    Fold,
    /// Поставить весь стек.
    AllIn,
}
