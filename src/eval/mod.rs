//! Модуль оценки силы покерных рук.
//!
//! Ранжирование задаётся подменяемой политикой: дилер получает любой `Evaluator`,
//! по умолчанию `SevenCardEvaluator` (лучшие 5 карт из до 7).

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod ranking;

pub use evaluator::{evaluate_best_hand, SevenCardEvaluator};
pub use hand_rank::{describe_hand, HandCategory};
pub use ranking::RankedHands;

use crate::domain::Hand;

/// Способность ранжировать набор рук.
///
/// Реализация обязана быть чистой функцией набора рук: одинаковый вход,
/// одинаковый результат.
pub trait Evaluator {
    fn evaluate_hands(&self, hands: &[Hand]) -> RankedHands;
}
