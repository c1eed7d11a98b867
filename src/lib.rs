//! Раунд карточной игры за одним столом.
//!
//! Рассадка и кнопка (`domain::Table`), строгий порядок блайндов и очередь
//! ходов (`engine::Round`), подменяемое ранжирование рук (`eval::Evaluator`).

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Action, ActionKind, Chips, Player, PlayerId, Table, TableError, ValidationError};
pub use engine::{Dealer, PlayerActionKind, Round, RoundError, RoundPhase, RoundResult};
pub use eval::{Evaluator, RankedHands, SevenCardEvaluator};
