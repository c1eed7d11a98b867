use crate::domain::{Chips, PlayerId, ValidationError};
use crate::engine::round::RoundPhase;

use thiserror::Error;

/// Ошибки раунда: недопустимый переход состояния.
/// Состояние раунда при ошибке не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Недостаточно активных игроков для раунда: {active}")]
    NotEnoughPlayers { active: usize },

    #[error("Действие недопустимо в фазе {actual:?} (ожидалась {expected:?})")]
    WrongPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },

    #[error("Сейчас не ход игрока с id={player_id}")]
    NotPlayersTurn { player_id: PlayerId },

    #[error("Игрок {0} не участвует в раунде")]
    PlayerNotInRound(PlayerId),

    #[error("Недостаточно фишек: нужно {required}, в стеке {available}")]
    NotEnoughChips { required: Chips, available: Chips },

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Размер рейза слишком мал: минимум {min}")]
    RaiseTooSmall { min: Chips },

    #[error("Неполный all-in не переоткрыл торговлю: можно только уравнять или сбросить")]
    RaiseNotReopened,

    #[error("В стеке нет фишек для all-in")]
    EmptyStack,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Оценщик не вернул ни одной руки")]
    EmptyRanking,

    #[error("Раунд уже завершён")]
    AlreadyComplete,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
