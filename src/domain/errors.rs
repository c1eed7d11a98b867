use thiserror::Error;

use crate::domain::action::ActionKind;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Ошибки построения значений (фишки, действия, руки, конфиг).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Количество фишек не может быть отрицательным: {0}")]
    NegativeChips(i64),

    #[error("Недостаточно фишек: есть {available}, нужно {required}")]
    InsufficientChips { available: Chips, required: Chips },

    #[error("Переполнение при сложении фишек: {left} + {right}")]
    ChipsOverflow { left: Chips, right: Chips },

    #[error("Действие {0:?} требует сумму")]
    MissingAmount(ActionKind),

    #[error("Действие {0:?} не принимает сумму")]
    UnexpectedAmount(ActionKind),

    #[error("Некорректная карта: {0}")]
    InvalidCard(String),

    #[error("Рука должна содержать от 1 до 7 карт, получено {0}")]
    InvalidHandSize(usize),

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),
}

/// Ошибки рассадки и кнопки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Игрок {0} не сидит за этим столом")]
    PlayerNotSeated(PlayerId),

    #[error("Игрок {0} пропускает раздачи (sit out)")]
    PlayerSatOut(PlayerId),

    #[error("Игрок {0} уже сидит за столом")]
    DuplicatePlayer(PlayerId),

    #[error("За столом нет активных игроков")]
    NoActivePlayers,

    #[error("Нельзя посадить в sit out последнего активного игрока")]
    LastActivePlayer,

    #[error("Слишком много игроков: {players} при максимуме {max_seats}")]
    TooManyPlayers { players: usize, max_seats: u8 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
