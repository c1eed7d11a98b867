use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::ValidationError;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Вид действия без данных.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Check,
    Call,
    Raise,
    Fold,
    AllIn,
    SmallBlind,
    BigBlind,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Raise,
        ActionKind::Fold,
        ActionKind::AllIn,
        ActionKind::SmallBlind,
        ActionKind::BigBlind,
    ];

    /// Нужна ли сумма для этого вида действия.
    pub fn requires_amount(self) -> bool {
        !matches!(self, ActionKind::Check | ActionKind::Fold)
    }
}

/// Ход игрока. Сумма есть ровно у тех вариантов, которым она нужна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    Check,
    Call(Chips),
    Raise(Chips),
    Fold,
    AllIn(Chips),
    SmallBlind(Chips),
    BigBlind(Chips),
}

impl Move {
    pub fn kind(&self) -> ActionKind {
        match self {
            Move::Check => ActionKind::Check,
            Move::Call(_) => ActionKind::Call,
            Move::Raise(_) => ActionKind::Raise,
            Move::Fold => ActionKind::Fold,
            Move::AllIn(_) => ActionKind::AllIn,
            Move::SmallBlind(_) => ActionKind::SmallBlind,
            Move::BigBlind(_) => ActionKind::BigBlind,
        }
    }

    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Move::Check | Move::Fold => None,
            Move::Call(a)
            | Move::Raise(a)
            | Move::AllIn(a)
            | Move::SmallBlind(a)
            | Move::BigBlind(a) => Some(a),
        }
    }
}

/// Запись об одном действии игрока. Неизменяема.
///
/// Текстовое представление (`Display`) служит контрактом для логов и UI,
/// формулировки менять нельзя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    player_id: PlayerId,
    player_name: String,
    mv: Move,
}

impl Action {
    /// Собрать действие из вида и необязательной суммы.
    pub fn new(player: &Player, kind: ActionKind, amount: Option<Chips>) -> Result<Self, ValidationError> {
        let mv = match (kind, amount) {
            (ActionKind::Check, None) => Move::Check,
            (ActionKind::Fold, None) => Move::Fold,
            (ActionKind::Call, Some(a)) => Move::Call(a),
            (ActionKind::Raise, Some(a)) => Move::Raise(a),
            (ActionKind::AllIn, Some(a)) => Move::AllIn(a),
            (ActionKind::SmallBlind, Some(a)) => Move::SmallBlind(a),
            (ActionKind::BigBlind, Some(a)) => Move::BigBlind(a),
            (kind, None) => return Err(ValidationError::MissingAmount(kind)),
            (kind, Some(_)) => return Err(ValidationError::UnexpectedAmount(kind)),
        };
        Ok(Self::from_move(player, mv))
    }

    pub fn from_move(player: &Player, mv: Move) -> Self {
        Self {
            player_id: player.id,
            player_name: player.name.clone(),
            mv,
        }
    }

    pub fn check(player: &Player) -> Self {
        Self::from_move(player, Move::Check)
    }

    pub fn call(player: &Player, amount: Chips) -> Self {
        Self::from_move(player, Move::Call(amount))
    }

    pub fn raise(player: &Player, amount: Chips) -> Self {
        Self::from_move(player, Move::Raise(amount))
    }

    pub fn fold(player: &Player) -> Self {
        Self::from_move(player, Move::Fold)
    }

    pub fn all_in(player: &Player, amount: Chips) -> Self {
        Self::from_move(player, Move::AllIn(amount))
    }

    pub fn small_blind(player: &Player, amount: Chips) -> Self {
        Self::from_move(player, Move::SmallBlind(amount))
    }

    pub fn big_blind(player: &Player, amount: Chips) -> Self {
        Self::from_move(player, Move::BigBlind(amount))
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn get_move(&self) -> Move {
        self.mv
    }

    pub fn kind(&self) -> ActionKind {
        self.mv.kind()
    }

    pub fn amount(&self) -> Option<Chips> {
        self.mv.amount()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.player_name;
        match self.mv {
            Move::Check => write!(f, "{name} has checked."),
            Move::Call(amt) => write!(f, "{name} has called {amt}."),
            Move::Raise(amt) => write!(f, "{name} has raised {amt}."),
            Move::Fold => write!(f, "{name} has folded."),
            Move::AllIn(amt) => write!(f, "{name} has pushed ALL IN ({amt})."),
            Move::SmallBlind(amt) => write!(f, "{name} has posted Small Blind ({amt})."),
            Move::BigBlind(amt) => write!(f, "{name} has posted Big Blind ({amt})."),
        }
    }
}
