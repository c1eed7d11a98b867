use crate::domain::{Chips, Move};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::RoundError;
use crate::engine::round::{Participant, ParticipantStatus};

/// Проверенное действие: всё, что нужно применить, посчитано заранее.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedAction {
    /// Запись для лога действий.
    pub mv: Move,
    /// Сколько фишек уходит из стека в банк.
    pub pay: Chips,
    pub status_after: ParticipantStatus,
    /// `(новая ставка, размер рейза)`, если действие повышает ставку.
    /// Полный это рейз или нет, решает `BettingState::is_full_raise`.
    pub raise: Option<(Chips, Chips)>,
}

/// Проверка, может ли игрок выполнить это действие при текущем состоянии ставок.
pub fn validate_action(
    participant: &Participant,
    stack: Chips,
    action: PlayerActionKind,
    betting: &BettingState,
) -> Result<ResolvedAction, RoundError> {
    let to_call = diff_to_call(participant, betting);
    // Игрок, отдавший весь стек, дальше не ходит.
    let status_for = |pay: Chips| {
        if pay == stack {
            ParticipantStatus::AllIn
        } else {
            ParticipantStatus::Active
        }
    };

    match action {
        PlayerActionKind::Fold => Ok(ResolvedAction {
            mv: Move::Fold,
            pay: Chips::ZERO,
            status_after: ParticipantStatus::Folded,
            raise: None,
        }),

        PlayerActionKind::Check => {
            if !to_call.is_zero() {
                return Err(RoundError::CannotCheck);
            }
            Ok(ResolvedAction {
                mv: Move::Check,
                pay: Chips::ZERO,
                status_after: ParticipantStatus::Active,
                raise: None,
            })
        }

        PlayerActionKind::Call => {
            if to_call.is_zero() {
                return Err(RoundError::CannotCall);
            }
            if stack < to_call {
                return Err(RoundError::NotEnoughChips {
                    required: to_call,
                    available: stack,
                });
            }
            Ok(ResolvedAction {
                mv: Move::Call(to_call),
                pay: to_call,
                status_after: status_for(to_call),
                raise: None,
            })
        }

        PlayerActionKind::Raise(by) => {
            if !betting.can_raise(participant.seat) {
                return Err(RoundError::RaiseNotReopened);
            }
            if by < betting.min_raise {
                return Err(RoundError::RaiseTooSmall {
                    min: betting.min_raise,
                });
            }
            let pay = to_call + by;
            if stack < pay {
                return Err(RoundError::NotEnoughChips {
                    required: pay,
                    available: stack,
                });
            }
            Ok(ResolvedAction {
                mv: Move::Raise(by),
                pay,
                status_after: status_for(pay),
                raise: Some((betting.current_bet + by, by)),
            })
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                return Err(RoundError::EmptyStack);
            }
            let new_bet = participant.street_bet + stack;
            // Если он превысил текущую ставку → по сути рейз.
            let raise = new_bet
                .subtract(betting.current_bet)
                .ok()
                .filter(|size| !size.is_zero())
                .map(|size| (new_bet, size));
            if raise.is_some() && !betting.can_raise(participant.seat) {
                return Err(RoundError::RaiseNotReopened);
            }
            Ok(ResolvedAction {
                mv: Move::AllIn(stack),
                pay: stack,
                status_after: ParticipantStatus::AllIn,
                raise,
            })
        }
    }
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn diff_to_call(participant: &Participant, betting: &BettingState) -> Chips {
    betting
        .current_bet
        .subtract(participant.street_bet)
        .unwrap_or(Chips::ZERO)
}
