//! Движок раунда: дилер, очередь ходов, блайнды, ставки, шоудаун.
//!
//! Высокоуровневый объект: `Round`
//! Основные операции:
//!   - `Round::start` – начать раунд за столом
//!   - `post_small_blind` / `post_big_blind` – обязательные ставки по порядку
//!   - `act` – действие игрока на улице ставок
//!   - `end` – шоудаун, выплата банка и сдвиг кнопки

pub mod actions;
pub mod betting;
pub mod dealer;
pub mod errors;
pub mod history;
pub mod positions;
pub mod pot;
pub mod round;
pub mod validation;

pub use actions::PlayerActionKind;
pub use betting::BettingState;
pub use dealer::Dealer;
pub use errors::RoundError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::{Payout, Pot};
pub use round::{Participant, ParticipantStatus, Round, RoundPhase, RoundResult};

use crate::domain::Deck;

/// Источник случайности для перемешивания колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// То же, но пригодное для `dyn`: дилер хранит источник внутри себя
/// и тасует колоду перед каждым раундом.
pub trait DeckShuffler {
    fn shuffle_deck(&mut self, deck: &mut Deck);
}

impl<R: RandomSource> DeckShuffler for R {
    fn shuffle_deck(&mut self, deck: &mut Deck) {
        self.shuffle(&mut deck.cards);
    }
}
