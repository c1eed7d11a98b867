use core::fmt;

use crate::domain::{Deck, Hand};
use crate::engine::{DeckShuffler, RandomSource};
use crate::eval::{Evaluator, RankedHands, SevenCardEvaluator};

/// Дилер стола: владеет колодой, оценщиком рук и (необязательно)
/// источником случайности для тасовки перед каждым раундом.
pub struct Dealer {
    deck: Deck,
    evaluator: Box<dyn Evaluator>,
    shuffler: Option<Box<dyn DeckShuffler>>,
}

impl Dealer {
    /// Привязать колоду и оценщик. Колода не перемешивается, и без
    /// `shuffle_every_round` каждый раунд раздаётся в одном и том же порядке.
    pub fn start_work(deck: Deck, evaluator: impl Evaluator + 'static) -> Self {
        Self {
            deck,
            evaluator: Box::new(evaluator),
            shuffler: None,
        }
    }

    /// Стандартная колода и правила холдема.
    pub fn standard() -> Self {
        Self::start_work(Deck::standard_52(), SevenCardEvaluator::new())
    }

    /// Тасовать колоду этим источником перед каждым раундом.
    pub fn shuffle_every_round(mut self, rng: impl RandomSource + 'static) -> Self {
        self.shuffler = Some(Box::new(rng));
        self
    }

    pub fn shuffles_every_round(&self) -> bool {
        self.shuffler.is_some()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Разово перемешать привязанную колоду внешним источником.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.deck.cards);
    }

    /// Колода для одного раунда: копия привязанной, перетасованная,
    /// если у дилера есть источник случайности.
    pub fn deck_for_round(&mut self) -> Deck {
        let mut deck = self.deck.clone();
        if let Some(shuffler) = self.shuffler.as_mut() {
            shuffler.shuffle_deck(&mut deck);
        }
        deck
    }

    pub fn evaluate_hands(&self, hands: &[Hand]) -> RankedHands {
        self.evaluator.evaluate_hands(hands)
    }
}

impl fmt::Debug for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dealer")
            .field("deck_len", &self.deck.len())
            .field("shuffles_every_round", &self.shuffles_every_round())
            .finish_non_exhaustive()
    }
}
