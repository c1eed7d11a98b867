use crate::domain::card::{Card, Rank};
use crate::domain::hand::{Hand, HandRank};

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};
use super::ranking::RankedHands;
use super::Evaluator;

/// Стандартные правила холдема: лучшая 5-карточная комбинация из всех карт руки.
#[derive(Clone, Copy, Debug, Default)]
pub struct SevenCardEvaluator;

impl SevenCardEvaluator {
    pub fn new() -> Self {
        SevenCardEvaluator
    }

    pub fn rank_hand(&self, hand: &Hand) -> HandRank {
        evaluate_cards(hand.cards())
    }
}

impl Evaluator for SevenCardEvaluator {
    fn evaluate_hands(&self, hands: &[Hand]) -> RankedHands {
        let mut rated: Vec<(HandRank, &Hand)> =
            hands.iter().map(|h| (self.rank_hand(h), h)).collect();
        // Стабильная сортировка: при равенстве сохраняется входной порядок.
        rated.sort_by(|a, b| b.0.cmp(&a.0));

        let mut groups: Vec<Vec<Hand>> = Vec::new();
        let mut last_rank: Option<HandRank> = None;
        for (rank, hand) in rated {
            match groups.last_mut() {
                Some(group) if last_rank == Some(rank) => group.push(hand.clone()),
                _ => groups.push(vec![hand.clone()]),
            }
            last_rank = Some(rank);
        }

        RankedHands::from_groups(groups)
    }
}

/// Лучшая рука из карманных карт и борда.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate_cards(&all_cards)
}

/// Оценка произвольного набора карт.
///
/// До 5 карт оцениваются как есть (стрит и флеш только ровно на 5 картах),
/// больше 5 перебором всех 5-карточных комбинаций.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    if cards.len() <= 5 {
        return evaluate_fixed(cards);
    }

    let n = cards.len();
    let mut best = HandRank(0);
    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_fixed(&five));
                    }
                }
            }
        }
    }
    best
}

/// Оценка не более чем 5 карт без перебора.
fn evaluate_fixed(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // используем индексы 2..=14
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_five = cards.len() == 5;
    let is_flush = is_five && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if is_five { detect_straight(rank_mask) } else { None };

    // (rank, count), отсортированные по количеству (desc), затем по рангу (desc).
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|&&r| rank_counts[r as usize] > 0)
        .map(|&r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let ranks: Vec<Rank> = groups.iter().map(|&(r, _)| r).collect();
    let counts: Vec<u8> = groups.iter().map(|&(_, c)| c).collect();

    let category = match (straight_high, is_flush, counts.as_slice()) {
        (Some(high), true, _) => {
            return HandRank::from_category_and_ranks(HandCategory::StraightFlush, &[high]);
        }
        (_, _, [4, ..]) => HandCategory::FourOfAKind,
        (_, _, [3, 2, ..]) => HandCategory::FullHouse,
        (_, true, _) => HandCategory::Flush,
        (Some(high), _, _) => {
            return HandRank::from_category_and_ranks(HandCategory::Straight, &[high]);
        }
        (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        (_, _, [2, ..]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::from_category_and_ranks(category, &ranks)
}
