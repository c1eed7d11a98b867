use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::SeatIndex;

/// Торговля на одной улице: цель ставки, минимальный рейз и очередь ответа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    pub street: Street,
    /// Ставка, до которой должны дотянуться все, кто ещё в игре.
    pub current_bet: Chips,
    /// Минимальный размер повышающей части рейза.
    pub min_raise: Chips,
    /// Кто ещё должен ответить, в порядке хода.
    to_act: Vec<SeatIndex>,
    /// Уже ходившие места, которым неполный all-in не вернул право рейза:
    /// им остаётся колл, фолд или all-in не выше ставки.
    raise_closed: Vec<SeatIndex>,
}

impl BettingState {
    pub fn open(street: Street, current_bet: Chips, min_raise: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            street,
            current_bet,
            min_raise,
            to_act,
            raise_closed: Vec::new(),
        }
    }

    pub fn to_act(&self) -> &[SeatIndex] {
        &self.to_act
    }

    pub fn next_to_act(&self) -> Option<SeatIndex> {
        self.to_act.first().copied()
    }

    pub fn can_raise(&self, seat: SeatIndex) -> bool {
        !self.raise_closed.contains(&seat)
    }

    /// Полный рейз: повышение не меньше последнего рейза (минимум BB).
    pub fn is_full_raise(&self, raise_size: Chips) -> bool {
        raise_size >= self.min_raise
    }

    /// Игрок ответил без повышения.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Полный рейз переоткрывает торговлю для всех.
    pub fn on_full_raise(&mut self, new_bet: Chips, raise_size: Chips, queue: Vec<SeatIndex>) {
        self.current_bet = new_bet;
        self.min_raise = raise_size;
        self.to_act = queue;
        self.raise_closed.clear();
    }

    /// Неполный all-in поверх ставки: цель растёт, минимальный рейз прежний.
    /// Те, кто уже ходил, должны доплатить, но рейзить не могут.
    pub fn on_short_all_in(&mut self, new_bet: Chips, queue: Vec<SeatIndex>) {
        for &seat in &queue {
            if !self.to_act.contains(&seat) && !self.raise_closed.contains(&seat) {
                self.raise_closed.push(seat);
            }
        }
        self.current_bet = new_bet;
        self.to_act = queue;
    }

    /// Снять очередь целиком (шоудаун).
    pub fn close(&mut self) {
        self.to_act.clear();
        self.raise_closed.clear();
    }

    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
