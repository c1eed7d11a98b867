use serde::{Deserialize, Serialize};

use crate::domain::{
    Action, Card, Chips, Deck, Hand, Move, Player, PlayerId, SeatIndex, Street, Table,
};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::RoundError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::positions::{blind_seats, collect_dealt_in_seats_from};
use crate::engine::pot::{Payout, Pot};
use crate::engine::validation::validate_action;
use crate::eval::RankedHands;

/// Карманных карт на игрока.
pub const HOLE_CARDS: usize = 2;
/// Карт на борде к шоудауну.
pub const BOARD_CARDS: usize = 5;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingSmallBlind,
    AwaitingBigBlind,
    Betting,
    Showdown,
    Complete,
}

/// Статус игрока внутри раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParticipantStatus {
    /// Ещё может действовать.
    Active,
    /// Сфолдил: место за столом остаётся, на шоудаун не идёт.
    Folded,
    /// Поставил весь стек: не ходит, но идёт на шоудаун.
    AllIn,
}

/// Участник раунда: активный игрок с фишками на момент старта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub hole_cards: Vec<Card>,
    pub status: ParticipantStatus,
    /// Ставка на текущей улице.
    pub street_bet: Chips,
    /// Всего внесено в банк за раунд.
    pub committed: Chips,
}

impl Participant {
    pub fn is_in_hand(&self) -> bool {
        self.status != ParticipantStatus::Folded
    }
}

/// Итог завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub ranking: RankedHands,
    /// Выплаты победителям из разыгранной части банка.
    pub payouts: Vec<Payout>,
    /// Неуравненная ставка, возвращённая владельцу.
    pub refund: Option<Payout>,
    /// Всё, что было внесено в банк за раунд.
    pub pot: Chips,
    pub board: Vec<Card>,
}

impl RoundResult {
    pub fn winner_ids(&self) -> Vec<PlayerId> {
        self.payouts.iter().map(|p| p.player_id).collect()
    }
}

/// Раунд за столом: очередь ходов, блайнды, ставки и шоудаун.
///
/// Раунд держит стол по `&mut` всё время жизни, поэтому второй раунд
/// за тем же столом начать нельзя, пока этот не отпущен.
/// Любая операция либо применяется целиком, либо возвращает ошибку,
/// ничего не изменив.
#[derive(Debug)]
pub struct Round<'t> {
    table: &'t mut Table,
    phase: RoundPhase,
    deck: Deck,
    board: Vec<Card>,
    /// Участники в порядке раздачи: первым идёт место слева от кнопки.
    participants: Vec<Participant>,
    small_blind_seat: SeatIndex,
    big_blind_seat: SeatIndex,
    betting: BettingState,
    turn: Option<SeatIndex>,
    pot: Pot,
    actions: Vec<Action>,
    history: RoundHistory,
}

impl<'t> Round<'t> {
    /// Начать раунд: определить блайнды относительно кнопки и раздать карты.
    ///
    /// Карты получают активные игроки с ненулевым стеком.
    pub fn start(table: &'t mut Table) -> Result<Self, RoundError> {
        let button = table.button_seat();
        let mut order = collect_dealt_in_seats_from(table, button);
        let (sb, bb) = blind_seats(table, table.config().heads_up)
            .ok_or(RoundError::NotEnoughPlayers { active: order.len() })?;
        if order.first() == Some(&button) {
            order.rotate_left(1);
        }

        if table.dealer().deck().len() < order.len() * HOLE_CARDS + BOARD_CARDS {
            return Err(RoundError::DeckExhausted);
        }
        let mut deck = table.dealer_mut().deck_for_round();

        let mut participants: Vec<Participant> = order
            .iter()
            .filter_map(|&seat| table.player_at(seat).map(|p| (seat, p.id)))
            .map(|(seat, player_id)| Participant {
                seat,
                player_id,
                hole_cards: Vec::with_capacity(HOLE_CARDS),
                status: ParticipantStatus::Active,
                street_bet: Chips::ZERO,
                committed: Chips::ZERO,
            })
            .collect();

        // По одной карте за проход, по кругу.
        for _ in 0..HOLE_CARDS {
            for participant in participants.iter_mut() {
                let card = deck.draw_one().ok_or(RoundError::DeckExhausted)?;
                participant.hole_cards.push(card);
            }
        }

        let big_blind = table.config().stakes.big_blind;
        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted {
            button,
            small_blind: sb,
            big_blind: bb,
        });
        for p in &participants {
            history.push(RoundEventKind::HoleCardsDealt {
                player_id: p.player_id,
                cards: p.hole_cards.clone(),
            });
        }

        log::info!(
            "раунд начат: {} игроков, кнопка {}, SB {}, BB {}",
            participants.len(),
            button,
            sb,
            bb
        );

        Ok(Self {
            table,
            phase: RoundPhase::AwaitingSmallBlind,
            deck,
            board: Vec::with_capacity(BOARD_CARDS),
            participants,
            small_blind_seat: sb,
            big_blind_seat: bb,
            betting: BettingState::open(Street::Preflop, Chips::ZERO, big_blind, Vec::new()),
            turn: Some(sb),
            pot: Pot::new(),
            actions: Vec::new(),
            history,
        })
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn street(&self) -> Street {
        self.betting.street
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Лог принятых действий в порядке применения.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn betting(&self) -> &BettingState {
        &self.betting
    }

    pub fn hole_cards(&self, player_id: PlayerId) -> Option<&[Card]> {
        self.participant(player_id).map(|p| p.hole_cards.as_slice())
    }

    pub fn small_blind_player(&self) -> Option<&Player> {
        self.table.player_at(self.small_blind_seat)
    }

    pub fn big_blind_player(&self) -> Option<&Player> {
        self.table.player_at(self.big_blind_seat)
    }

    /// Чей ход. `None`, когда ходов больше нет (шоудаун / завершён).
    pub fn whos_turn_is_it(&self) -> Option<&Player> {
        self.turn.and_then(|seat| self.table.player_at(seat))
    }

    /// Малый блайнд. Только в `AwaitingSmallBlind` и только от игрока на месте SB.
    pub fn post_small_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.try_post_small_blind(player_id)
            .inspect_err(|e| log::warn!("small blind от игрока {player_id} отклонён: {e}"))
    }

    /// Большой блайнд. Только в `AwaitingBigBlind` и только от игрока на месте BB.
    pub fn post_big_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.try_post_big_blind(player_id)
            .inspect_err(|e| log::warn!("big blind от игрока {player_id} отклонён: {e}"))
    }

    /// Действие игрока на улице ставок.
    pub fn act(&mut self, player_id: PlayerId, kind: PlayerActionKind) -> Result<(), RoundError> {
        self.try_act(player_id, kind)
            .inspect_err(|e| log::warn!("действие {kind:?} игрока {player_id} отклонено: {e}"))
    }

    /// Завершить раунд: шоудаун, выплата банка и ровно один сдвиг кнопки.
    pub fn end(&mut self) -> Result<RoundResult, RoundError> {
        self.try_end()
            .inspect_err(|e| log::warn!("завершение раунда отклонено: {e}"))
    }

    fn try_post_small_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::AwaitingSmallBlind)?;
        let seat = self.expect_turn(player_id)?;
        let amount = self.table.config().stakes.small_blind;

        self.post_blind(player_id, seat, amount, Move::SmallBlind(amount))?;
        self.phase = RoundPhase::AwaitingBigBlind;
        self.turn = Some(self.big_blind_seat);
        Ok(())
    }

    fn try_post_big_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::AwaitingBigBlind)?;
        let seat = self.expect_turn(player_id)?;
        let amount = self.table.config().stakes.big_blind;

        self.post_blind(player_id, seat, amount, Move::BigBlind(amount))?;

        // Префлоп: первым ходит следующий после BB, BB последним.
        let queue = self.acting_order_after(seat, true);
        self.betting = BettingState::open(Street::Preflop, amount, amount, queue);
        self.phase = RoundPhase::Betting;
        self.progress()
    }

    fn post_blind(
        &mut self,
        player_id: PlayerId,
        seat: SeatIndex,
        amount: Chips,
        mv: Move,
    ) -> Result<(), RoundError> {
        let player = self
            .table
            .player_at_mut(seat)
            .ok_or(RoundError::PlayerNotInRound(player_id))?;
        if player.stack < amount {
            return Err(RoundError::NotEnoughChips {
                required: amount,
                available: player.stack,
            });
        }
        player.take_chips(amount)?;
        let all_in = player.stack.is_zero();
        let action = Action::from_move(player, mv);

        if let Some(p) = self.participants.iter_mut().find(|p| p.seat == seat) {
            p.street_bet += amount;
            p.committed += amount;
            if all_in {
                p.status = ParticipantStatus::AllIn;
            }
        }
        self.record(action, amount);
        Ok(())
    }

    fn try_act(&mut self, player_id: PlayerId, kind: PlayerActionKind) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::Betting)?;
        let seat = self.expect_turn(player_id)?;
        let idx = self
            .participants
            .iter()
            .position(|p| p.seat == seat)
            .ok_or(RoundError::PlayerNotInRound(player_id))?;
        let stack = self
            .table
            .player_at(seat)
            .map(|p| p.stack)
            .ok_or(RoundError::PlayerNotInRound(player_id))?;

        let resolved = validate_action(&self.participants[idx], stack, kind, &self.betting)?;

        // Применяем: стек, ставка, банк, лог, очередь.
        let player = self
            .table
            .player_at_mut(seat)
            .ok_or(RoundError::PlayerNotInRound(player_id))?;
        player.take_chips(resolved.pay)?;
        let action = Action::from_move(player, resolved.mv);

        let participant = &mut self.participants[idx];
        participant.street_bet += resolved.pay;
        participant.committed += resolved.pay;
        participant.status = resolved.status_after;
        self.record(action, resolved.pay);

        match resolved.raise {
            Some((new_bet, raise_size)) if self.betting.is_full_raise(raise_size) => {
                let queue = self.acting_order_after(seat, false);
                self.betting.on_full_raise(new_bet, raise_size, queue);
            }
            Some((new_bet, _)) => {
                let queue = self.acting_order_after(seat, false);
                self.betting.on_short_all_in(new_bet, queue);
            }
            None => self.betting.mark_acted(seat),
        }

        self.progress()
    }

    fn try_end(&mut self) -> Result<RoundResult, RoundError> {
        if self.phase == RoundPhase::Complete {
            return Err(RoundError::AlreadyComplete);
        }

        // Всё считаем на копиях, применяем только после успешной оценки.
        let mut deck = self.deck.clone();
        let mut board = self.board.clone();
        while board.len() < BOARD_CARDS {
            board.push(deck.draw_one().ok_or(RoundError::DeckExhausted)?);
        }

        let hands = self
            .participants
            .iter()
            .filter(|p| p.is_in_hand())
            .map(|p| {
                let mut cards = p.hole_cards.clone();
                cards.extend_from_slice(&board);
                Hand::new(p.player_id, cards)
            })
            .collect::<Result<Vec<Hand>, _>>()?;

        let ranking = self.table.dealer().evaluate_hands(&hands);

        // Неуравненную часть ставки никто не разыгрывает.
        let refund = self.uncalled_bet();
        let contested = match refund {
            Some(r) => Pot {
                total: self.pot.total.subtract(r.amount)?,
            },
            None => self.pot.clone(),
        };

        // Победители в порядке мест слева от кнопки: так раздаётся остаток при сплите.
        let top = ranking.winner_ids();
        let winners: Vec<PlayerId> = self
            .participants
            .iter()
            .filter(|p| p.is_in_hand() && top.contains(&p.player_id))
            .map(|p| p.player_id)
            .collect();
        if winners.is_empty() && !contested.total.is_zero() {
            return Err(RoundError::EmptyRanking);
        }
        let payouts = contested.split(&winners);

        // Применение.
        self.phase = RoundPhase::Showdown;
        self.turn = None;
        self.deck = deck;
        self.board = board;
        self.betting.close();
        self.history.push(RoundEventKind::ShowdownRanked {
            groups: ranking
                .groups()
                .iter()
                .map(|g| g.iter().map(Hand::player_id).collect())
                .collect(),
        });

        if let Some(r) = refund {
            self.award(r);
            log::info!("игроку {} возвращено {} неуравненных", r.player_id, r.amount);
            self.history.push(RoundEventKind::UncalledBetReturned {
                player_id: r.player_id,
                amount: r.amount,
            });
        }
        for payout in &payouts {
            self.award(*payout);
            log::info!("игрок {} выиграл {}", payout.player_id, payout.amount);
            self.history.push(RoundEventKind::PotAwarded {
                player_id: payout.player_id,
                amount: payout.amount,
            });
        }

        let from = self.table.button_seat();
        self.table.move_button();
        let to = self.table.button_seat();
        self.history.push(RoundEventKind::ButtonMoved { from, to });
        self.table.record_round_played();

        self.phase = RoundPhase::Complete;
        log::info!("раунд завершён, банк {}", self.pot.total);

        Ok(RoundResult {
            ranking,
            payouts,
            refund,
            pot: self.pot.total,
            board: self.board.clone(),
        })
    }

    /// Часть вклада лидера, которую не уравнял никто из остальных
    /// (включая сфолдивших: их фишки в банке уравнены).
    fn uncalled_bet(&self) -> Option<Payout> {
        let (top_idx, top) = self
            .participants
            .iter()
            .enumerate()
            .max_by_key(|(_, p)| p.committed)?;
        let matched = self
            .participants
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != top_idx)
            .map(|(_, p)| p.committed)
            .max()
            .unwrap_or(Chips::ZERO);

        top.committed
            .subtract(matched)
            .ok()
            .filter(|excess| !excess.is_zero())
            .map(|amount| Payout {
                player_id: top.player_id,
                amount,
            })
    }

    fn award(&mut self, payout: Payout) {
        if let Some(seat) = self.table.seat_of(payout.player_id) {
            if let Some(player) = self.table.player_at_mut(seat) {
                player.award_chips(payout.amount);
            }
        }
    }

    fn participant(&self, player_id: PlayerId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Проверить, что сейчас ход именно этого игрока; вернуть его место.
    fn expect_turn(&self, player_id: PlayerId) -> Result<SeatIndex, RoundError> {
        let seat = self
            .participant(player_id)
            .map(|p| p.seat)
            .ok_or(RoundError::PlayerNotInRound(player_id))?;
        if self.turn != Some(seat) {
            return Err(RoundError::NotPlayersTurn { player_id });
        }
        Ok(seat)
    }

    /// Активные (могущие ходить) участники по кругу после `seat`.
    /// С `include_seat` сам `seat` идёт последним.
    fn acting_order_after(&self, seat: SeatIndex, include_seat: bool) -> Vec<SeatIndex> {
        let n = self.participants.len();
        let start = self
            .participants
            .iter()
            .position(|p| p.seat == seat)
            .unwrap_or(0);
        let count = if include_seat { n } else { n.saturating_sub(1) };

        (1..=count)
            .map(|step| &self.participants[(start + step) % n])
            .filter(|p| p.status == ParticipantStatus::Active)
            .map(|p| p.seat)
            .collect()
    }

    fn record(&mut self, action: Action, paid: Chips) {
        self.pot.add(paid);
        log::debug!("{action} (банк {})", self.pot.total);
        self.history.push(RoundEventKind::PlayerActed {
            action: action.clone(),
            pot_after: self.pot.total,
        });
        self.actions.push(action);
    }

    /// Передать ход дальше, закрыть улицу или перейти к шоудауну.
    fn progress(&mut self) -> Result<(), RoundError> {
        loop {
            let in_hand = self.participants.iter().filter(|p| p.is_in_hand()).count();
            if in_hand <= 1 {
                self.await_showdown();
                return Ok(());
            }

            if !self.betting.is_round_complete() {
                self.turn = self.betting.next_to_act();
                return Ok(());
            }

            let can_act = self
                .participants
                .iter()
                .filter(|p| p.status == ParticipantStatus::Active)
                .count();
            match self.betting.street.next() {
                Some((street, cards)) if can_act > 1 => self.open_street(street, cards)?,
                _ => {
                    self.await_showdown();
                    return Ok(());
                }
            }
        }
    }

    fn await_showdown(&mut self) {
        log::debug!("ставки закрыты, ждём шоудаун");
        self.phase = RoundPhase::Showdown;
        self.turn = None;
    }

    /// Открыть карты новой улицы и начать ставки слева от кнопки.
    fn open_street(&mut self, street: Street, cards: usize) -> Result<(), RoundError> {
        for _ in 0..cards {
            let card = self.deck.draw_one().ok_or(RoundError::DeckExhausted)?;
            self.board.push(card);
        }
        for p in self.participants.iter_mut() {
            p.street_bet = Chips::ZERO;
        }

        // participants уже упорядочены слева от кнопки.
        let to_act: Vec<SeatIndex> = self
            .participants
            .iter()
            .filter(|p| p.status == ParticipantStatus::Active)
            .map(|p| p.seat)
            .collect();
        let big_blind = self.table.config().stakes.big_blind;
        self.betting = BettingState::open(street, Chips::ZERO, big_blind, to_act);

        log::debug!("улица {:?}, борд: {:?}", street, self.board);
        self.history.push(RoundEventKind::StreetChanged {
            street,
            board: self.board.clone(),
        });
        Ok(())
    }
}
