use crate::domain::chips::Chips;
use crate::domain::config::TableConfig;
use crate::domain::errors::TableError;
use crate::domain::player::{Player, SeatStatus};
use crate::domain::PlayerId;
use crate::engine::dealer::Dealer;
use crate::engine::positions::next_active_seat;

/// Индекс места за столом (0..seats-1).
pub type SeatIndex = u8;

/// Стол: фиксированная рассадка, кнопка и дилер.
///
/// Инвариант: `button` всегда указывает на активное (не sit out) место.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    /// Места в порядке регистрации; индекс вектора = SeatIndex.
    seats: Vec<Player>,
    button: SeatIndex,
    dealer: Dealer,
    /// Сколько раундов завершено за этим столом.
    rounds_played: u64,
}

impl Table {
    /// Стол с конфигом по умолчанию.
    pub fn set_up(dealer: Dealer, players: Vec<Player>) -> Result<Self, TableError> {
        Self::with_config(TableConfig::default(), dealer, players)
    }

    /// Рассадить игроков в порядке списка. Кнопка у первого активного.
    pub fn with_config(
        config: TableConfig,
        dealer: Dealer,
        players: Vec<Player>,
    ) -> Result<Self, TableError> {
        config.validate()?;
        if players.len() > config.max_seats as usize {
            return Err(TableError::TooManyPlayers {
                players: players.len(),
                max_seats: config.max_seats,
            });
        }
        for (i, p) in players.iter().enumerate() {
            if players[..i].iter().any(|other| other.id == p.id) {
                return Err(TableError::DuplicatePlayer(p.id));
            }
        }
        // Все фишки стола должны помещаться в один банк.
        players
            .iter()
            .try_fold(Chips::ZERO, |total, p| total.add(p.stack))?;

        let mut table = Self {
            config,
            seats: players,
            button: 0,
            dealer,
            rounds_played: 0,
        };
        table.button = next_active_seat(&table, 0, true).ok_or(TableError::NoActivePlayers)?;

        log::debug!(
            "стол рассажен: {} мест, кнопка на месте {}",
            table.seats.len(),
            table.button
        );
        Ok(table)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// Все сидящие игроки в порядке мест.
    pub fn players_sat_down(&self) -> &[Player] {
        &self.seats
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn active_count(&self) -> usize {
        self.seats.iter().filter(|p| p.is_active()).count()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn player_at(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat as usize)
    }

    pub(crate) fn player_at_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.seats.get_mut(seat as usize)
    }

    pub fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|p| p.id == player_id)
            .map(|idx| idx as SeatIndex)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.seat_of(player_id).and_then(|seat| self.player_at(seat))
    }

    pub fn button_seat(&self) -> SeatIndex {
        self.button
    }

    /// Игрок с кнопкой. Всегда активный.
    pub fn locate_player_with_button(&self) -> &Player {
        &self.seats[self.button as usize]
    }

    /// Перевести игрока в sit out. Место не меняется.
    ///
    /// Если у игрока кнопка, она уходит к следующему активному месту.
    pub fn sit_player_out(&mut self, player_id: PlayerId) -> Result<(), TableError> {
        let seat = self
            .seat_of(player_id)
            .ok_or(TableError::PlayerNotSeated(player_id))?;
        if !self.seats[seat as usize].is_active() {
            return Ok(());
        }
        if self.active_count() == 1 {
            return Err(TableError::LastActivePlayer);
        }

        self.seats[seat as usize].status = SeatStatus::SatOut;
        if self.button == seat {
            self.move_button();
        }
        log::debug!("игрок {player_id} (место {seat}) ушёл в sit out");
        Ok(())
    }

    /// Вернуть игрока в игру. Место не меняется.
    pub fn sit_player_in(&mut self, player_id: PlayerId) -> Result<(), TableError> {
        let seat = self
            .seat_of(player_id)
            .ok_or(TableError::PlayerNotSeated(player_id))?;
        self.seats[seat as usize].status = SeatStatus::Active;
        log::debug!("игрок {player_id} (место {seat}) вернулся в игру");
        Ok(())
    }

    /// Передать кнопку следующему активному месту по кругу.
    pub fn move_button(&mut self) {
        // Кнопка всегда на активном месте, так что кандидат найдётся (в худшем случае она сама).
        if let Some(next) = next_active_seat(self, self.button, false) {
            log::info!("кнопка: место {} -> место {}", self.button, next);
            self.button = next;
        }
    }

    /// Отдать кнопку конкретному игроку.
    pub fn give_button_to_player(&mut self, player_id: PlayerId) -> Result<(), TableError> {
        let seat = self
            .seat_of(player_id)
            .ok_or(TableError::PlayerNotSeated(player_id))?;
        if !self.seats[seat as usize].is_active() {
            return Err(TableError::PlayerSatOut(player_id));
        }
        log::info!("кнопка передана игроку {player_id} (место {seat})");
        self.button = seat;
        Ok(())
    }

    pub(crate) fn record_round_played(&mut self) {
        self.rounds_played += 1;
    }
}
