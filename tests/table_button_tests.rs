//! Кнопка и рассадка: сдвиг по кругу, пропуск sit out, ручная передача.

use poker_round::domain::{
    Chips, ClientRegistry, Player, PlayerId, Table, TableConfig, TableError, TableStakes, ValidationError,
};
use poker_round::engine::Dealer;

/// Стол из `n` игроков player1..playerN, рассаженных по порядку.
fn make_table(n: usize) -> (Table, Vec<PlayerId>) {
    let mut registry = ClientRegistry::new();
    let players: Vec<Player> = (0..n)
        .map(|i| {
            let client = registry.register(format!("player{}", i + 1), Chips::new(5500));
            Player::from_client(&client, Chips::new(1000))
        })
        .collect();
    let ids = players.iter().map(|p| p.id).collect();
    let table = Table::set_up(Dealer::standard(), players).expect("стол должен собраться");
    (table, ids)
}

fn button(table: &Table) -> PlayerId {
    table.locate_player_with_button().id
}

#[test]
fn can_pass_the_dealer_button() {
    let (mut table, seats) = make_table(4);

    assert_eq!(button(&table), seats[0]);
    table.move_button();
    assert_eq!(button(&table), seats[1]);
}

#[test]
fn can_pass_the_button_back_to_starting_player_when_reaching_end_of_table() {
    let (mut table, seats) = make_table(2);

    assert_eq!(button(&table), seats[0]);
    table.move_button();
    assert_eq!(button(&table), seats[1]);
    table.move_button();
    assert_eq!(button(&table), seats[0]);
}

#[test]
fn can_pass_the_button_over_sat_out_players() {
    let (mut table, seats) = make_table(3);

    table.sit_player_out(seats[1]).unwrap();

    assert_eq!(button(&table), seats[0]);
    table.move_button();
    assert_eq!(button(&table), seats[2]);
    table.move_button();
    assert_eq!(button(&table), seats[0]);
}

#[test]
fn cant_give_button_to_sat_out_player() {
    let (mut table, seats) = make_table(3);

    table.sit_player_out(seats[1]).unwrap();

    assert_eq!(
        table.give_button_to_player(seats[1]),
        Err(TableError::PlayerSatOut(seats[1]))
    );
    // Кнопка осталась на месте.
    assert_eq!(button(&table), seats[0]);

    // После возвращения в игру можно.
    table.sit_player_in(seats[1]).unwrap();
    table.give_button_to_player(seats[1]).unwrap();
    assert_eq!(button(&table), seats[1]);
}

#[test]
fn cant_give_button_to_unknown_player() {
    let (mut table, _) = make_table(3);
    assert_eq!(
        table.give_button_to_player(999),
        Err(TableError::PlayerNotSeated(999))
    );
}

#[test]
fn can_give_a_specific_player_the_button() {
    let (mut table, seats) = make_table(4);

    table.give_button_to_player(seats[2]).unwrap();
    assert_eq!(button(&table), seats[2]);

    table.move_button();
    assert_eq!(button(&table), seats[3]);

    table.move_button();
    assert_eq!(button(&table), seats[0]);
}

#[test]
fn full_cycle_gives_every_active_seat_the_button_once() {
    let (mut table, seats) = make_table(6);
    table.sit_player_out(seats[2]).unwrap();
    table.sit_player_out(seats[4]).unwrap();

    let start = button(&table);
    let mut visited = Vec::new();
    for _ in 0..4 {
        table.move_button();
        visited.push(button(&table));
    }

    assert_eq!(visited, vec![seats[1], seats[3], seats[5], seats[0]]);
    assert_eq!(button(&table), start);
}

#[test]
fn sit_out_keeps_seat_position() {
    let (mut table, seats) = make_table(3);

    table.sit_player_out(seats[1]).unwrap();
    assert_eq!(table.seat_of(seats[1]), Some(1));
    assert_eq!(table.active_count(), 2);
    assert_eq!(table.seat_count(), 3);

    table.sit_player_in(seats[1]).unwrap();
    assert_eq!(table.seat_of(seats[1]), Some(1));
    assert_eq!(table.active_count(), 3);
}

#[test]
fn sitting_out_the_button_passes_it_on() {
    let (mut table, seats) = make_table(3);

    table.sit_player_out(seats[0]).unwrap();
    assert_eq!(button(&table), seats[1]);
    assert!(table.locate_player_with_button().is_active());
}

#[test]
fn last_active_player_cannot_sit_out() {
    let (mut table, seats) = make_table(2);

    table.sit_player_out(seats[0]).unwrap();
    assert_eq!(
        table.sit_player_out(seats[1]),
        Err(TableError::LastActivePlayer)
    );
    assert_eq!(button(&table), seats[1]);
}

#[test]
fn set_up_rejects_bad_seating() {
    assert!(matches!(
        Table::set_up(Dealer::standard(), Vec::new()),
        Err(TableError::NoActivePlayers)
    ));

    let dup = vec![
        Player::new(1, "a", Chips::new(100)),
        Player::new(1, "b", Chips::new(100)),
    ];
    assert!(matches!(
        Table::set_up(Dealer::standard(), dup),
        Err(TableError::DuplicatePlayer(1))
    ));

    let crowd: Vec<Player> = (1..=11).map(|i| Player::new(i, format!("p{i}"), Chips::new(100))).collect();
    assert!(matches!(
        Table::set_up(Dealer::standard(), crowd),
        Err(TableError::TooManyPlayers { players: 11, max_seats: 10 })
    ));
}

#[test]
fn with_config_rejects_invalid_stakes() {
    let mut config = TableConfig::default();
    config.stakes = TableStakes::new(Chips::new(50), Chips::new(50));
    let players = vec![
        Player::new(1, "a", Chips::new(100)),
        Player::new(2, "b", Chips::new(100)),
    ];

    assert!(matches!(
        Table::with_config(config, Dealer::standard(), players),
        Err(TableError::Validation(ValidationError::InvalidConfig(_)))
    ));
}

#[test]
fn set_up_rejects_stacks_that_overflow_one_pot() {
    let players = vec![
        Player::new(1, "whale", Chips::new(u64::MAX)),
        Player::new(2, "minnow", Chips::new(1)),
    ];

    assert!(matches!(
        Table::set_up(Dealer::standard(), players),
        Err(TableError::Validation(ValidationError::ChipsOverflow { .. }))
    ));
}
