//! Порядок блайндов относительно кнопки и отказ при нарушении очереди.

use poker_round::domain::{Chips, ClientRegistry, HeadsUpBlinds, Player, PlayerId, Table, TableConfig};
use poker_round::engine::{Dealer, Round, RoundError, RoundPhase};

const STACK: u64 = 1_000;

fn make_table_with(n: usize, config: TableConfig) -> (Table, Vec<PlayerId>) {
    let mut registry = ClientRegistry::new();
    let players: Vec<Player> = (0..n)
        .map(|i| {
            let client = registry.register(format!("player{}", i + 1), Chips::new(5500));
            Player::from_client(&client, Chips::new(STACK))
        })
        .collect();
    let ids = players.iter().map(|p| p.id).collect();
    let table = Table::with_config(config, Dealer::standard(), players).expect("стол должен собраться");
    (table, ids)
}

fn make_table(n: usize) -> (Table, Vec<PlayerId>) {
    make_table_with(n, TableConfig::default())
}

fn turn(round: &Round<'_>) -> Option<PlayerId> {
    round.whos_turn_is_it().map(|p| p.id)
}

#[test]
fn when_button_gets_given_to_a_player_ensure_blinds_are_followed() {
    let (mut table, seats) = make_table(4);
    table.give_button_to_player(seats[2]).unwrap();

    let mut round = Round::start(&mut table).unwrap();

    assert_eq!(turn(&round), Some(seats[3]));
    round.post_small_blind(seats[3]).unwrap();
    assert_eq!(turn(&round), Some(seats[0]));
    round.post_big_blind(seats[0]).unwrap();

    assert_eq!(turn(&round), Some(seats[1]));
    assert_eq!(round.phase(), RoundPhase::Betting);
}

#[test]
fn blinds_follow_the_button_for_every_seat() {
    for k in 0..4 {
        let (mut table, seats) = make_table(4);
        table.give_button_to_player(seats[k]).unwrap();

        let round = Round::start(&mut table).unwrap();
        assert_eq!(round.small_blind_player().map(|p| p.id), Some(seats[(k + 1) % 4]));
        assert_eq!(round.big_blind_player().map(|p| p.id), Some(seats[(k + 2) % 4]));
        assert_eq!(turn(&round), Some(seats[(k + 1) % 4]));
        assert_eq!(round.phase(), RoundPhase::AwaitingSmallBlind);
    }
}

#[test]
fn blinds_skip_sat_out_seats() {
    let (mut table, seats) = make_table(4);
    table.sit_player_out(seats[1]).unwrap();

    let round = Round::start(&mut table).unwrap();
    assert_eq!(round.small_blind_player().map(|p| p.id), Some(seats[2]));
    assert_eq!(round.big_blind_player().map(|p| p.id), Some(seats[3]));
    assert!(round.hole_cards(seats[1]).is_none());
}

#[test]
fn blinds_move_chips_from_stack_to_pot() {
    let (mut table, seats) = make_table(4);

    {
        let mut round = Round::start(&mut table).unwrap();
        round.post_small_blind(seats[1]).unwrap();
        assert_eq!(round.pot(), Chips::new(25));
        round.post_big_blind(seats[2]).unwrap();
        assert_eq!(round.pot(), Chips::new(75));

        let log: Vec<String> = round.actions().iter().map(ToString::to_string).collect();
        assert_eq!(
            log,
            vec![
                "player2 has posted Small Blind (25).".to_string(),
                "player3 has posted Big Blind (50).".to_string(),
            ]
        );
    }

    assert_eq!(table.player(seats[1]).unwrap().stack, Chips::new(STACK - 25));
    assert_eq!(table.player(seats[2]).unwrap().stack, Chips::new(STACK - 50));
    assert_eq!(table.player(seats[0]).unwrap().stack, Chips::new(STACK));
}

#[test]
fn big_blind_before_small_blind_is_rejected_without_changes() {
    let (mut table, seats) = make_table(4);
    let mut round = Round::start(&mut table).unwrap();

    let err = round.post_big_blind(seats[2]).unwrap_err();
    assert_eq!(
        err,
        RoundError::WrongPhase {
            expected: RoundPhase::AwaitingBigBlind,
            actual: RoundPhase::AwaitingSmallBlind,
        }
    );
    assert_eq!(round.phase(), RoundPhase::AwaitingSmallBlind);
    assert_eq!(round.pot(), Chips::ZERO);
    assert!(round.actions().is_empty());
    assert_eq!(turn(&round), Some(seats[1]));
}

#[test]
fn small_blind_from_wrong_player_is_rejected() {
    let (mut table, seats) = make_table(4);
    let mut round = Round::start(&mut table).unwrap();

    assert_eq!(
        round.post_small_blind(seats[2]),
        Err(RoundError::NotPlayersTurn { player_id: seats[2] })
    );
    assert_eq!(
        round.post_small_blind(4242),
        Err(RoundError::PlayerNotInRound(4242))
    );
    assert_eq!(round.pot(), Chips::ZERO);
    assert_eq!(round.phase(), RoundPhase::AwaitingSmallBlind);

    round.post_small_blind(seats[1]).unwrap();

    // Второй раз SB не принимается.
    assert!(matches!(
        round.post_small_blind(seats[1]),
        Err(RoundError::WrongPhase { .. })
    ));
    // BB только от своего места.
    assert_eq!(
        round.post_big_blind(seats[3]),
        Err(RoundError::NotPlayersTurn { player_id: seats[3] })
    );
    assert_eq!(round.pot(), Chips::new(25));
}

#[test]
fn short_stack_cannot_post_blind() {
    let mut registry = ClientRegistry::new();
    let mut players: Vec<Player> = (0..3)
        .map(|i| Player::from_client(&registry.register(format!("p{i}"), Chips::ZERO), Chips::new(STACK)))
        .collect();
    players[1].stack = Chips::new(10);
    let short = players[1].id;
    let mut table = Table::set_up(Dealer::standard(), players).unwrap();

    let mut round = Round::start(&mut table).unwrap();
    assert_eq!(
        round.post_small_blind(short),
        Err(RoundError::NotEnoughChips {
            required: Chips::new(25),
            available: Chips::new(10),
        })
    );
    assert_eq!(round.pot(), Chips::ZERO);
    assert_eq!(round.table().player(short).unwrap().stack, Chips::new(10));
}

#[test]
fn heads_up_button_posts_small_blind_by_default() {
    let (mut table, seats) = make_table(2);

    let mut round = Round::start(&mut table).unwrap();
    assert_eq!(round.small_blind_player().map(|p| p.id), Some(seats[0]));
    assert_eq!(round.big_blind_player().map(|p| p.id), Some(seats[1]));

    round.post_small_blind(seats[0]).unwrap();
    round.post_big_blind(seats[1]).unwrap();
    // Префлоп первым ходит кнопка (она же SB).
    assert_eq!(turn(&round), Some(seats[0]));
}

#[test]
fn heads_up_standard_rule_uses_ring_seat_logic() {
    let config = TableConfig {
        heads_up: HeadsUpBlinds::Standard,
        ..TableConfig::default()
    };
    let (mut table, seats) = make_table_with(2, config);

    let round = Round::start(&mut table).unwrap();
    assert_eq!(round.small_blind_player().map(|p| p.id), Some(seats[1]));
    assert_eq!(round.big_blind_player().map(|p| p.id), Some(seats[0]));
}

#[test]
fn round_needs_two_active_players() {
    let (mut table, seats) = make_table(2);
    table.sit_player_out(seats[1]).unwrap();

    assert!(matches!(
        Round::start(&mut table),
        Err(RoundError::NotEnoughPlayers { active: 1 })
    ));
}

#[test]
fn every_active_player_gets_two_unique_hole_cards() {
    let (mut table, seats) = make_table(5);
    let round = Round::start(&mut table).unwrap();

    let mut all = Vec::new();
    for id in &seats {
        let cards = round.hole_cards(*id).expect("игрок в раунде");
        assert_eq!(cards.len(), 2);
        all.extend_from_slice(cards);
    }
    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), 10);
}

fn table_with_stacks(stacks: &[u64]) -> (Table, Vec<PlayerId>) {
    let players: Vec<Player> = stacks
        .iter()
        .enumerate()
        .map(|(i, &stack)| Player::new(i as PlayerId + 1, format!("player{}", i + 1), Chips::new(stack)))
        .collect();
    let ids = players.iter().map(|p| p.id).collect();
    let table = Table::set_up(Dealer::standard(), players).expect("стол должен собраться");
    (table, ids)
}

#[test]
fn players_without_chips_are_not_dealt_in() {
    let (mut table, s) = table_with_stacks(&[STACK, 0, STACK, STACK]);
    let mut round = Round::start(&mut table).unwrap();

    assert!(round.hole_cards(s[1]).is_none());
    assert_eq!(round.participants().len(), 3);
    assert_eq!(round.small_blind_player().map(|p| p.id), Some(s[2]));
    assert_eq!(round.big_blind_player().map(|p| p.id), Some(s[3]));

    round.post_small_blind(s[2]).unwrap();
    round.post_big_blind(s[3]).unwrap();
    assert_eq!(turn(&round), Some(s[0]));
    assert_eq!(
        round.post_small_blind(s[1]),
        Err(RoundError::WrongPhase {
            expected: RoundPhase::AwaitingSmallBlind,
            actual: RoundPhase::Betting,
        })
    );
}

#[test]
fn busted_button_holder_passes_blinds_to_the_next_two_seats() {
    let (mut table, s) = table_with_stacks(&[0, STACK, STACK, STACK]);
    assert_eq!(table.locate_player_with_button().id, s[0]);

    let round = Round::start(&mut table).unwrap();
    assert_eq!(round.small_blind_player().map(|p| p.id), Some(s[1]));
    assert_eq!(round.big_blind_player().map(|p| p.id), Some(s[2]));
    assert_eq!(turn(&round), Some(s[1]));
}

#[test]
fn round_needs_two_players_with_chips() {
    let (mut table, _) = table_with_stacks(&[STACK, 0, 0]);
    assert!(matches!(
        Round::start(&mut table),
        Err(RoundError::NotEnoughPlayers { active: 1 })
    ));
}
