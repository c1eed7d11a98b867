// src/bin/round_dev_cli.rs
//
// Прогон одного раунда за столом из 4 игроков с логами в консоль.
// RUST_LOG=debug cargo run --bin round_dev_cli [seed]

use poker_round::domain::{Chips, ClientRegistry, Player, Table, TableConfig};
use poker_round::engine::{Dealer, PlayerActionKind, Round, RoundError};
use poker_round::eval::{describe_hand, evaluate_best_hand};
use poker_round::infra::DeterministicRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    println!("=== ROUND DEV CLI (seed = {seed}) ===\n");

    let mut registry = ClientRegistry::new();
    let players: Vec<Player> = ["alice", "bob", "carol", "dave"]
        .iter()
        .map(|name| {
            let client = registry.register(*name, Chips::new(5_000));
            Player::from_client(&client, Chips::new(1_000))
        })
        .collect();

    let dealer = Dealer::standard().shuffle_every_round(DeterministicRng::from_u64(seed));

    let config = TableConfig::from_json(r#"{ "max_seats": 6, "stakes": { "small_blind": 10, "big_blind": 20 } }"#)?;
    let mut table = Table::with_config(config, dealer, players)?;

    let result = {
        let mut round = Round::start(&mut table)?;

        let sb = round.small_blind_player().map(|p| p.id).ok_or(RoundError::NotEnoughPlayers { active: 0 })?;
        round.post_small_blind(sb)?;
        let bb = round.big_blind_player().map(|p| p.id).ok_or(RoundError::NotEnoughPlayers { active: 0 })?;
        round.post_big_blind(bb)?;

        // Простая стратегия: первый на улице рейзит префлоп, остальные коллят/чекают.
        let mut raised = false;
        while let Some(player) = round.whos_turn_is_it() {
            let id = player.id;
            let owes = round
                .participants()
                .iter()
                .any(|p| p.player_id == id && p.street_bet < round.betting().current_bet);
            let kind = if !raised {
                raised = true;
                PlayerActionKind::Raise(Chips::new(40))
            } else if owes {
                PlayerActionKind::Call
            } else {
                PlayerActionKind::Check
            };
            if let Err(err) = round.act(id, kind) {
                println!("  {id}: {err}, фолд");
                round.act(id, PlayerActionKind::Fold)?;
            }
        }

        println!("Действия:");
        for action in round.actions() {
            println!("  {action}");
        }

        for p in round.participants() {
            let rank = evaluate_best_hand(&p.hole_cards, round.board());
            let cards: Vec<String> = p.hole_cards.iter().map(ToString::to_string).collect();
            println!("  игрок {}: {} -> {}", p.player_id, cards.join(" "), describe_hand(rank));
        }

        round.end()?
    };

    let board: Vec<String> = result.board.iter().map(ToString::to_string).collect();
    println!("\nБорд: {}", board.join(" "));
    println!("Банк: {}", result.pot);
    if let Some(refund) = result.refund {
        println!("  игроку {} возвращено {}", refund.player_id, refund.amount);
    }
    for payout in &result.payouts {
        println!("  игрок {} получает {}", payout.player_id, payout.amount);
    }
    println!(
        "Кнопка теперь у: {}",
        table.locate_player_with_button().name
    );

    Ok(())
}
