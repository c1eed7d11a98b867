//! Текстовое представление действий служит контрактом для логов и UI.

use poker_round::domain::{Action, ActionKind, Chips, ClientRegistry, Move, Player, ValidationError};

fn xlink() -> Player {
    let mut registry = ClientRegistry::new();
    let client = registry.register("xLink", Chips::new(5000));
    Player::from_client(&client, Chips::new(1000))
}

#[test]
fn can_create_action_for_check() {
    let action = Action::new(&xlink(), ActionKind::Check, None).unwrap();
    assert_eq!(action.to_string(), "xLink has checked.");
}

#[test]
fn can_create_action_for_call() {
    let action = Action::new(&xlink(), ActionKind::Call, Some(Chips::new(250))).unwrap();
    assert_eq!(action.to_string(), "xLink has called 250.");
}

#[test]
fn can_create_action_for_raise() {
    let action = Action::new(&xlink(), ActionKind::Raise, Some(Chips::new(999))).unwrap();
    assert_eq!(action.to_string(), "xLink has raised 999.");
}

#[test]
fn can_create_action_for_fold() {
    let action = Action::new(&xlink(), ActionKind::Fold, None).unwrap();
    assert_eq!(action.to_string(), "xLink has folded.");
}

#[test]
fn can_create_action_for_allin() {
    let action = Action::new(&xlink(), ActionKind::AllIn, Some(Chips::new(2453))).unwrap();
    assert_eq!(action.to_string(), "xLink has pushed ALL IN (2453).");
}

#[test]
fn can_create_action_for_sb() {
    let action = Action::new(&xlink(), ActionKind::SmallBlind, Some(Chips::new(25))).unwrap();
    assert_eq!(action.to_string(), "xLink has posted Small Blind (25).");
}

#[test]
fn can_create_action_for_bb() {
    let action = Action::new(&xlink(), ActionKind::BigBlind, Some(Chips::new(50))).unwrap();
    assert_eq!(action.to_string(), "xLink has posted Big Blind (50).");
}

#[test]
fn amount_is_rendered_exactly_for_kinds_that_carry_one() {
    let player = xlink();
    let amount = Chips::new(8642);

    for kind in ActionKind::ALL {
        let text = if kind.requires_amount() {
            Action::new(&player, kind, Some(amount)).unwrap().to_string()
        } else {
            Action::new(&player, kind, None).unwrap().to_string()
        };
        assert_eq!(
            text.contains("8642"),
            kind.requires_amount(),
            "{kind:?}: {text}"
        );
        assert!(text.starts_with("xLink has "), "{kind:?}: {text}");
    }
}

#[test]
fn missing_or_extra_amount_is_rejected() {
    let player = xlink();

    for kind in [ActionKind::Call, ActionKind::Raise, ActionKind::AllIn, ActionKind::SmallBlind, ActionKind::BigBlind] {
        assert_eq!(
            Action::new(&player, kind, None),
            Err(ValidationError::MissingAmount(kind))
        );
    }
    for kind in [ActionKind::Check, ActionKind::Fold] {
        assert_eq!(
            Action::new(&player, kind, Some(Chips::new(1))),
            Err(ValidationError::UnexpectedAmount(kind))
        );
    }
}

#[test]
fn typed_constructors_match_generic_one() {
    let player = xlink();
    let amount = Chips::new(300);

    assert_eq!(Action::call(&player, amount), Action::new(&player, ActionKind::Call, Some(amount)).unwrap());
    assert_eq!(Action::fold(&player).kind(), ActionKind::Fold);
    assert_eq!(Action::fold(&player).amount(), None);
    assert_eq!(Action::all_in(&player, amount).get_move(), Move::AllIn(amount));
    assert_eq!(Action::big_blind(&player, amount).amount(), Some(amount));
    assert_eq!(Action::check(&player).player_id(), player.id);
    assert_eq!(Action::raise(&player, amount).player_name(), "xLink");
}
