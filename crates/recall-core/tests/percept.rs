use recall_core::{Action, ActionError, Percept, PerceptError};

#[test]
fn percept_parses_and_displays_three_symbols() {
    let p: Percept = "RXX".parse().expect("percept");
    assert_eq!(p.to_string(), "RXX");
    assert_eq!(p.symbols(), *b"RXX");
    assert!(!p.is_empty());
}

#[test]
fn percept_blank_is_empty() {
    let p: Percept = "   ".parse().expect("percept");
    assert!(p.is_empty());
    assert_eq!(p, Percept::EMPTY);

    let partly: Percept = " B ".parse().expect("percept");
    assert!(!partly.is_empty());
}

#[test]
fn percept_rejects_bad_input() {
    assert_eq!("RX".parse::<Percept>(), Err(PerceptError::Width(2)));
    assert_eq!("RXXX".parse::<Percept>(), Err(PerceptError::Width(4)));
    assert_eq!("Ré".parse::<Percept>(), Err(PerceptError::Symbol('é')));
    assert_eq!(
        Percept::from_symbols([b'R', b'\n', b'X']),
        Err(PerceptError::Symbol('\n'))
    );
}

#[test]
fn action_codes_round_trip_and_reject_unknown() {
    for action in Action::ALL {
        assert_eq!(Action::from_code(action.code()), Ok(action));
    }
    assert_eq!(Action::try_from(2u8), Ok(Action::MoveForward));
    assert_eq!(Action::from_code(3), Err(ActionError(3)));
}

#[test]
fn action_rotation_is_signed_by_direction() {
    assert_eq!(Action::TurnLeft.rotation(), -1);
    assert_eq!(Action::TurnRight.rotation(), 1);
    assert_eq!(Action::MoveForward.rotation(), 0);
    assert!(Action::TurnLeft.is_turn());
    assert!(!Action::MoveForward.is_turn());
}
