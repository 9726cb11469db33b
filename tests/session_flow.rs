use pixel_paint::{Cell, Color, Command, PaintSession, Repaint, SessionConfig, SessionError};

fn create_test_session(dimension: usize) -> PaintSession {
    let config = SessionConfig {
        dimension,
        ..SessionConfig::default()
    };
    PaintSession::new(&config).unwrap()
}

fn color(name: &str) -> Color {
    Color::from(name)
}

#[test]
fn test_drag_paints_every_visited_cell() {
    let mut session = create_test_session(5);
    session.select_color(&color("red")).unwrap();

    session.pointer_down(0, 0, false).unwrap();
    session.pointer_move(0, 1, true).unwrap();
    session.pointer_move(1, 1, true).unwrap();
    session.pointer_up();
    session.pointer_move(2, 2, false).unwrap();

    for cell in [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)] {
        assert_eq!(session.grid().color_at(cell), Some(&color("red")));
    }
    assert_eq!(session.grid().get(2, 2).unwrap(), &color("white"));
    assert!(session.state().is_idle());
}

#[test]
fn test_repeated_move_over_same_color_is_quiet() {
    let mut session = create_test_session(3);
    session.pointer_down(1, 1, false).unwrap();

    assert_eq!(session.pointer_move(1, 1, true), Ok(Repaint::Nothing));
}

#[test]
fn test_commands_replay_like_direct_calls() {
    let commands = vec![
        Command::SelectColor(color("blue")),
        Command::PointerDown {
            row: 2,
            col: 2,
            modifier_active: false,
        },
        Command::PointerMove {
            row: 2,
            col: 3,
            button_pressed: true,
        },
        Command::PointerUp,
        Command::SelectColor(color("yellow")),
        Command::PointerDown {
            row: 0,
            col: 0,
            modifier_active: true,
        },
    ];

    // Commands survive a trip through JSON so they can be logged and replayed
    let json = serde_json::to_string(&commands).unwrap();
    let replayed: Vec<Command> = serde_json::from_str(&json).unwrap();

    let mut session = create_test_session(4);
    for command in replayed {
        session.apply(command).unwrap();
    }

    assert_eq!(session.grid().get(2, 2).unwrap(), &color("blue"));
    assert_eq!(session.grid().get(2, 3).unwrap(), &color("blue"));
    assert_eq!(session.grid().get(3, 3).unwrap(), &color("yellow"));
    assert_eq!(session.current_color(), &color("yellow"));
}

#[test]
fn test_fill_then_clear() {
    let mut session = create_test_session(3);
    session.select_color(&color("blue")).unwrap();

    match session.pointer_down(1, 1, true).unwrap() {
        Repaint::Cells(changes) => {
            assert_eq!(changes.len(), 9);
            assert!(changes.iter().all(|change| change.color == color("blue")));
        }
        other => panic!("expected cell repaint, got {:?}", other),
    }

    assert_eq!(session.clear_canvas(), Repaint::Canvas);
    assert!(session.grid().iter().all(|(_, c)| *c == color("white")));
    assert_eq!(session.current_color(), &color("blue"));
}

#[test]
fn test_unknown_color_command_is_rejected() {
    let mut session = create_test_session(3);
    let result = session.apply(Command::SelectColor(color("teal")));
    assert_eq!(result, Err(SessionError::UnknownColor(color("teal"))));
    assert_eq!(session.current_color(), &color("black"));
}

#[test]
fn test_out_of_bounds_move_does_not_touch_grid() {
    let mut session = create_test_session(3);
    let before = session.grid().clone();

    assert!(matches!(
        session.pointer_move(0, 3, true),
        Err(SessionError::Grid(_))
    ));
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_move_after_fill_still_paints_while_pressed() {
    let mut session = create_test_session(3);
    session.select_color(&color("blue")).unwrap();
    session.pointer_down(0, 0, true).unwrap();
    assert!(session.state().is_idle());

    session.select_color(&color("red")).unwrap();
    let repaint = session.pointer_move(2, 2, true).unwrap();

    assert!(matches!(repaint, Repaint::Cells(ref changes) if changes.len() == 1));
    assert_eq!(session.grid().get(2, 2).unwrap(), &color("red"));
    assert_eq!(session.grid().get(1, 1).unwrap(), &color("blue"));
}
