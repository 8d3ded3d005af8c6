use ride_track_assistant::app::BuildRequest;
use ride_track_assistant::{
    AppCommand, AppController, AppIntent, AppState, BuildDirection, CoordsXY, CoordsXYZD,
    Direction, MemoryWorld, NextSegmentOutcome, RideId, RideType, TrackType,
};

fn park() -> MemoryWorld {
    MemoryWorld::from_json(include_str!("fixtures/park.json"))
        .expect("Fixture sollte gültig sein")
}

fn send(controller: &mut AppController, state: &mut AppState, world: &MemoryWorld, intent: AppIntent) {
    controller
        .handle_intent(state, world, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn pick(controller: &mut AppController, state: &mut AppState, world: &MemoryWorld, x: i32, y: i32) {
    send(
        controller,
        state,
        world,
        AppIntent::TilePicked {
            coords: CoordsXY::new(x, y),
        },
    );
}

fn iterate(
    controller: &mut AppController,
    state: &mut AppState,
    world: &MemoryWorld,
    direction: BuildDirection,
) {
    send(controller, state, world, AppIntent::IterateRequested { direction });
}

#[test]
fn test_tile_pick_on_open_ride_builds_sequence_and_derived_state() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    pick(&mut controller, &mut state, &world, 260, 10);

    assert_eq!(state.track_elements_on_selected_tile.len(), 1);
    assert_eq!(state.track_elements_on_selected_tile[0].index, 2);
    assert_eq!(state.cursor.len(), 4);
    assert!(!state.cursor.is_complete_circuit());
    assert_eq!(state.cursor.selected_index(), Some(0));
    assert_eq!(
        state.selected_segment().map(|s| s.track_type),
        Some(TrackType::END_STATION)
    );

    let derived = state.derived;
    assert_eq!(
        derived.iterator_position,
        Some(CoordsXYZD::new(256, 0, 0, Direction::D0))
    );
    assert_eq!(derived.next_outcome, NextSegmentOutcome::Real);
    assert_eq!(derived.previous_outcome, NextSegmentOutcome::None);
    assert!(derived.has_next);
    assert!(!derived.has_previous);

    assert_eq!(
        state.build.initial_build_location,
        Some(CoordsXYZD::new(384, 0, 16, Direction::D0))
    );
    assert_eq!(state.build.finished(), None);

    match state.command_log.last() {
        Some(entry) => assert!(matches!(entry.command, AppCommand::RefreshDerived)),
        None => panic!("Verlauf sollte Commands enthalten"),
    }
    assert_eq!(state.command_log.selection_trail().len(), 1);
}

#[test]
fn test_iterating_reaches_ghost_follower_and_completes_build_request() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    pick(&mut controller, &mut state, &world, 260, 10);

    iterate(&mut controller, &mut state, &world, BuildDirection::Next);
    iterate(&mut controller, &mut state, &world, BuildDirection::Next);

    assert_eq!(state.cursor.selected_index(), Some(2));
    assert_eq!(state.derived.next_outcome, NextSegmentOutcome::Ghost);
    assert_eq!(state.derived.previous_outcome, NextSegmentOutcome::Real);

    send(
        &mut controller,
        &mut state,
        &world,
        AppIntent::TrackTypeChanged {
            track_type: TrackType::FLAT,
        },
    );

    assert_eq!(
        state.build.finished(),
        Some(BuildRequest {
            ride: RideId(2),
            ride_type: RideType(52),
            track_type: TrackType::FLAT,
            location: CoordsXYZD::new(384, 0, 16, Direction::D0),
        })
    );

    iterate(&mut controller, &mut state, &world, BuildDirection::Previous);

    assert_eq!(state.cursor.selected_index(), Some(1));
    assert_eq!(state.build.direction, Some(BuildDirection::Previous));
    assert_eq!(
        state.build.finished().map(|request| request.location),
        Some(CoordsXYZD::new(224, 0, 0, Direction::D0))
    );
}

#[test]
fn test_iterating_past_open_end_keeps_selection() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    pick(&mut controller, &mut state, &world, 260, 10);

    iterate(&mut controller, &mut state, &world, BuildDirection::Previous);

    assert_eq!(state.cursor.selected_index(), Some(0));
    assert!(!state.derived.has_previous);
}

#[test]
fn test_command_log_traces_selected_segments() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    pick(&mut controller, &mut state, &world, 260, 10);

    iterate(&mut controller, &mut state, &world, BuildDirection::Previous);
    iterate(&mut controller, &mut state, &world, BuildDirection::Next);
    iterate(&mut controller, &mut state, &world, BuildDirection::Next);

    let trail: Vec<i32> = state
        .command_log
        .selection_trail()
        .iter()
        .map(|segment| segment.location.x)
        .collect();
    assert_eq!(trail, vec![256, 288, 320]);

    let moves = state
        .command_log
        .iter()
        .filter(|entry| matches!(entry.command, AppCommand::MoveSelection { .. }))
        .count();
    assert_eq!(moves, 3);
}

#[test]
fn test_circuit_pick_wraps_backwards() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Zweite Kachel der ersten Rechtskurve
    pick(&mut controller, &mut state, &world, 100, 130);

    assert!(state.cursor.is_complete_circuit());
    assert_eq!(state.cursor.len(), 4);
    assert_eq!(
        state.selected_segment().map(|s| s.location),
        Some(CoordsXYZD::new(64, 128, 0, Direction::D0))
    );
    assert!(state.derived.has_previous);

    iterate(&mut controller, &mut state, &world, BuildDirection::Previous);

    assert_eq!(state.cursor.selected_index(), Some(3));
    assert_eq!(
        state.selected_segment().map(|s| s.location),
        Some(CoordsXYZD::new(0, 96, 0, Direction::D3))
    );
    assert_eq!(state.derived.next_outcome, NextSegmentOutcome::Real);
    assert_eq!(state.derived.previous_outcome, NextSegmentOutcome::Real);
}

#[test]
fn test_stall_tile_selects_nothing() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    pick(&mut controller, &mut state, &world, 256, 64);

    assert!(state.track_elements_on_selected_tile.is_empty());
    assert!(state.cursor.is_empty());
    assert_eq!(state.selected_segment(), None);
    assert!(!state.derived.has_next);
}

#[test]
fn test_selection_cleared_resets_cursor_and_build_request() {
    let world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    pick(&mut controller, &mut state, &world, 260, 10);
    send(
        &mut controller,
        &mut state,
        &world,
        AppIntent::TrackTypeChanged {
            track_type: TrackType::FLAT,
        },
    );
    assert!(state.build.finished().is_some());

    send(&mut controller, &mut state, &world, AppIntent::SelectionCleared);

    assert!(state.cursor.is_empty());
    assert!(state.track_elements_on_selected_tile.is_empty());
    assert_eq!(state.derived.iterator_position, None);
    assert_eq!(state.build.finished(), None);
    assert_eq!(state.build.track_type, Some(TrackType::FLAT));
}

#[test]
fn test_refresh_after_world_change_updates_outcome() {
    let mut world = park();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    pick(&mut controller, &mut state, &world, 260, 10);
    iterate(&mut controller, &mut state, &world, BuildDirection::Next);
    iterate(&mut controller, &mut state, &world, BuildDirection::Next);
    assert_eq!(state.derived.next_outcome, NextSegmentOutcome::Ghost);

    assert!(world.set_ghost(RideId(2), CoordsXYZD::new(352, 0, 16, Direction::D0), false));
    send(&mut controller, &mut state, &world, AppIntent::RefreshRequested);

    assert_eq!(state.derived.next_outcome, NextSegmentOutcome::Real);
}
