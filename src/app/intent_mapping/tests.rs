use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{BuildDirection, CoordsXY, TrackType};
use crate::shared::AssistantOptions;

use super::map_intent_to_commands;

#[test]
fn test_tile_pick_carries_pick_option_and_refreshes() {
    let state = AppState::with_options(AssistantOptions {
        pick_first_track_element: false,
        ..AssistantOptions::default()
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TilePicked {
            coords: CoordsXY::new(64, 32),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::PickTile {
            pick_first_track_element: false,
            ..
        }
    ));
    assert!(matches!(commands[1], AppCommand::RefreshDerived));
}

#[test]
fn test_iterate_sets_direction_before_moving() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::IterateRequested {
            direction: BuildDirection::Previous,
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(
        commands[0],
        AppCommand::SetBuildDirection {
            direction: BuildDirection::Previous
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::MoveSelection {
            direction: BuildDirection::Previous
        }
    ));
    assert!(matches!(commands[2], AppCommand::RefreshDerived));
}

#[test]
fn test_track_type_change_maps_to_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TrackTypeChanged {
            track_type: TrackType::UP_25,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::SetTrackType {
            track_type: TrackType::UP_25
        }
    ));
}

#[test]
fn test_refresh_maps_to_single_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::RefreshRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RefreshDerived));
}
