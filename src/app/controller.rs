//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState, CommandLogEntry};
use crate::core::World;

/// Orchestriert Intents und Use-Cases auf den AppState.
///
/// Die Welt wird pro Aufruf geliehen; zwischen zwei Aufrufen darf sie sich
/// ändern, danach hält `RefreshRequested` die abgeleiteten Werte aktuell.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<W: World + ?Sized>(
        &mut self,
        state: &mut AppState,
        world: &W,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, world, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; nur erfolgreiche Commands
    /// landen im Verlauf.
    pub fn handle_command<W: World + ?Sized>(
        &mut self,
        state: &mut AppState,
        world: &W,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let logged = command.clone();
        let selected_before = state.selected_segment().copied();

        match command {
            // === Selektion ===
            AppCommand::PickTile {
                coords,
                pick_first_track_element,
            } => handlers::selection::pick_tile(state, world, coords, pick_first_track_element),
            AppCommand::MoveSelection { direction } => {
                handlers::selection::move_selection(state, direction)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::RefreshDerived => handlers::selection::refresh(state, world),

            // === Bau-Zustand ===
            AppCommand::SetBuildDirection { direction } => {
                handlers::build::set_direction(state, direction)
            }
            AppCommand::SetTrackType { track_type } => {
                handlers::build::set_track_type(state, track_type)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
        }

        let selected_after = state.selected_segment().copied();
        state.command_log.record(CommandLogEntry {
            command: logged,
            selected_before,
            selected_after,
        });

        Ok(())
    }
}
