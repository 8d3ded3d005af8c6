//! Ride Track Assistant.
//!
//! Lädt eine Welt aus einer JSON-Fixture, selektiert die Segment-Folge unter
//! einer Kachel und gibt Folge, Nachbarn und Bauposition aus.

use clap::{Parser, ValueEnum};
use ride_track_assistant::app::BuildRequest;
use ride_track_assistant::{
    AppController, AppIntent, AppState, AssistantOptions, BuildDirection, CoordsXY, MemoryWorld,
    TrackType,
};
use std::path::PathBuf;

/// Selektiert eine Segment-Folge in einer Welt-Fixture und zeigt den Bau-Zustand
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// JSON-Snapshot der Welt
    world: PathBuf,

    /// Weltkoordinate x der angeklickten Kachel
    x: i32,

    /// Weltkoordinate y der angeklickten Kachel
    y: i32,

    /// Optionen-Datei (Standard: neben der Binary)
    #[clap(short, long)]
    options: Option<PathBuf>,

    /// Anzahl Schritte, um die die Selektion bewegt wird
    #[clap(short, long, default_value = "0")]
    steps: usize,

    /// Richtung der Schritte
    #[clap(short, long, value_enum, default_value = "next")]
    direction: StepDirection,

    /// Track-Typ des nächsten Baus
    #[clap(short, long)]
    track_type: Option<u16>,

    /// Höchstes statt erstes Track-Element der Kachel wählen
    #[clap(long)]
    topmost: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StepDirection {
    Next,
    Previous,
}

impl From<StepDirection> for BuildDirection {
    fn from(direction: StepDirection) -> Self {
        match direction {
            StepDirection::Next => BuildDirection::Next,
            StepDirection::Previous => BuildDirection::Previous,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Ride Track Assistant v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let config_path = args
        .options
        .clone()
        .unwrap_or_else(AssistantOptions::config_path);
    let mut options = AssistantOptions::load_from_file(&config_path);
    if args.topmost {
        options.pick_first_track_element = false;
    }

    let world = MemoryWorld::load_from_file(&args.world)?;
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let mut intents = vec![AppIntent::TilePicked {
        coords: CoordsXY::new(args.x, args.y),
    }];
    if let Some(track_type) = args.track_type {
        intents.push(AppIntent::TrackTypeChanged {
            track_type: TrackType(track_type),
        });
    }
    intents.extend((0..args.steps).map(|_| AppIntent::IterateRequested {
        direction: args.direction.into(),
    }));

    for intent in intents {
        controller.handle_intent(&mut state, &world, intent)?;
    }

    print_report(&state);
    Ok(())
}

fn print_report(state: &AppState) {
    if state.track_elements_on_selected_tile.is_empty() {
        println!("Keine Track-Elemente auf der Kachel.");
        return;
    }

    println!(
        "Track-Elemente auf der Kachel: {}",
        state.track_elements_on_selected_tile.len()
    );
    println!(
        "Segment-Folge: {} Stück(e), Rundkurs: {}",
        state.cursor.len(),
        state.cursor.is_complete_circuit()
    );

    let selected = state.cursor.selected_index();
    for (index, segment) in state.cursor.sequence().iter().enumerate() {
        let marker = if Some(index) == selected { ">" } else { " " };
        println!("{} {:>4}  {}", marker, index, segment);
    }

    let derived = &state.derived;
    println!(
        "Weiter: {:?} (möglich: {}), Zurück: {:?} (möglich: {})",
        derived.next_outcome, derived.has_next, derived.previous_outcome, derived.has_previous
    );
    if let Some(position) = derived.next_position {
        println!("Nächste Position: {}", position);
    }
    if let Some(position) = derived.previous_position {
        println!("Vorherige Position: {}", position);
    }

    let trail = state.command_log.selection_trail();
    if trail.len() > 1 {
        println!("Selektions-Verlauf ({} Commands):", state.command_log.len());
        for segment in &trail {
            println!("  {}", segment);
        }
    }

    match state.build.finished() {
        Some(BuildRequest {
            ride,
            ride_type,
            track_type,
            location,
        }) => println!(
            "Bau-Anfrage: Ride {} (Typ {}), Track-Typ {} bei {}",
            ride, ride_type.0, track_type, location
        ),
        None => match state.build.initial_build_location {
            Some(location) => println!("Anschlusslage: {} (kein Track-Typ gewählt)", location),
            None => println!("Keine Bauposition."),
        },
    }
}
