//! Zentrale Konfiguration des Track-Assistenten.
//!
//! `AssistantOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::BuildDirection;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Segment-Folgen ──────────────────────────────────────────────────

/// Maximale Anzahl Segmente beim Ablaufen einer Strecke.
pub const MAX_SEQUENCE_LENGTH: usize = 4096;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Assistenten-Optionen.
/// Wird als [`AssistantOptions::FILE_NAME`] neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantOptions {
    /// Obergrenze für die Länge einer aufgebauten Segment-Folge
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,
    /// Baurichtung nach dem Start bzw. nach dem Zurücksetzen
    #[serde(default)]
    pub default_build_direction: BuildDirection,
    /// Kachel-Klick: erstes Track-Element der Kachel (true) oder das höchste (false)
    #[serde(default = "default_pick_first_track_element")]
    pub pick_first_track_element: bool,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            max_sequence_length: MAX_SEQUENCE_LENGTH,
            default_build_direction: BuildDirection::Next,
            pick_first_track_element: true,
        }
    }
}

/// Serde-Default für `max_sequence_length` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_max_sequence_length() -> usize {
    MAX_SEQUENCE_LENGTH
}

fn default_pick_first_track_element() -> bool {
    true
}

impl AssistantOptions {
    /// Dateiname der Optionen-Datei neben der Binary.
    pub const FILE_NAME: &'static str = "ride_track_assistant.toml";

    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlt die Datei, ist sie unlesbar oder fehlerhaft, gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "Keine Optionen unter {}, Standardwerte aktiv",
                    path.display()
                );
                return Self::default();
            }
            Err(e) => {
                log::warn!("Optionen unter {} nicht lesbar: {}", path.display(), e);
                return Self::default();
            }
        };

        toml::from_str::<Self>(&content)
            .inspect(|options| {
                log::info!(
                    "Optionen aus {} übernommen (Folgen bis {} Stücke)",
                    path.display(),
                    options.sequence_limit()
                )
            })
            .unwrap_or_else(|e| {
                log::warn!("Fehlerhafte Optionen in {}: {}", path.display(), e);
                Self::default()
            })
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nach {} nicht schreibbar", path.display()))?;
        log::info!("Optionen nach {} geschrieben", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei im Verzeichnis der laufenden Binary.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(Self::FILE_NAME)
    }

    /// Effektive Längen-Obergrenze (mindestens ein Segment).
    pub fn sequence_limit(&self) -> usize {
        self.max_sequence_length.max(1)
    }
}
