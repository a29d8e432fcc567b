//! Zentrale Konfiguration für das Bézier-Sketchpad.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte (Farben).
//! Geometrie der Hitboxen und Sampling bleiben `const` im Core, da sie
//! das Auswahl- und Tessellationsverhalten exakt festlegen.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstergröße beim Start [Breite, Höhe] in Pixeln.
pub const WINDOW_SIZE_DEFAULT: [f32; 2] = [1280.0, 720.0];

// ── Farben ──────────────────────────────────────────────────────────

/// Füllfarbe der Anker- und Kontrollpunkt-Quadrate (RGBA: Grau, #5A5A5A).
pub const HANDLE_COLOR: [f32; 4] = [0.353, 0.353, 0.353, 1.0];
/// Farbe des gerade gegriffenen Punkts (RGBA: Magenta).
pub const HANDLE_COLOR_GRABBED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Füllfarbe der Kurven-Sample-Punkte (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_sketchpad.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Füllfarbe der Punkt-Quadrate (RGBA)
    pub handle_color: [f32; 4],
    /// Farbe des gegriffenen Punkts während eines Drags
    pub handle_color_grabbed: [f32; 4],
    /// Füllfarbe der Kurven-Sample-Punkte
    pub curve_color: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            handle_color: HANDLE_COLOR,
            handle_color_grabbed: HANDLE_COLOR_GRABBED,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_sketchpad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_sketchpad.toml")
    }
}
