use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "modewheel.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Family/rotation loaded at startup, as "n.f.r".
    pub start_address: String,
    pub root: i32,
    pub octave: i32,
    pub volume: f32,
    pub note_step_ms: u64,
    pub chord_step_ms: u64,
    pub note_length_ms: u64,
    pub audio: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            start_address: "7.1.1".to_string(),
            root: 0,
            octave: 4,
            volume: 0.7,
            note_step_ms: 360,
            chord_step_ms: 600,
            note_length_ms: 1000,
            audio: true,
        }
    }
}

impl AppSettings {
    /// Pull every value back into a playable range.
    pub fn sanitized(mut self) -> Self {
        self.root = self.root.rem_euclid(12);
        self.octave = self.octave.clamp(0, 8);
        self.volume = if self.volume.is_finite() { self.volume.clamp(0.0, 1.0) } else { 0.7 };
        self.note_step_ms = self.note_step_ms.clamp(50, 5000);
        self.chord_step_ms = self.chord_step_ms.clamp(50, 5000);
        self.note_length_ms = self.note_length_ms.clamp(50, 10_000);
        self
    }
}

/// `modewheel.json` next to the executable.
pub fn default_settings_path() -> Option<PathBuf> {
    match env::current_exe() {
        Ok(exe_path) => exe_path.parent().map(|dir| dir.join(SETTINGS_FILE)),
        Err(e) => {
            eprintln!("Could not determine application directory: {}", e);
            None
        }
    }
}

/// Load from `path`, or from the default location when `None`. A missing
/// file gives defaults silently; a broken one gives defaults and a message.
pub fn load_settings(path: Option<&Path>) -> AppSettings {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_settings_path() {
            Some(p) => p,
            None => return AppSettings::default(),
        },
    };
    if !path.exists() {
        return AppSettings::default();
    }
    let settings = match fs::read_to_string(&path) {
        Ok(json_string) => match serde_json::from_str::<AppSettings>(&json_string) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Failed to parse settings file, using defaults. Error: {}", e);
                AppSettings::default()
            }
        },
        Err(e) => {
            eprintln!("Failed to read settings file, using defaults. Error: {}", e);
            AppSettings::default()
        }
    };
    settings.sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{ "root": 2, "audio": false }"#).unwrap();
        assert_eq!(s.root, 2);
        assert!(!s.audio);
        assert_eq!(s.start_address, "7.1.1");
        assert_eq!(s.note_step_ms, 360);
    }

    #[test]
    fn test_sanitized_clamps() {
        let s = AppSettings {
            root: -1,
            octave: 12,
            volume: 3.0,
            note_step_ms: 0,
            ..AppSettings::default()
        }
        .sanitized();
        assert_eq!(s.root, 11);
        assert_eq!(s.octave, 8);
        assert_eq!(s.volume, 1.0);
        assert_eq!(s.note_step_ms, 50);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = env::temp_dir().join("modewheel-settings-that-does-not-exist.json");
        assert_eq!(load_settings(Some(&path)), AppSettings::default());
    }

    #[test]
    fn test_malformed_file_is_default() {
        let path = env::temp_dir().join(format!("modewheel-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let loaded = load_settings(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_round_trip_file() {
        let path = env::temp_dir().join(format!("modewheel-good-{}.json", std::process::id()));
        let wanted =
            AppSettings { start_address: "5.1.2".into(), octave: 3, ..AppSettings::default() };
        fs::write(&path, serde_json::to_string_pretty(&wanted).unwrap()).unwrap();
        let loaded = load_settings(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, wanted);
    }
}
