use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use modewheel::catalog::Catalog;
use modewheel::pitch::PitchClass;
use modewheel::session::{DegreeTile, Session};
use modewheel::settings::AppSettings;
use modewheel::voicing::Voicing;

use crate::sequencer::Phrase;
use crate::synth::{note_name, Synth};

// ── Key → interval mapping ────────────────────────────────────────────────────

/// Number row toggles intervals: 1 = root … 0 = M6, - = m7, = = M7.
pub fn key_to_interval(key: char) -> Option<PitchClass> {
    let idx = match key {
        '1' => 0, '2' => 1, '3' => 2, '4' => 3, '5' => 4, '6' => 5,
        '7' => 6, '8' => 7, '9' => 8, '0' => 9, '-' => 10, '=' => 11,
        _ => return None,
    };
    PitchClass::new(idx)
}

// ── App mode ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// Editing the wheel.
    Wheel,
    /// Typing an "n.f.r" address.
    Address,
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    pub synth:         Arc<Mutex<Synth>>,
    pub audio_enabled: bool,
    pub session:       Session<'static>,
    pub settings:      AppSettings,
    /// Degree under the cursor in the tile row.
    pub cursor:        usize,
    pub mode:          AppMode,
    pub address_input: String,
    pub active_notes:  Vec<u8>,
    /// A phrase is running or a voice is still ringing.
    pub busy:          bool,
    /// (current step, step count) of the running phrase.
    pub progress:      Option<(usize, usize)>,
    pub status_msg:    String,
}

impl App {
    pub fn new(
        synth: Arc<Mutex<Synth>>,
        settings: AppSettings,
        audio_enabled: bool,
    ) -> anyhow::Result<Self> {
        let mut session = Session::new(Catalog::builtin())?;
        session.set_root(PitchClass::wrapping(settings.root));
        {
            let mut s = lock(&synth);
            s.volume = settings.volume;
            s.note_length = settings.note_length_ms as f32 / 1000.0;
        }

        let mut app = Self {
            synth,
            audio_enabled,
            session,
            settings,
            cursor:        0,
            mode:          AppMode::Wheel,
            address_input: String::new(),
            active_notes:  Vec::new(),
            busy:          false,
            progress:      None,
            status_msg:    String::new(),
        };
        let start = app.settings.start_address.clone();
        match app.session.apply_address(&start) {
            Ok(()) => app.report_mode(),
            Err(e) => app.status_msg = format!("Start address {}: {}", start, e),
        }
        Ok(app)
    }

    fn synth(&self) -> MutexGuard<'_, Synth> {
        lock(&self.synth)
    }

    // ── Selection editing ─────────────────────────────────────────────────

    pub fn toggle_interval(&mut self, key: char) {
        let Some(interval) = key_to_interval(key) else { return };
        let on = self.session.toggle(interval);
        self.session.sync();
        self.clamp_cursor();
        let verb = if on { "+" } else { "-" };
        self.status_msg = format!("{}{}  →  {}", verb, interval.interval_name(), self.describe());
    }

    pub fn rotate(&mut self, direction: i32) {
        if self.session.rotate_mode(direction) {
            self.clamp_cursor();
            self.report_mode();
        } else {
            self.status_msg = "Rotation needs at least two notes".to_string();
        }
    }

    pub fn root_step(&mut self, semitones: i32) {
        self.session.step_root(semitones);
        self.status_msg = format!("Root: {}", self.session.root().name());
    }

    // ── Catalog navigation ────────────────────────────────────────────────

    pub fn note_count_step(&mut self, direction: i32) {
        match self.session.step_note_count(direction) {
            Ok(()) => { self.cursor = 0; self.report_mode(); }
            Err(e) => self.status_msg = e.to_string(),
        }
    }

    pub fn family_step(&mut self, direction: i32) {
        match self.session.step_family(direction) {
            Ok(()) => { self.cursor = 0; self.report_mode(); }
            Err(e) => self.status_msg = e.to_string(),
        }
    }

    // ── Address entry ─────────────────────────────────────────────────────

    pub fn begin_address(&mut self) {
        self.mode = AppMode::Address;
        self.address_input = self.session.address();
        self.status_msg = "Address: notes.family.mode, Enter to load".to_string();
    }

    pub fn address_push(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.address_input.push(c);
        }
    }

    pub fn address_backspace(&mut self) {
        self.address_input.pop();
    }

    pub fn address_cancel(&mut self) {
        self.mode = AppMode::Wheel;
        self.address_input.clear();
        self.status_msg = "Address entry cancelled".to_string();
    }

    pub fn address_commit(&mut self) {
        self.mode = AppMode::Wheel;
        let input = std::mem::take(&mut self.address_input);
        match self.session.apply_address(&input) {
            Ok(()) => { self.cursor = 0; self.report_mode(); }
            Err(e) => self.status_msg = format!("Rejected: {}", e),
        }
    }

    // ── Degree cursor ─────────────────────────────────────────────────────

    pub fn cursor_step(&mut self, delta: i32) {
        let n = self.session.selection().len();
        if n == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as i32 + delta).rem_euclid(n as i32) as usize;
    }

    fn clamp_cursor(&mut self) {
        let n = self.session.selection().len();
        if self.cursor >= n {
            self.cursor = n.saturating_sub(1);
        }
    }

    // ── Playback ──────────────────────────────────────────────────────────

    fn voicing(&self) -> Voicing {
        Voicing::new(self.session.root(), self.settings.octave)
    }

    fn play(&mut self, phrase: Phrase, label: String) {
        if phrase.is_empty() {
            self.status_msg = "Nothing to play".to_string();
            return;
        }
        if !self.audio_enabled {
            self.status_msg = format!("{} (audio off)", label);
            return;
        }
        self.synth().play_phrase(phrase);
        self.status_msg = label;
    }

    pub fn play_mode(&mut self) {
        let notes = self.voicing().mode_run(self.session.selection(), self.cursor);
        let step = self.settings.note_step_ms as f32 / 1000.0;
        let label = format!("Mode from degree {}", self.cursor + 1);
        self.play(Phrase::melody(&notes, step), label);
    }

    pub fn play_triad(&mut self) {
        let notes = self.voicing().triad(self.session.selection(), self.cursor);
        let names: Vec<String> = notes.iter().map(|&n| note_name(n)).collect();
        let label = format!("Chord: {}", names.join(" "));
        self.play(Phrase::chord(notes), label);
    }

    pub fn play_chords(&mut self) {
        let steps = self.voicing().chord_cycle(self.session.selection());
        let step_secs = self.settings.chord_step_ms as f32 / 1000.0;
        let label = format!("All chords ({})", steps.len());
        self.play(Phrase { steps, step_secs }, label);
    }

    pub fn play_note(&mut self) {
        match self.voicing().single(self.session.selection(), self.cursor) {
            Some(note) => {
                self.play(Phrase::chord(vec![note]), format!("Note: {}", note_name(note)))
            }
            None => self.status_msg = "Nothing to play".to_string(),
        }
    }

    pub fn stop_audio(&mut self) {
        self.synth().stop();
    }

    pub fn volume_up(&mut self) {
        let mut s = self.synth();
        s.volume = (s.volume + 0.05).min(1.0);
        let v = s.volume;
        drop(s);
        self.status_msg = format!("Volume: {:.0}%", v * 100.0);
    }

    pub fn volume_down(&mut self) {
        let mut s = self.synth();
        s.volume = (s.volume - 0.05).max(0.0);
        let v = s.volume;
        drop(s);
        self.status_msg = format!("Volume: {:.0}%", v * 100.0);
    }

    pub fn refresh_active_notes(&mut self) {
        let s = self.synth();
        let notes = s.active_notes();
        let busy = s.is_busy();
        let progress = s.sequencer.playing
            .then(|| (s.sequencer.current_step, s.sequencer.phrase.steps.len()));
        drop(s);
        self.active_notes = notes;
        self.busy = busy;
        self.progress = progress;
    }

    // ── UI read helpers ───────────────────────────────────────────────────

    pub fn volume(&self) -> f32 { self.synth().volume }

    pub fn effect_names(&self) -> Vec<&'static str> { self.synth().fx.names() }

    pub fn active_note_names(&self) -> Vec<String> {
        self.active_notes.iter().map(|&n| note_name(n)).collect()
    }

    /// Sounding pitch classes as intervals above the wheel root.
    pub fn sounding_intervals(&self) -> Vec<PitchClass> {
        let root = self.session.root().value() as i32;
        self.active_notes.iter().map(|&n| PitchClass::wrapping(n as i32 - root)).collect()
    }

    pub fn tiles(&self) -> Vec<DegreeTile> {
        self.session.degree_tiles()
    }

    /// One-line summary of the current selection.
    pub fn describe(&self) -> String {
        match self.session.rotation_name() {
            Some(mode) => {
                format!("{} ({})  {}", mode, self.session.family_label(), self.session.address())
            }
            None => format!("Custom {}  {}", self.session.selection(), self.session.address()),
        }
    }

    fn report_mode(&mut self) {
        self.status_msg = self.describe();
    }
}

fn lock(synth: &Mutex<Synth>) -> MutexGuard<'_, Synth> {
    synth.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
        App::new(synth, AppSettings::default(), true).unwrap()
    }

    #[test]
    fn test_key_map() {
        assert_eq!(key_to_interval('1').map(PitchClass::value), Some(0));
        assert_eq!(key_to_interval('=').map(PitchClass::value), Some(11));
        assert_eq!(key_to_interval('q'), None);
    }

    #[test]
    fn test_start_address_from_settings() {
        let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
        let settings = AppSettings { start_address: "7.1.6".into(), ..AppSettings::default() };
        let a = App::new(synth, settings, false).unwrap();
        assert_eq!(a.session.rotation_name(), Some("Aeolian"));

        let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
        let settings = AppSettings { start_address: "bogus".into(), ..AppSettings::default() };
        let a = App::new(synth, settings, false).unwrap();
        assert_eq!(a.session.address(), "7.1.1");
        assert!(a.status_msg.starts_with("Start address bogus"));
    }

    #[test]
    fn test_toggle_updates_status_and_cursor() {
        let mut a = app();
        a.cursor = 6;
        a.toggle_interval('=');
        assert_eq!(a.cursor, 5);
        assert!(a.status_msg.starts_with("-M7"));
        a.toggle_interval('1');
        assert!(a.session.is_custom());
        assert!(a.status_msg.contains("Custom"));
    }

    #[test]
    fn test_address_entry() {
        let mut a = app();
        a.begin_address();
        assert_eq!(a.address_input, "7.1.1");
        a.address_backspace();
        a.address_push('5');
        a.address_push('x');
        a.address_commit();
        assert_eq!(a.mode, AppMode::Wheel);
        assert_eq!(a.session.rotation_name(), Some("Mixolydian"));

        a.begin_address();
        a.address_input = "9.9.9.9".into();
        a.address_commit();
        assert!(a.status_msg.starts_with("Rejected"));
        assert_eq!(a.session.rotation_name(), Some("Mixolydian"));
    }

    #[test]
    fn test_playback_queues_phrase() {
        let mut a = app();
        a.play_mode();
        assert!(a.synth.lock().unwrap().sequencer.playing);
        assert_eq!(a.synth.lock().unwrap().sequencer.phrase.steps.len(), 8);
        a.stop_audio();
        a.play_chords();
        assert_eq!(a.synth.lock().unwrap().sequencer.phrase.steps.len(), 7);
    }

    #[test]
    fn test_silent_mode_reports() {
        let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
        let mut a = App::new(synth, AppSettings::default(), false).unwrap();
        a.play_triad();
        assert!(a.status_msg.ends_with("(audio off)"));
        assert!(!a.synth.lock().unwrap().sequencer.playing);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut a = app();
        a.cursor_step(-1);
        assert_eq!(a.cursor, 6);
        a.cursor_step(1);
        assert_eq!(a.cursor, 0);
    }
}
