use std::f32::consts::PI;

use crate::effects::{EffectChain, Warmth};
use crate::sequencer::{Phrase, Sequencer};

// ── Pluck envelope ────────────────────────────────────────────────────────────

const ENV_FLOOR: f32 = 0.0001;
const ENV_PEAK: f32 = 0.33;
const ATTACK_SECS: f32 = 0.035;
const TRIANGLE_MIX: f32 = 0.18;

// ── Voice ─────────────────────────────────────────────────────────────────────

/// One pooled voice: a sine body with a little triangle on top, shaped by an
/// exponential rise to `ENV_PEAK` and an exponential fall back to the floor.
#[derive(Clone, Debug)]
pub struct Voice {
    pub note:      u8,
    pub frequency: f32,
    pub phase:     f32,
    pub level:     f32,
    elapsed:       f32,
    duration:      f32,
}

impl Voice {
    pub fn new(note: u8, duration: f32) -> Self {
        Self { note, frequency: note_to_freq(note), phase: 0.0, level: ENV_FLOOR,
               elapsed: 0.0, duration: duration.max(ATTACK_SECS * 2.0) }
    }

    pub fn is_finished(&self) -> bool { self.elapsed >= self.duration }

    fn envelope(&self) -> f32 {
        let t = self.elapsed;
        if t < ATTACK_SECS {
            ENV_FLOOR * (ENV_PEAK / ENV_FLOOR).powf(t / ATTACK_SECS)
        } else {
            let d = (t - ATTACK_SECS) / (self.duration - ATTACK_SECS);
            ENV_PEAK * (ENV_FLOOR / ENV_PEAK).powf(d.min(1.0))
        }
    }

    pub fn next_sample(&mut self, sr: f32) -> f32 {
        if self.is_finished() { return 0.0; }
        self.level = self.envelope();

        let sine = (self.phase * 2.0 * PI).sin();
        let tri = if self.phase < 0.5 { 4.0 * self.phase - 1.0 } else { 3.0 - 4.0 * self.phase };
        let sample = (sine + TRIANGLE_MIX * tri) * self.level;

        self.phase += self.frequency / sr;
        if self.phase >= 1.0 { self.phase -= 1.0; }
        self.elapsed += 1.0 / sr;
        sample
    }
}

// ── Synth ─────────────────────────────────────────────────────────────────────

pub struct Synth {
    pub sample_rate: f32,
    /// One slot per pitch class; a retrigger restarts the slot.
    pub voices:      [Option<Voice>; 12],
    /// Pluck length in seconds.
    pub note_length: f32,
    pub volume:      f32,
    pub sequencer:   Sequencer,
    pub fx:          EffectChain,
}

impl Synth {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices:      Default::default(),
            note_length: 1.0,
            volume:      0.7,
            sequencer:   Sequencer::new(sample_rate),
            fx:          EffectChain::new()
                .with(Warmth::new(Warmth::DEFAULT_CUTOFF_HZ, sample_rate)),
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.sequencer.set_sample_rate(sample_rate);
        self.fx = EffectChain::new().with(Warmth::new(Warmth::DEFAULT_CUTOFF_HZ, sample_rate));
    }

    pub fn note_on(&mut self, note: u8) {
        self.voices[(note % 12) as usize] = Some(Voice::new(note, self.note_length));
    }

    /// Queue a phrase, cutting off whatever phrase was playing.
    pub fn play_phrase(&mut self, phrase: Phrase) {
        self.sequencer.start(phrase);
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
        self.voices = Default::default();
        self.fx.reset_all();
    }

    pub fn generate_sample(&mut self) -> f32 {
        // ── Phrase sequencer ───────────────────────────────────────────────
        if let Some(ev) = self.sequencer.tick() {
            for n in ev.notes_on {
                self.note_on(n);
            }
        }

        // ── Voices ─────────────────────────────────────────────────────────
        let sr = self.sample_rate;
        let mut mix = 0.0f32;
        for slot in self.voices.iter_mut() {
            let finished = match slot {
                Some(voice) => { mix += voice.next_sample(sr); voice.is_finished() }
                None => false,
            };
            if finished { *slot = None; }
        }

        // ── Master ─────────────────────────────────────────────────────────
        self.fx.process(mix * self.volume).tanh()
    }

    /// MIDI notes currently sounding, lowest first.
    pub fn active_notes(&self) -> Vec<u8> {
        let mut notes: Vec<u8> = self.voices.iter().flatten().map(|v| v.note).collect();
        notes.sort_unstable();
        notes
    }

    pub fn is_busy(&self) -> bool {
        self.sequencer.playing || self.voices.iter().any(Option::is_some)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

pub fn note_to_freq(note: u8) -> f32 {
    440.0 * 2f32.powf((note as f32 - 69.0) / 12.0)
}

pub fn note_name(note: u8) -> String {
    let names = ["C","C#","D","D#","E","F","F#","G","G#","A","A#","B"];
    format!("{}{}", names[(note % 12) as usize], (note / 12) as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_helpers() {
        assert!((note_to_freq(69) - 440.0).abs() < 1e-3);
        assert!((note_to_freq(81) - 880.0).abs() < 1e-2);
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(70), "A#4");
    }

    #[test]
    fn test_envelope_shape() {
        let sr = 1000.0;
        let mut v = Voice::new(60, 1.0);
        let mut levels = Vec::new();
        while !v.is_finished() {
            v.next_sample(sr);
            levels.push(v.level);
        }
        let peak = levels.iter().cloned().fold(0.0f32, f32::max);
        let peak_at = levels.iter().position(|&l| l == peak).unwrap();
        assert!((peak - ENV_PEAK).abs() < 0.02);
        assert!((30..=40).contains(&peak_at), "peak at {}", peak_at);
        assert!(*levels.last().unwrap() < 0.001);
        assert!((levels.len() as i32 - 1000).abs() <= 1);
    }

    #[test]
    fn test_pool_keyed_by_pitch_class() {
        let mut s = Synth::new(44100.0);
        s.note_on(60);
        s.note_on(72);
        s.note_on(67);
        assert_eq!(s.active_notes(), vec![67, 72]);
    }

    #[test]
    fn test_phrase_drives_voices() {
        let mut s = Synth::new(1000.0);
        s.note_length = 0.5;
        s.play_phrase(Phrase::melody(&[60, 64], 0.1));
        s.generate_sample();
        assert_eq!(s.active_notes(), vec![60]);
        for _ in 0..100 {
            s.generate_sample();
        }
        assert_eq!(s.active_notes(), vec![60, 64]);
        for _ in 0..1000 {
            s.generate_sample();
        }
        assert!(!s.is_busy());
    }

    #[test]
    fn test_output_is_bounded() {
        let mut s = Synth::new(8000.0);
        s.volume = 1.0;
        s.play_phrase(Phrase::chord((60..72).collect()));
        for _ in 0..4000 {
            let x = s.generate_sample();
            assert!(x.abs() <= 1.0);
        }
        s.stop();
        assert!(!s.is_busy());
    }
}
