/// A list of chords (or single notes) played one after another at a fixed
/// spacing. Notes are MIDI numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Phrase {
    pub steps: Vec<Vec<u8>>,
    pub step_secs: f32,
}

impl Phrase {
    /// One note per step.
    pub fn melody(notes: &[u8], step_secs: f32) -> Self {
        Self { steps: notes.iter().map(|&n| vec![n]).collect(), step_secs }
    }

    /// Everything at once.
    pub fn chord(notes: Vec<u8>) -> Self {
        Self { steps: vec![notes], step_secs: 0.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(Vec::is_empty)
    }
}

/// An event fired when the sequencer crosses a step boundary.
pub struct StepEvent {
    pub notes_on: Vec<u8>,
}

/// Sample-accurate one-shot phrase player. Stops by itself after the
/// last step.
pub struct Sequencer {
    pub phrase:       Phrase,
    pub current_step: usize,
    pub playing:      bool,

    sample_rate:    f32,
    sample_counter: u64,
}

impl Sequencer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phrase:       Phrase { steps: Vec::new(), step_secs: 0.0 },
            current_step: 0,
            playing:      false,
            sample_rate,
            sample_counter: 0,
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    fn samples_per_step(&self) -> u64 {
        (self.sample_rate * self.phrase.step_secs).round() as u64
    }

    /// Replace whatever is playing and start from the first step.
    pub fn start(&mut self, phrase: Phrase) {
        self.phrase = phrase;
        self.current_step = 0;
        self.sample_counter = 0;
        self.playing = !self.phrase.steps.is_empty();
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.current_step = 0;
        self.sample_counter = 0;
    }

    /// Called once per audio sample. Returns `Some(StepEvent)` on step boundaries.
    pub fn tick(&mut self) -> Option<StepEvent> {
        if !self.playing {
            return None;
        }

        let sps = self.samples_per_step().max(1);
        let old = self.sample_counter;
        self.sample_counter += 1;

        let event = if old == 0 {
            Some(StepEvent { notes_on: self.phrase.steps[self.current_step].clone() })
        } else {
            None
        };

        if self.sample_counter >= sps {
            self.sample_counter = 0;
            self.current_step += 1;
            if self.current_step >= self.phrase.steps.len() {
                self.stop();
            }
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(seq: &mut Sequencer, samples: usize) -> Vec<(usize, Vec<u8>)> {
        (0..samples)
            .filter_map(|i| seq.tick().map(|ev| (i, ev.notes_on)))
            .collect()
    }

    #[test]
    fn test_steps_fire_on_schedule() {
        let mut seq = Sequencer::new(100.0);
        seq.start(Phrase::melody(&[60, 62, 64], 0.1));
        let events = run(&mut seq, 100);
        assert_eq!(events, vec![(0, vec![60]), (10, vec![62]), (20, vec![64])]);
        assert!(!seq.playing);
    }

    #[test]
    fn test_chord_is_one_step() {
        let mut seq = Sequencer::new(44100.0);
        seq.start(Phrase::chord(vec![60, 64, 67]));
        let events = run(&mut seq, 10);
        assert_eq!(events, vec![(0, vec![60, 64, 67])]);
        assert!(!seq.playing);
    }

    #[test]
    fn test_restart_replaces_phrase() {
        let mut seq = Sequencer::new(100.0);
        seq.start(Phrase::melody(&[60, 62], 0.1));
        run(&mut seq, 5);
        seq.start(Phrase::melody(&[70], 0.1));
        assert_eq!(run(&mut seq, 30), vec![(0, vec![70])]);
    }

    #[test]
    fn test_empty_phrase_does_not_play() {
        let mut seq = Sequencer::new(100.0);
        seq.start(Phrase { steps: Vec::new(), step_secs: 0.1 });
        assert!(!seq.playing);
        assert!(seq.tick().is_none());
        assert!(Phrase::melody(&[], 0.1).is_empty());
    }
}
