use std::f32::consts::PI;

/// Mono audio effect: one sample in, one sample out.
///
/// Implementations must be `Send` so they can live inside the audio thread
/// (behind `Arc<Mutex<Synth>>`).
pub trait AudioEffect: Send {
    fn process(&mut self, sample: f32) -> f32;
    fn name(&self) -> &'static str;
    /// Clear all internal state.
    fn reset(&mut self);
}

/// A serial chain of effects applied to a mono signal.
///
/// An empty chain passes audio through unchanged.
pub struct EffectChain {
    pub effects: Vec<Box<dyn AudioEffect>>,
}

impl EffectChain {
    pub fn new() -> Self {
        Self { effects: Vec::new() }
    }

    pub fn with(mut self, effect: impl AudioEffect + 'static) -> Self {
        self.effects.push(Box::new(effect));
        self
    }

    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        if self.effects.is_empty() {
            return sample;
        }
        self.effects.iter_mut().fold(sample, |s, fx| fx.process(s))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|fx| fx.name()).collect()
    }

    pub fn reset_all(&mut self) {
        for fx in &mut self.effects {
            fx.reset();
        }
    }
}

impl Default for EffectChain {
    fn default() -> Self {
        Self::new()
    }
}

// ── Warmth ────────────────────────────────────────────────────────────────────

/// One-pole low-pass that takes the edge off the triangle partials.
pub struct Warmth {
    coeff: f32,
    state: f32,
}

impl Warmth {
    pub const DEFAULT_CUTOFF_HZ: f32 = 6000.0;

    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        let mut w = Self { coeff: 1.0, state: 0.0 };
        w.set_cutoff(cutoff_hz, sample_rate);
        w
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        let x = (-2.0 * PI * cutoff_hz / sample_rate.max(1.0)).exp();
        self.coeff = (1.0 - x).clamp(0.0, 1.0);
    }
}

impl AudioEffect for Warmth {
    fn process(&mut self, sample: f32) -> f32 {
        self.state += self.coeff * (sample - self.state);
        self.state
    }

    fn name(&self) -> &'static str {
        "Warmth"
    }

    fn reset(&mut self) {
        self.state = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_passes_through() {
        let mut chain = EffectChain::new();
        assert_eq!(chain.process(0.25), 0.25);
    }

    #[test]
    fn test_warmth_settles_on_dc() {
        let mut chain = EffectChain::new().with(Warmth::new(Warmth::DEFAULT_CUTOFF_HZ, 44100.0));
        assert_eq!(chain.names(), vec!["Warmth"]);
        let mut out = 0.0;
        for _ in 0..2000 {
            out = chain.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3);
        chain.reset_all();
        assert!(chain.process(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_warmth_attenuates_nyquist() {
        let mut w = Warmth::new(Warmth::DEFAULT_CUTOFF_HZ, 44100.0);
        let mut peak = 0.0f32;
        for i in 0..4000 {
            let x = if i % 2 == 0 { 1.0 } else { -1.0 };
            let y = w.process(x);
            if i > 1000 {
                peak = peak.max(y.abs());
            }
        }
        assert!(peak < 0.6, "peak {}", peak);
    }
}
