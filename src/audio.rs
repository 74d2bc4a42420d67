use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample, Stream, StreamConfig};
use std::sync::{Arc, Mutex, PoisonError};

use crate::synth::Synth;

/// Default output device playing the shared pluck synth. Dropping it closes
/// the stream.
pub struct AudioOutput {
    _stream: Stream,
    pub device_name: String,
    pub sample_rate: f32,
}

impl AudioOutput {
    pub fn open(synth: Arc<Mutex<Synth>>) -> Result<Self> {
        let device = cpal::default_host()
            .default_output_device()
            .context("No output device found")?;
        let device_name = device.name().unwrap_or_else(|_| "default".to_string());

        let supported = device
            .default_output_config()
            .context("No default output config")?;
        let format = supported.sample_format();
        let config: StreamConfig = supported.into();
        let sample_rate = config.sample_rate.0 as f32;

        synth
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_sample_rate(sample_rate);

        let stream = match format {
            cpal::SampleFormat::F32 => open_stream::<f32>(&device, &config, synth)?,
            cpal::SampleFormat::I16 => open_stream::<i16>(&device, &config, synth)?,
            cpal::SampleFormat::U16 => open_stream::<u16>(&device, &config, synth)?,
            other => anyhow::bail!("Unsupported sample format: {:?}", other),
        };
        stream.play().context("Failed to start audio stream")?;

        Ok(Self { _stream: stream, device_name, sample_rate })
    }
}

fn open_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    synth: Arc<Mutex<Synth>>,
) -> Result<Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut synth = synth.lock().unwrap_or_else(PoisonError::into_inner);
            fill_interleaved(data, channels, || T::from_sample(synth.generate_sample()));
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;
    Ok(stream)
}

/// Write one mono sample per frame, copied to every channel.
fn fill_interleaved<T: Copy>(data: &mut [T], channels: usize, mut next: impl FnMut() -> T) {
    for frame in data.chunks_mut(channels.max(1)) {
        frame.fill(next());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_copies_mono_to_all_channels() {
        let mut buf = [0.0f32; 6];
        let mut n = 0.0;
        fill_interleaved(&mut buf, 2, || { n += 1.0; n });
        assert_eq!(buf, [1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_fill_zero_channels_treated_as_mono() {
        let mut buf = [0i16; 3];
        fill_interleaved(&mut buf, 0, || 7);
        assert_eq!(buf, [7, 7, 7]);
    }
}
