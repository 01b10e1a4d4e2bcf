use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat, Stream,
};
use rtrb::Producer;
use tracing::{debug, error};

use crate::{
    engine::config::EngineConfig,
    error::{AudioError, Result},
    io::output::{AudioHost, MixerHandle, OpenedOutput, OutputDevice},
    synth::{mixer::Mixer, voice::Voice},
    MAX_BLOCK_SIZE,
};

/// Opens the default cpal output device and runs a [`Mixer`] in its callback.
#[derive(Default)]
pub struct CpalHost {
    tap: Option<Producer<f32>>,
}

impl CpalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward the mono mix to `tap` for metering.
    pub fn with_tap(mut self, tap: Producer<f32>) -> Self {
        self.tap = Some(tap);
        self
    }
}

impl AudioHost for CpalHost {
    fn open(self, config: &EngineConfig) -> Result<OpenedOutput> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::Stream(format!("failed to fetch default output config: {e}")))?;

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;
        let format = supported.sample_format();

        let (mut mixer, handle) = Mixer::new(config, sample_rate);
        if let Some(tap) = self.tap {
            mixer = mixer.with_tap(tap);
        }
        let clock = mixer.clock();

        let stream_config = supported.into();
        let stream = match format {
            SampleFormat::F32 => device.build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    mixer.render_interleaved(data, channels);
                },
                |err| error!("audio stream error: {err}"),
                None,
            ),
            SampleFormat::I16 => {
                let mut block = vec![0.0f32; MAX_BLOCK_SIZE * channels];
                device.build_output_stream(
                    &stream_config,
                    move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                        for chunk in data.chunks_mut(block.len()) {
                            let mixed = &mut block[..chunk.len()];
                            mixer.render_interleaved(mixed, channels);
                            for (out, &s) in chunk.iter_mut().zip(mixed.iter()) {
                                *out = (s * 32767.0).clamp(-32768.0, 32767.0) as i16;
                            }
                        }
                    },
                    |err| error!("audio stream error: {err}"),
                    None,
                )
            }
            other => return Err(AudioError::UnsupportedFormat(format!("{other:?}"))),
        }
        .map_err(|e| AudioError::Stream(format!("failed to build output stream: {e}")))?;

        stream
            .play()
            .map_err(|e| AudioError::Stream(format!("failed to start output stream: {e}")))?;
        debug!(sample_rate, channels, ?format, "audio stream started");

        Ok(OpenedOutput {
            clock: Box::new(clock),
            device: Box::new(CpalDevice { stream, handle }),
        })
    }
}

/// A running cpal stream and the queue into its mixer.
pub struct CpalDevice {
    stream: Stream,
    handle: MixerHandle,
}

impl OutputDevice for CpalDevice {
    fn sample_rate(&self) -> f32 {
        self.handle.sample_rate()
    }

    fn submit(&mut self, voice: Voice) -> Result<()> {
        self.handle.submit(voice)
    }

    fn is_suspended(&self) -> bool {
        self.handle.is_suspended()
    }

    fn suspend(&mut self) -> Result<()> {
        self.handle.suspend()?;
        self.stream
            .pause()
            .map_err(|e| AudioError::Stream(format!("failed to pause output stream: {e}")))
    }

    fn resume(&mut self) -> Result<()> {
        self.stream
            .play()
            .map_err(|e| AudioError::Stream(format!("failed to resume output stream: {e}")))?;
        self.handle.resume()
    }

    fn reclaim(&mut self) -> usize {
        self.handle.reclaim()
    }
}
