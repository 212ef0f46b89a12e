//! Fire-and-forget click playback for pill presses.
//!
//! The click is synthesized on the fly: a short sine burst with an
//! exponential fade, played once on the default output device. Playback runs
//! on a throwaway thread and every failure is logged and dropped, so a
//! missing or broken audio stack never disturbs the UI.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;

use crate::logging::log_debug;

/// Peak volume of the click.
pub const CLICK_VOLUME: f32 = 0.5;
/// Audible length of the click (milliseconds).
pub const CLICK_MS: u64 = 60;
/// Pitch of the click.
pub const CLICK_FREQ_HZ: f32 = 880.0;
/// Envelope decay rate (per second).
const CLICK_DECAY: f32 = 48.0;
/// Extra time the stream stays open so the tail is not clipped (milliseconds).
const DRAIN_MS: u64 = 40;

/// Play the click without blocking the caller.
pub fn spawn_click() {
    thread::spawn(|| {
        if let Err(err) = play_click_blocking() {
            log_debug(&format!("click playback failed: {err:#}"));
        }
    });
}

fn play_click_blocking() -> Result<()> {
    // ALSA and friends print probe noise straight to stderr, which would
    // tear up the alternate screen.
    let _quiet = gag::Gag::stderr().ok();
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output audio device available"))?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    let frame = Arc::new(AtomicUsize::new(0));

    let err_fn = |err| log_debug(&format!("click stream error: {err}"));
    let stream = match config.sample_format() {
        SampleFormat::F32 => {
            let frame = Arc::clone(&frame);
            device.build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| fill_frames(data, channels, sample_rate, &frame, |s| s),
                err_fn,
                None,
            )?
        }
        SampleFormat::I16 => {
            let frame = Arc::clone(&frame);
            device.build_output_stream(
                &config.into(),
                move |data: &mut [i16], _| {
                    fill_frames(data, channels, sample_rate, &frame, |s| {
                        (s * i16::MAX as f32) as i16
                    })
                },
                err_fn,
                None,
            )?
        }
        SampleFormat::U16 => {
            let frame = Arc::clone(&frame);
            device.build_output_stream(
                &config.into(),
                move |data: &mut [u16], _| {
                    fill_frames(data, channels, sample_rate, &frame, |s| {
                        ((s * 0.5 + 0.5) * u16::MAX as f32) as u16
                    })
                },
                err_fn,
                None,
            )?
        }
        other => return Err(anyhow!("unsupported output sample format {other:?}")),
    };
    stream.play()?;
    thread::sleep(Duration::from_millis(CLICK_MS + DRAIN_MS));
    drop(stream);
    Ok(())
}

fn fill_frames<T: Copy>(
    data: &mut [T],
    channels: usize,
    sample_rate: f32,
    frame: &AtomicUsize,
    convert: impl Fn(f32) -> T,
) {
    for chunk in data.chunks_mut(channels.max(1)) {
        let n = frame.fetch_add(1, Ordering::Relaxed);
        let sample = convert(click_sample(n, sample_rate));
        for slot in chunk {
            *slot = sample;
        }
    }
}

/// Click waveform at `frame` frames into playback, in `[-CLICK_VOLUME,
/// CLICK_VOLUME]`. Silent once the click length has passed.
pub fn click_sample(frame: usize, sample_rate: f32) -> f32 {
    let t = frame as f32 / sample_rate;
    if t * 1000.0 >= CLICK_MS as f32 {
        return 0.0;
    }
    (t * CLICK_FREQ_HZ * TAU).sin() * (-CLICK_DECAY * t).exp() * CLICK_VOLUME
}
