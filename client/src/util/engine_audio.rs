//! Engine drone for the basement sandbox.
//!
//! Two detuned oscillators (sawtooth at 55 Hz, triangle at 110 Hz) feed a
//! low-pass filter and a master gain. Browsers block audio until a user
//! gesture, so the graph is built silent and [`EngineAudio::start`] is called
//! from the first pointer or key event. Volume glides between the on-foot and
//! in-car levels.

#[cfg(test)]
#[path = "engine_audio_test.rs"]
mod engine_audio_test;

/// Master volume while driving.
pub const IN_CAR_VOLUME: f32 = 0.08;

/// Master volume on foot.
pub const ON_FOOT_VOLUME: f32 = 0.05;

/// Time constant of the volume glide, in seconds.
pub const VOLUME_GLIDE: f64 = 0.04;

/// Low-pass cutoff in Hz.
pub const FILTER_CUTOFF: f32 = 1100.0;

/// Low-pass resonance.
pub const FILTER_Q: f32 = 0.7;

/// Oscillator frequency (Hz) and per-voice gain.
pub const VOICES: [(f32, f32); 2] = [(55.0, 0.04), (110.0, 0.03)];

#[must_use]
pub fn target_volume(in_car: bool) -> f32 {
    if in_car { IN_CAR_VOLUME } else { ON_FOOT_VOLUME }
}

#[cfg(feature = "hydrate")]
pub use browser::EngineAudio;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, BiquadFilterNode, BiquadFilterType, GainNode, OscillatorNode, OscillatorType};

    use super::{FILTER_CUTOFF, FILTER_Q, VOICES, VOLUME_GLIDE, target_volume};

    /// Live audio graph. Dropping it does not stop playback; call [`EngineAudio::stop`].
    pub struct EngineAudio {
        ctx: AudioContext,
        gain: GainNode,
        filter: BiquadFilterNode,
        oscillators: Vec<OscillatorNode>,
        started: bool,
    }

    impl EngineAudio {
        /// Build the graph with the master gain at zero.
        ///
        /// # Errors
        ///
        /// Returns `Err` if the browser refuses to create an audio context or node.
        pub fn new() -> Result<Self, JsValue> {
            let ctx = AudioContext::new()?;

            let gain = ctx.create_gain()?;
            gain.gain().set_value(0.0);

            let filter = ctx.create_biquad_filter()?;
            filter.set_type(BiquadFilterType::Lowpass);
            filter.frequency().set_value(FILTER_CUTOFF);
            filter.q().set_value(FILTER_Q);

            filter.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;

            let mut oscillators = Vec::with_capacity(VOICES.len());
            for (i, (frequency, level)) in VOICES.into_iter().enumerate() {
                let osc = ctx.create_oscillator()?;
                osc.set_type(if i == 0 { OscillatorType::Sawtooth } else { OscillatorType::Triangle });
                osc.frequency().set_value(frequency);
                let voice_gain = ctx.create_gain()?;
                voice_gain.gain().set_value(level);
                osc.connect_with_audio_node(&voice_gain)?;
                voice_gain.connect_with_audio_node(&filter)?;
                oscillators.push(osc);
            }

            Ok(Self { ctx, gain, filter, oscillators, started: false })
        }

        #[must_use]
        pub fn started(&self) -> bool {
            self.started
        }

        /// Resume the context and start the oscillators. Idempotent.
        ///
        /// # Errors
        ///
        /// Returns `Err` if the context cannot resume or a voice cannot start.
        pub fn start(&mut self, in_car: bool) -> Result<(), JsValue> {
            if self.started {
                return Ok(());
            }
            drop(self.ctx.resume()?);
            let now = self.ctx.current_time();
            for osc in &self.oscillators {
                osc.start_with_when(now)?;
            }
            self.started = true;
            self.set_in_car(in_car)
        }

        /// Glide the master volume to the level for `in_car`.
        ///
        /// # Errors
        ///
        /// Returns `Err` if the automation call is rejected.
        pub fn set_in_car(&self, in_car: bool) -> Result<(), JsValue> {
            if !self.started {
                return Ok(());
            }
            let now = self.ctx.current_time();
            self.gain.gain().set_target_at_time(target_volume(in_car), now, VOLUME_GLIDE)?;
            Ok(())
        }

        /// Stop the voices, detach the graph and close the context.
        pub fn stop(&mut self) {
            if self.started {
                for osc in &self.oscillators {
                    if let Err(e) = osc.stop() {
                        log::debug!("oscillator stop failed: {e:?}");
                    }
                }
            }
            if let Err(e) = self.gain.disconnect().and_then(|()| self.filter.disconnect()) {
                log::debug!("audio disconnect failed: {e:?}");
            }
            if let Err(e) = self.ctx.close() {
                log::debug!("audio close failed: {e:?}");
            }
            self.started = false;
        }
    }
}
