//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player snapped to the other lane
    LaneChange,
    /// Player hit the rival car
    Crash,
    /// New record score
    HighScore,
}

/// Nodes backing the looping engine drone
struct MusicHandle {
    osc: OscillatorNode,
    lfo: OscillatorNode,
    gain: GainNode,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    music: Option<MusicHandle>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            music: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.apply_music_volume();
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set background track volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.apply_music_volume();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_music_volume();
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            // The drone sits well under the cues
            self.master_volume * self.music_volume * 0.25
        }
    }

    fn apply_music_volume(&self) {
        if let Some(music) = &self.music {
            music.gain.gain().set_value(self.effective_music_volume());
        }
    }

    /// Start the looping engine drone. Idempotent while already playing.
    pub fn start_music(&mut self) {
        if self.music.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = create_osc(ctx, 55.0, OscillatorType::Sawtooth) else {
            return;
        };
        gain.gain().set_value(self.effective_music_volume());

        // Slow vibrato on the drone frequency so it reads as an engine
        let Some((lfo, lfo_gain)) = create_osc(ctx, 6.0, OscillatorType::Sine) else {
            return;
        };
        lfo_gain.gain().set_value(4.0);
        lfo.connect_with_audio_node(&lfo_gain).ok();
        lfo_gain.connect_with_audio_param(&osc.frequency()).ok();

        osc.start().ok();
        lfo.start().ok();
        self.music = Some(MusicHandle { osc, lfo, gain });
    }

    /// Stop the engine drone. Idempotent while already stopped.
    pub fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            let _ = music.osc.stop();
            let _ = music.lfo.stop();
            let _ = music.gain.disconnect();
        }
    }

    /// Play a one-shot sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::LaneChange => play_lane_change(ctx, vol),
            SoundEffect::Crash => play_crash(ctx, vol),
            SoundEffect::HighScore => play_high_score(ctx, vol),
        }
    }
}

// === Sound generators ===

/// Create an oscillator with gain envelope
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}

/// Lane change - short tire-scrub sweep
fn play_lane_change(ctx: &AudioContext, vol: f32) {
    let Some((osc, gain)) = create_osc(ctx, 800.0, OscillatorType::Square) else {
        return;
    };
    let t = ctx.current_time();

    gain.gain().set_value_at_time(vol * 0.25, t).ok();
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t + 0.12)
        .ok();
    osc.frequency().set_value_at_time(800.0, t).ok();
    osc.frequency()
        .exponential_ramp_to_value_at_time(200.0, t + 0.12)
        .ok();

    osc.start().ok();
    osc.stop_with_when(t + 0.15).ok();
}

/// Crash - falling roar plus bass thump
fn play_crash(ctx: &AudioContext, vol: f32) {
    let t = ctx.current_time();

    if let Some((osc, gain)) = create_osc(ctx, 120.0, OscillatorType::Sawtooth) {
        gain.gain().set_value_at_time(vol * 0.5, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.45)
            .ok();
        osc.frequency().set_value_at_time(120.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(30.0, t + 0.45)
            .ok();
        osc.start().ok();
        osc.stop_with_when(t + 0.5).ok();
    }

    if let Some((osc, gain)) = create_osc(ctx, 60.0, OscillatorType::Sine) {
        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }
}

/// New record - rising arpeggio
fn play_high_score(ctx: &AudioContext, vol: f32) {
    let Some((osc, gain)) = create_osc(ctx, 523.0, OscillatorType::Sine) else {
        return;
    };
    let t = ctx.current_time();

    gain.gain().set_value_at_time(vol * 0.3, t).ok();
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t + 0.5)
        .ok();
    osc.frequency().set_value_at_time(523.0, t).ok();
    osc.frequency().set_value_at_time(659.0, t + 0.1).ok();
    osc.frequency().set_value_at_time(784.0, t + 0.2).ok();
    osc.frequency().set_value_at_time(1047.0, t + 0.3).ok();

    osc.start().ok();
    osc.stop_with_when(t + 0.55).ok();
}
