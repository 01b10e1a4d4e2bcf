//! The fixed set of sounds the game can make.
//!
//! Effects are tables of [`VoiceSpec`]s, not procedures: triggering an effect
//! realizes each descriptor on the sfx bus. The bass pluck used by the
//! sequencer lives here too, parameterized only by its pitch.

use crate::{
    dsp::{envelope::Envelope, oscillator::Waveform, ramp::ExpCurve},
    synth::voice::VoiceSpec,
};

/// Named one-shot effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// UI feedback
    Click,
    /// Correct answer: impact plus ringing blade
    SwordAttack,
    /// Wrong answer: low punch
    Damage,
    /// Dissonant buzz
    Error,
    /// Level complete: arpeggio, then a held chord
    VictoryJingle,
}

/// A phrase committed some time after its effect was triggered.
#[derive(Debug, Clone, Copy)]
pub struct Deferred {
    /// Seconds after the trigger
    pub after: f32,
    pub voices: &'static [VoiceSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct EffectSpec {
    pub immediate: &'static [VoiceSpec],
    pub deferred: Option<Deferred>,
}

impl EffectSpec {
    /// Total number of voices the effect produces.
    pub fn voice_count(&self) -> usize {
        self.immediate.len() + self.deferred.map_or(0, |d| d.voices.len())
    }
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Click,
        Effect::SwordAttack,
        Effect::Damage,
        Effect::Error,
        Effect::VictoryJingle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Effect::Click => "click",
            Effect::SwordAttack => "attack",
            Effect::Damage => "damage",
            Effect::Error => "error",
            Effect::VictoryJingle => "victory",
        }
    }

    pub fn spec(self) -> &'static EffectSpec {
        match self {
            Effect::Click => &CLICK,
            Effect::SwordAttack => &SWORD_ATTACK,
            Effect::Damage => &DAMAGE,
            Effect::Error => &ERROR,
            Effect::VictoryJingle => &VICTORY_JINGLE,
        }
    }
}

const fn steady(waveform: Waveform, frequency: f32, peak: f32, duration: f32) -> VoiceSpec {
    VoiceSpec::tone(
        waveform,
        ExpCurve::constant(frequency),
        Envelope::decay(peak, duration),
        duration,
    )
}

// Notes of the victory jingle (C major)
const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;
const C6: f32 = 1046.50;

const CLICK_VOICES: [VoiceSpec; 1] = [steady(Waveform::Sine, 1500.0, 0.1, 0.05)];

const SWORD_ATTACK_VOICES: [VoiceSpec; 2] = [
    // Impact: 0.2 s of noise, decayed to the floor by 0.15 s
    VoiceSpec::noise(Envelope::decay(0.8, 0.15), 0.2),
    // Ring: rising sweep
    VoiceSpec::tone(
        Waveform::Sine,
        ExpCurve::ramp(1200.0, 2000.0, 0.1),
        Envelope::decay(0.3, 0.2),
        0.2,
    ),
];

const DAMAGE_VOICES: [VoiceSpec; 1] = [VoiceSpec::tone(
    Waveform::Sawtooth,
    ExpCurve::ramp(150.0, 40.0, 0.2),
    Envelope::decay(0.8, 0.2),
    0.2,
)];

const ERROR_VOICES: [VoiceSpec; 2] = [
    steady(Waveform::Sawtooth, 80.0, 0.4, 0.3),
    steady(Waveform::Square, 75.0, 0.4, 0.3),
];

const VICTORY_ARPEGGIO: [VoiceSpec; 4] = [
    steady(Waveform::Square, C5, 0.3, 0.2),
    steady(Waveform::Square, E5, 0.3, 0.2).delayed(0.1),
    steady(Waveform::Square, G5, 0.3, 0.2).delayed(0.2),
    steady(Waveform::Square, C6, 0.4, 0.6).delayed(0.3),
];

const VICTORY_CHORD: [VoiceSpec; 2] = [
    steady(Waveform::Sawtooth, C5, 0.2, 0.5),
    steady(Waveform::Sawtooth, G5, 0.2, 0.5),
];

static CLICK: EffectSpec = EffectSpec {
    immediate: &CLICK_VOICES,
    deferred: None,
};

static SWORD_ATTACK: EffectSpec = EffectSpec {
    immediate: &SWORD_ATTACK_VOICES,
    deferred: None,
};

static DAMAGE: EffectSpec = EffectSpec {
    immediate: &DAMAGE_VOICES,
    deferred: None,
};

static ERROR: EffectSpec = EffectSpec {
    immediate: &ERROR_VOICES,
    deferred: None,
};

static VICTORY_JINGLE: EffectSpec = EffectSpec {
    immediate: &VICTORY_ARPEGGIO,
    deferred: Some(Deferred {
        after: 0.3,
        voices: &VICTORY_CHORD,
    }),
};

/// Lowpass sweep that gives the bass its pluck: open fast, close with the note.
const PLUCK_CUTOFF: ExpCurve = ExpCurve::sweep(200.0, 1000.0, 0.05, 200.0, 0.2);

/// Bass pluck at `frequency`: sawtooth through the sweeping lowpass.
pub fn pluck(frequency: f32) -> VoiceSpec {
    VoiceSpec::tone(
        Waveform::Sawtooth,
        ExpCurve::constant(frequency),
        Envelope::decay(0.8, 0.2),
        0.2,
    )
    .with_lowpass(PLUCK_CUTOFF)
}
