//! Text-to-speech voice selection and volume.
//!
//! The platform's speech engine is a collaborator. This module only decides
//! how voices are labelled, which voice a selection resolves to, and what an
//! utterance carries.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A voice offered by the platform speech engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
    /// The engine's default voice.
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    /// Mark as the engine default.
    pub fn default_voice(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Picker label: `Name (lang)`, with ` -- DEFAULT` appended for the default voice.
    pub fn label(&self) -> String {
        if self.is_default {
            format!("{} ({}) -- DEFAULT", self.name, self.lang)
        } else {
            format!("{} ({})", self.name, self.lang)
        }
    }
}

/// One entry of the voice picker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoiceOption {
    pub label: String,
    /// Voice name, used to resolve the selection back to a [`Voice`].
    pub name: String,
    pub lang: String,
}

/// Voices reported by the engine, in engine order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceList {
    voices: Vec<Voice>,
}

impl VoiceList {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter()
    }

    /// Picker entries, one per voice, in engine order.
    pub fn options(&self) -> Vec<VoiceOption> {
        self.voices
            .iter()
            .map(|v| VoiceOption {
                label: v.label(),
                name: v.name.clone(),
                lang: v.lang.clone(),
            })
            .collect()
    }

    /// Resolve a selected name. When several voices share the name the last
    /// one wins.
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().rev().find(|v| v.name == name)
    }

    /// The engine's default voice, if it reported one.
    pub fn default_voice(&self) -> Option<&Voice> {
        self.voices.iter().find(|v| v.is_default)
    }
}

impl FromIterator<Voice> for VoiceList {
    fn from_iter<I: IntoIterator<Item = Voice>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Volume slider position, `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume(u8);

impl Volume {
    pub const MAX: Self = Self(100);
    pub const MUTED: Self = Self(0);

    /// Clamp a slider value into `0..=100`.
    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Utterance gain in `0.0..=1.0`.
    pub fn gain(self) -> f32 {
        self.0 as f32 / 100.0
    }

    pub fn level(self) -> VolumeLevel {
        match self.0 {
            0 => VolumeLevel::Muted,
            1..=33 => VolumeLevel::Low,
            34..=66 => VolumeLevel::Medium,
            _ => VolumeLevel::High,
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

/// Indicator shown next to the volume slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    /// Index 0-3 of the indicator icon.
    pub fn index(self) -> u8 {
        match self {
            Self::Muted => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Relative path of the indicator icon.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Muted => "icons/volume-level-0.svg",
            Self::Low => "icons/volume-level-1.svg",
            Self::Medium => "icons/volume-level-2.svg",
            Self::High => "icons/volume-level-3.svg",
        }
    }
}

/// What to hand the speech engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` leaves the engine on its default voice.
    pub voice: Option<Voice>,
    pub volume: Volume,
}

impl Utterance {
    /// Gain for the engine, `0.0..=1.0`.
    pub fn gain(&self) -> f32 {
        self.volume.gain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voices() -> VoiceList {
        [
            Voice::new("Alex", "en-US").default_voice(),
            Voice::new("Amélie", "fr-CA"),
            Voice::new("Alex", "en-GB"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn labels() {
        let opts = voices().options();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].label, "Alex (en-US) -- DEFAULT");
        assert_eq!(opts[1].label, "Amélie (fr-CA)");
        assert_eq!(opts[1].name, "Amélie");
        assert_eq!(opts[1].lang, "fr-CA");
    }

    #[test]
    fn find_last_match_wins() {
        let list = voices();
        assert_eq!(list.find("Alex").map(|v| v.lang.as_str()), Some("en-GB"));
        assert_eq!(list.find("Nobody"), None);
        assert_eq!(list.default_voice().map(|v| v.lang.as_str()), Some("en-US"));
    }

    #[test]
    fn volume_levels() {
        assert_eq!(Volume::new(0).level(), VolumeLevel::Muted);
        assert_eq!(Volume::new(1).level(), VolumeLevel::Low);
        assert_eq!(Volume::new(33).level(), VolumeLevel::Low);
        assert_eq!(Volume::new(34).level(), VolumeLevel::Medium);
        assert_eq!(Volume::new(66).level(), VolumeLevel::Medium);
        assert_eq!(Volume::new(67).level(), VolumeLevel::High);
        assert_eq!(Volume::new(100).level(), VolumeLevel::High);
    }

    #[test]
    fn volume_clamps_and_scales() {
        assert_eq!(Volume::new(250), Volume::MAX);
        assert_eq!(Volume::new(50).gain(), 0.5);
        assert_eq!(Volume::MUTED.gain(), 0.0);
        assert_eq!(Volume::default().gain(), 1.0);
    }

    #[test]
    fn icon_paths() {
        assert_eq!(VolumeLevel::Muted.icon_path(), "icons/volume-level-0.svg");
        assert_eq!(VolumeLevel::High.icon_path(), "icons/volume-level-3.svg");
        for level in [
            VolumeLevel::Muted,
            VolumeLevel::Low,
            VolumeLevel::Medium,
            VolumeLevel::High,
        ] {
            assert!(level.icon_path().contains(&format!("-{}.svg", level.index())));
        }
    }
}
