use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of mood categories a track can be sorted into.
///
/// Playlists are named after these labels, so the display strings are part
/// of the user-visible contract and must not change casually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vibe {
    ChillVibes,
    SadBops,
    HypeGym,
    NightDrive,
    LoFiFocus,
    RomanticMood,
}

impl Vibe {
    /// Fixed iteration order, used wherever deterministic output matters
    /// (playlist creation, log serialization).
    pub const ALL: [Vibe; 6] = [
        Vibe::ChillVibes,
        Vibe::SadBops,
        Vibe::HypeGym,
        Vibe::NightDrive,
        Vibe::LoFiFocus,
        Vibe::RomanticMood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::ChillVibes => "Chill Vibes",
            Vibe::SadBops => "Sad Bops",
            Vibe::HypeGym => "Hype Gym",
            Vibe::NightDrive => "Night Drive",
            Vibe::LoFiFocus => "Lo-Fi Focus",
            Vibe::RomanticMood => "Romantic Mood",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Vibe {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
