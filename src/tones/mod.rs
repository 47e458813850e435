//! Notification tones.
//!
//! Five fixed sounds, each a node graph laid out against a start time and
//! then left to play by itself. The catalog describes them for selection
//! lists; [`build`] turns an id into its graph.
//!
//! # Example
//!
//! ```
//! use tonekit::tones::{self, SoundId};
//! use tonekit::graph::end_time;
//!
//! let graph = tones::build(SoundId::Classic, 0.0).unwrap();
//! assert_eq!(end_time(&graph), Some(0.25));
//! ```

mod classic;
mod cosmic;
mod digital;
mod ethereal;
mod zen;

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::{error::ScheduleError, graph::GraphNode};

pub use classic::{classic, Beep, Classic};
pub use cosmic::{cosmic, Cosmic};
pub use digital::{digital, Digital};
pub use ethereal::{ethereal, Ethereal, CHORD};
pub use zen::{zen, Zen};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Classic,
    Ethereal,
    Cosmic,
    Zen,
    Digital,
}

impl SoundId {
    /// Every id, in catalog order.
    pub const ALL: [SoundId; 5] = [
        SoundId::Classic,
        SoundId::Ethereal,
        SoundId::Cosmic,
        SoundId::Zen,
        SoundId::Digital,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoundId::Classic => "classic",
            SoundId::Ethereal => "ethereal",
            SoundId::Cosmic => "cosmic",
            SoundId::Zen => "zen",
            SoundId::Digital => "digital",
        }
    }

    /// The catalog entry for this id.
    pub fn preset(self) -> &'static SoundPreset {
        let index = match self {
            SoundId::Classic => 0,
            SoundId::Ethereal => 1,
            SoundId::Cosmic => 2,
            SoundId::Zen => 3,
            SoundId::Digital => 4,
        };
        &SOUND_PRESETS[index]
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sound id `{0}`")]
pub struct UnknownSoundId(pub String);

impl FromStr for SoundId {
    type Err = UnknownSoundId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSoundId(s.to_owned()))
    }
}

/// A selectable entry in the tone catalog.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundPreset {
    pub id: SoundId,
    pub name: &'static str,
    pub description: &'static str,
}

/// The tone catalog, in display order.
pub const SOUND_PRESETS: [SoundPreset; 5] = [
    SoundPreset {
        id: SoundId::Classic,
        name: "Classic Beep",
        description: "Standard double digital alarm",
    },
    SoundPreset {
        id: SoundId::Ethereal,
        name: "Nebula",
        description: "Soft, rising ambient chord",
    },
    SoundPreset {
        id: SoundId::Cosmic,
        name: "Cosmos",
        description: "Futuristic sci-fi sweep",
    },
    SoundPreset {
        id: SoundId::Zen,
        name: "Zen Gong",
        description: "Deep, resonant meditation bell",
    },
    SoundPreset {
        id: SoundId::Digital,
        name: "8-Bit",
        description: "Retro video game success sound",
    },
];

/// Build the graph for `id`, starting at destination time `t`.
pub fn build(id: SoundId, t: f64) -> Result<Box<dyn GraphNode>, ScheduleError> {
    Ok(match id {
        SoundId::Classic => Box::new(classic(t)?),
        SoundId::Ethereal => Box::new(ethereal(t)?),
        SoundId::Cosmic => Box::new(cosmic(t)?),
        SoundId::Zen => Box::new(zen(t)?),
        SoundId::Digital => Box::new(digital(t)?),
    })
}
