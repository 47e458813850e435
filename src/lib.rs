pub mod dsp;
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod io; // Live audio output
pub mod synth; // Tone dispatch and destinations
pub mod tones; // Notification tone catalog and routines

pub use error::{OutputError, ScheduleError};
pub use synth::{play_tone, play_tone_on, Destination, OfflineContext};
pub use tones::{SoundId, SoundPreset, SOUND_PRESETS};

pub const MAX_BLOCK_SIZE: usize = 2048;
