use thiserror::Error;

/// Rejected scheduling call on a parameter or source node.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScheduleError {
    #[error("event time {time} must be finite and non-negative")]
    InvalidTime { time: f64 },

    #[error("parameter value {value} must be finite")]
    InvalidValue { value: f32 },

    #[error("exponential ramp at {time} cannot target zero")]
    ExponentialToZero { time: f64 },

    #[error("source node was already started")]
    AlreadyStarted,

    #[error("source node must be started before it is stopped")]
    NotStarted,
}

/// Failure to open the live audio output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no default output device available")]
    NoDevice,

    #[error("failed to fetch default output config")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("unsupported output sample format {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),

    #[error("failed to spawn output thread")]
    Thread(#[source] std::io::Error),

    #[error("output thread exited before reporting readiness")]
    ThreadExited,
}
