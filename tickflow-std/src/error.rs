use thiserror::Error;

/// Errors detected while constructing a component, before the first tick.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("strobe period must be greater than 1, got {period}")]
    StrobePeriod { period: u32 },

    #[error("averaging window 2^{power} over {width}-bit samples exceeds {max} bits")]
    AveragePower { power: u32, width: u32, max: u32 },
}
