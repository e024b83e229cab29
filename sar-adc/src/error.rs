use thiserror::Error;
use tickflow::PackageError;
use tickflow_std::ConfigError;

/// Errors of the conversion subsystem.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum AdcError {
    #[error("component configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("strobe period {period} is too short for the comparator path, at least {min} ticks are needed")]
    StrobeTooFast { period: u32, min: u32 },

    #[error("{bits}-bit resolution does not fit the {max}-bit numeric output")]
    Resolution { bits: u32, max: u32 },

    #[error("package error: {0}")]
    Package(#[from] PackageError),
}
