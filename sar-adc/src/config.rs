//! Runtime configuration of the conversion subsystem.

use tracing::debug;

use crate::constants::*;
use crate::*;

/// Parameters of a [`ConversionSubsystem`]. The resolution is the const parameter of [`AdcConfig::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcConfig {
    /// Ticks per engine step.
    pub strobe_period: u32,
    /// Results are averaged over `2^average_power` conversions.
    pub average_power: u32,
    /// How `result_valid` reports a finished conversion.
    pub valid_mode: ValidMode,
    /// Value of the scaled output at full scale.
    pub full_scale: u32,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            strobe_period: STROBE_PERIOD,
            average_power: AVERAGE_POWER,
            valid_mode: ValidMode::default(),
            full_scale: FULL_SCALE,
        }
    }
}

impl AdcConfig {
    /// Sets the strobe period.
    pub fn with_strobe_period(self, strobe_period: u32) -> Self { Self { strobe_period, ..self } }

    /// Sets the averaging window exponent.
    pub fn with_average_power(self, average_power: u32) -> Self { Self { average_power, ..self } }

    /// Sets the validity mode.
    pub fn with_valid_mode(self, valid_mode: ValidMode) -> Self { Self { valid_mode, ..self } }

    /// Sets the full-scale value.
    pub fn with_full_scale(self, full_scale: u32) -> Self { Self { full_scale, ..self } }

    /// Minimum strobe period: the comparator must pass the synchronizer before the next strobe.
    pub fn min_strobe_period() -> u32 { Synchronizer::<bool>::STAGES + 1 }

    /// Validates the configuration and builds an `N`-bit subsystem around `decimal`.
    pub fn build<const N: usize, D: DecimalConverter>(&self, decimal: D) -> Result<ConversionSubsystem<N, D>, AdcError> {
        let bits = N as u32;
        if bits > NUMERIC_WIDTH {
            return Err(AdcError::Resolution { bits, max: NUMERIC_WIDTH });
        }

        let strobe = Strobe::new(self.strobe_period)?;
        let min = Self::min_strobe_period();
        if self.strobe_period < min {
            return Err(AdcError::StrobeTooFast { period: self.strobe_period, min });
        }

        let average = AverageFilter::<N>::new(self.average_power)?;
        if average.output_width() > NUMERIC_WIDTH {
            return Err(ConfigError::AveragePower { power: self.average_power, width: bits, max: NUMERIC_WIDTH }.into());
        }

        debug!(bits, config = ?self, "conversion subsystem");
        Ok(ConversionSubsystem::new(strobe, SarEngine::new(self.valid_mode), average, self.full_scale, decimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let adc = AdcConfig::default().build::<ADC_BITS, _>(digit_register()).unwrap();
        assert_eq!(adc.strobe_period(), STROBE_PERIOD);
        assert_eq!(adc.average_filter().window(), 64);
    }

    #[test]
    fn rejects_strobe_periods() {
        let err = AdcConfig::default().with_strobe_period(1).build::<8, _>(digit_register()).unwrap_err();
        assert!(matches!(err, AdcError::Config(ConfigError::StrobePeriod { period: 1 })));

        let err = AdcConfig::default().with_strobe_period(2).build::<8, _>(digit_register()).unwrap_err();
        assert!(matches!(err, AdcError::StrobeTooFast { period: 2, min: 3 }));

        assert!(AdcConfig::default().with_strobe_period(3).build::<8, _>(digit_register()).is_ok());
    }

    #[test]
    fn rejects_windows_wider_than_the_output() {
        assert!(AdcConfig::default().with_average_power(8).build::<8, _>(digit_register()).is_ok());
        let err = AdcConfig::default().with_average_power(9).build::<8, _>(digit_register()).unwrap_err();
        assert!(matches!(err, AdcError::Config(ConfigError::AveragePower { power: 9, width: 8, max: 16 })));

        let err = AdcConfig::default().with_average_power(30).build::<8, _>(digit_register()).unwrap_err();
        assert!(matches!(err, AdcError::Config(ConfigError::AveragePower { max: 32, .. })));
    }

    #[test]
    fn rejects_resolutions_wider_than_the_output() {
        let err = AdcConfig::default().with_average_power(0).build::<17, _>(digit_register()).unwrap_err();
        assert!(matches!(err, AdcError::Resolution { bits: 17, max: 16 }));
        assert!(AdcConfig::default().with_average_power(0).build::<16, _>(digit_register()).is_ok());
    }
}
