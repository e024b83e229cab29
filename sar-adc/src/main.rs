use std::path::Path;

use sar_adc::constants::ADC_BITS;
use sar_adc::*;
use tickflow::Package;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Codes held at the analog input, one traced run each.
const CODES: [u64; 6] = [0x00, 0x01, 0x5a, 0x80, 0xb4, 0xff];

/// Ticks for a completed result to reach the filter and the decimal converter.
const SETTLE_TICKS: usize = 3;

fn main() -> Result<(), AdcError> {
    let env_filter = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AdcConfig::default();
    let mut package = Package::default();

    for code in CODES {
        let adc = config.build::<ADC_BITS, _>(digit_register())?;
        let window = adc.average_filter().window();
        let mut bench = Bench::traced(adc, IdealComparator { target: code }, &format!("sar_adc_{:02x}", code));

        let mut result = None;
        for _ in 0..window {
            result = bench.convert(FormatSelect::Raw);
        }
        for _ in 0..SETTLE_TICKS {
            bench.tick(true, FormatSelect::Raw);
        }
        let [raw, averaged, scaled, decimal] =
            [FormatSelect::Raw, FormatSelect::Averaged, FormatSelect::ScaledBinary, FormatSelect::ScaledDecimal]
                .map(|format| bench.tick(true, format).numeric);

        info!(code, result = ?result, raw, averaged, scaled, decimal = %format!("{:04x}", decimal), "converted");
        if let Some(trace) = bench.take_trace() {
            package.add(trace);
        }
    }

    package.gen_vcd(Path::new("./build"))?;
    Ok(())
}
