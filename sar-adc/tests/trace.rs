use std::env;
use std::fs;

use sar_adc::*;
use tickflow::*;

fn traced(target: u64, name: &str) -> Bench<4, DigitRegister, IdealComparator> {
    let adc = AdcConfig::default().with_strobe_period(3).build(digit_register()).unwrap();
    Bench::traced(adc, IdealComparator { target }, name)
}

#[test]
fn trace_records_ports_and_registers() {
    let mut bench = traced(0b1010, "trace_ports");
    assert_eq!(bench.convert(FormatSelect::Raw), Some(Bits::new(0b1010)));
    let ticks = bench.instance().ticks() as usize;

    let trace = bench.take_trace().unwrap();
    assert_eq!(trace.len(), ticks);
    let names = trace.var_names().collect::<Vec<_>>();
    for name in ["in_enable", "in_comparator", "in_format", "out_dac", "out_result_valid", "out_numeric", "st_engine_acc"] {
        assert!(names.contains(&name), "missing {}", name);
    }

    let valid = (0..trace.len()).filter(|i| trace.value(*i, "out_result_valid") == Some(1)).collect::<Vec<_>>();
    assert_eq!(valid, vec![ticks - 1]);
    assert_eq!(trace.value(ticks - 1, "st_engine_result"), Some(0b1010));
}

#[test]
fn package_writes_one_vcd_per_trace() {
    let dir = env::temp_dir().join(format!("sar_adc_vcd_{}", std::process::id()));

    let mut package = Package::default();
    for target in [3, 12] {
        let mut bench = traced(target, &format!("sar_adc_{}", target));
        bench.convert(FormatSelect::Raw);
        package.add(bench.take_trace().unwrap());
    }
    package.gen_vcd(&dir).unwrap();

    let vcd = fs::read_to_string(dir.join("sar_adc_12.vcd")).unwrap();
    assert!(vcd.contains("$scope module sar_adc_12 $end"));
    assert!(vcd.contains(" out_dac $end"));
    assert!(vcd.contains("$var wire 16 "));
    assert!(vcd.contains("$dumpvars"));
    assert!(dir.join("sar_adc_3.vcd").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn package_rejects_duplicated_names() {
    let dir = env::temp_dir().join(format!("sar_adc_dup_{}", std::process::id()));

    let mut package = Package::default();
    for _ in 0..2 {
        let mut bench = traced(1, "same");
        bench.tick(true, FormatSelect::Raw);
        package.add(bench.take_trace().unwrap());
    }
    assert!(matches!(package.gen_vcd(&dir), Err(PackageError::DuplicatedTrace { .. })));

    let _ = fs::remove_dir_all(&dir);
}
