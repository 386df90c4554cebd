//! Fixed-layout text report
//!
//! The layout and the number formatting match the report consumers already
//! parse, so neither may change:
//!
//! ```text
//!
//! ===========================
//! Tracking performance: parse
//! ===========================
//!   *  Avg. time 0.1 sec
//!   *  Min. time 0.1 sec
//!   *  Max. time 0.1 sec
//!   *  Tot. time 0.1 sec
//!   *  Stops 1
//!
//! ```

use crate::record::PerformanceRecord;
use std::io::{self, Write};

const HEADER_BAR: &str = "======================";

/// Significant digits of the default stream float format.
const PRECISION: i32 = 6;

/// Write the report block for one label.
pub fn write_report<W: Write + ?Sized>(
    label: &str,
    record: &PerformanceRecord,
    output: &mut W,
) -> io::Result<()> {
    let bar = "=".repeat(label.len());

    writeln!(output)?;
    writeln!(output, "{HEADER_BAR}{bar}")?;
    writeln!(output, "Tracking performance: {label}")?;
    writeln!(output, "{HEADER_BAR}{bar}")?;
    writeln!(output, "  *  Avg. time {} sec", format_seconds(record.average_time()))?;
    writeln!(output, "  *  Min. time {} sec", format_seconds(record.min_time))?;
    writeln!(output, "  *  Max. time {} sec", format_seconds(record.max_time))?;
    writeln!(output, "  *  Tot. time {} sec", format_seconds(record.total_time))?;
    writeln!(output, "  *  Stops {}", record.stops)?;
    writeln!(output)?;

    Ok(())
}

/// Format like `%g`: six significant digits, trailing zeros dropped,
/// scientific notation below 1e-4 or at 1e6 and above.
pub fn format_seconds(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent can shift (9.999999 -> 1e1).
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(label: &str, record: &PerformanceRecord) -> String {
        let mut out = Vec::new();
        write_report(label, record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let record = PerformanceRecord {
            total_time: 1.5,
            min_time: 0.25,
            max_time: 1.25,
            last_time: 1.25,
            stops: 2,
            ..Default::default()
        };

        let expected = [
            "",
            "=========================",
            "Tracking performance: abc",
            "=========================",
            "  *  Avg. time 0.75 sec",
            "  *  Min. time 0.25 sec",
            "  *  Max. time 1.25 sec",
            "  *  Tot. time 1.5 sec",
            "  *  Stops 2",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(render("abc", &record), expected);
    }

    #[test]
    fn test_report_without_stops() {
        let expected = [
            "",
            "==========================",
            "Tracking performance: idle",
            "==========================",
            "  *  Avg. time -nan sec",
            "  *  Min. time 0 sec",
            "  *  Max. time 0 sec",
            "  *  Tot. time 0 sec",
            "  *  Stops 0",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(render("idle", &PerformanceRecord::default()), expected);
    }

    #[test]
    fn test_report_paused_without_stops() {
        let mut record = PerformanceRecord::default();
        record.begin(0.0);
        record.suspend(1.5);

        let report = render("held", &record);
        assert!(report.contains("\n  *  Avg. time inf sec\n"));
        assert!(report.contains("\n  *  Tot. time 1.5 sec\n"));
    }

    #[test]
    fn test_format_fixed_range() {
        assert_eq!(format_seconds(0.1), "0.1");
        assert_eq!(format_seconds(1.5), "1.5");
        assert_eq!(format_seconds(2.0), "2");
        assert_eq!(format_seconds(0.100123456), "0.100123");
        assert_eq!(format_seconds(123456.7), "123457");
        assert_eq!(format_seconds(0.0001), "0.0001");
        assert_eq!(format_seconds(-0.25), "-0.25");
    }

    #[test]
    fn test_format_scientific_range() {
        assert_eq!(format_seconds(1234567.0), "1.23457e+06");
        assert_eq!(format_seconds(0.00001), "1e-05");
        assert_eq!(format_seconds(0.0000123), "1.23e-05");
        assert_eq!(format_seconds(1.7e300), "1.7e+300");
        assert_eq!(format_seconds(999999.7), "1e+06");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(f64::INFINITY), "inf");
        assert_eq!(format_seconds(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_seconds(f64::NAN.copysign(1.0)), "nan");
        assert_eq!(format_seconds(f64::NAN.copysign(-1.0)), "-nan");
    }

    proptest! {
        #[test]
        fn prop_bar_matches_label_length(label in "[a-zA-Z0-9 _.]{0,40}") {
            let report = render(&label, &PerformanceRecord::default());
            let lines: Vec<&str> = report.split('\n').collect();
            let bar = "=".repeat(22 + label.len());

            prop_assert_eq!(lines[0], "");
            prop_assert_eq!(lines[1], bar.as_str());
            prop_assert_eq!(lines[2], format!("Tracking performance: {}", label));
            prop_assert_eq!(lines[3], bar.as_str());
            prop_assert_eq!(lines.len(), 11);
        }

        #[test]
        fn prop_format_has_at_most_six_digits(value in 1e-12f64..1e12) {
            let text = format_seconds(value);
            let mantissa = text.split('e').next().unwrap_or("");
            let digits = mantissa
                .trim_start_matches("0.")
                .trim_start_matches('0')
                .chars()
                .filter(|c| c.is_ascii_digit())
                .count();
            prop_assert!(digits <= 6, "{} -> {}", value, text);
        }
    }
}
