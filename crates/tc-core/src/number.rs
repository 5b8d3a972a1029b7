//! Shortest-form number printing with a fixed count of significant digits.
//!
//! Text answers and SVG coordinates are printed the way a C++ `ostream`
//! prints a `double` by default (`%g`, precision 6): fixed notation for
//! decimal exponents in `-4..precision`, scientific notation outside it,
//! trailing zeros dropped in both.
//!
//! ```
//! use tc_core::format_significant;
//!
//! assert_eq!(format_significant(1.361239, 6), "1.36124");
//! assert_eq!(format_significant(1_234_567.0, 6), "1.23457e+06");
//! assert_eq!(format_significant(0.00001, 6), "1e-05");
//! ```

/// Format `x` with `digits` significant digits (`digits == 0` is treated
/// as 1).
pub fn format_significant(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return "0".into();
    }

    let digits = digits.max(1);
    // Rounding to `digits` can carry into the next decade (999999.7 -> 1e+06),
    // so the exponent is read back from the rounded scientific form.
    let scientific = format!("{:.*e}", digits - 1, x);
    let Some((mantissa, Ok(exponent))) = scientific
        .split_once('e')
        .map(|(m, e)| (m, e.parse::<i32>()))
    else {
        return scientific;
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{x:.decimals$}")).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
