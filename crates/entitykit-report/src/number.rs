//! Number formatting compatible with the consumers of the artifacts.
//!
//! The generated config and data are read by script code, so numbers are
//! printed the way a script runtime prints them: shortest round-trip
//! digits, no trailing `.0`, `NaN`/`Infinity` spelled out, exponent form
//! outside `[1e-6, 1e21)`.
//!
//! Rounding follows fixed-point formatting there as well: the decimal
//! closest to the exact binary value wins, and exact ties round away
//! from zero (Rust's own formatter rounds ties to even).

/// Extra digits printed to detect an exact decimal tie.
///
/// A tie is a value with exactly `digits + 1` decimals ending in 5. No
/// other double lies within `10^-(digits + TIE_PROBE)` of such a value.
const TIE_PROBE: usize = 30;

/// Round to `digits` decimals and read the result back as a number.
///
/// A result of negative zero is returned as `0.0`.
pub fn to_fixed(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value.abs() >= 1e21 {
        return value;
    }

    let magnitude = value.abs();
    let exact = format!("{:.*}", digits + TIE_PROBE, magnitude);
    let (head, tail) = exact.split_at(exact.len() - TIE_PROBE);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let rounded = if is_tie {
        increment_last_digit(head.trim_end_matches('.'))
    } else {
        format!("{:.*}", digits, magnitude)
    };

    let magnitude: f64 = rounded.parse().unwrap_or(f64::NAN);
    let result = if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    };
    if result == 0.0 {
        0.0
    } else {
        result
    }
}

/// Display a number the way script code would.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    // Exponent form: Rust prints `1e21` / `1e-7`, scripts print `1e+21` / `1e-7`.
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Round to `digits` decimals and display.
pub fn format_fixed(value: f64, digits: usize) -> String {
    js_number(to_fixed(value, digits))
}

/// Round half up, towards positive infinity.
pub fn js_round(value: f64) -> f64 {
    if value < 0.0 && value.fract() == -0.5 {
        value.ceil()
    } else {
        value.round()
    }
}

fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            break;
        }
        i -= 1;
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            digit => {
                bytes[i] = digit + 1;
                break;
            }
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
