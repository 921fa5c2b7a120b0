//! Human-readable rendering: `1 + 2.5e0 + e01`.

use crate::{Blade, Multivector};
use num_traits::Float;
use std::fmt::{self, Display, Formatter, Write};

const SIGNIFICANT_DIGITS: usize = 7;

impl<T: Float> Display for Multivector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(SIGNIFICANT_DIGITS).max(1);
        let mut terms = 0;
        for blade in Blade::all() {
            let value = self[blade];
            if value.is_zero() {
                continue;
            }
            if terms > 0 {
                f.write_str(" + ")?;
            }
            write_term(f, blade, value.to_f64().unwrap_or(f64::NAN), digits)?;
            terms += 1;
        }
        if terms == 0 {
            f.write_char('0')?;
        }
        Ok(())
    }
}

fn write_term(f: &mut Formatter<'_>, blade: Blade, value: f64, digits: usize) -> fmt::Result {
    match blade {
        Blade::Scalar => f.write_str(&general(value, digits)),
        _ if value == 1. => f.write_str(blade.name()),
        _ if value == -1. => write!(f, "-{}", blade.name()),
        _ => write!(f, "{}{}", general(value, digits), blade.name()),
    }
}

/// Formats like C's `%.<digits>g`: shortest of fixed or exponent form with
/// trailing zeros removed.
pub(crate) fn general(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0. { "inf" } else { "-inf" }.to_string();
    }
    if value == 0. {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
