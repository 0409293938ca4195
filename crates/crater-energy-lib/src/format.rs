//! Human-readable rendering of energy values.
//!
//! Numbers are grouped with `,` thousands separators and use `.` as the decimal
//! point. Rounding is done on the shortest decimal representation of the value
//! (the digits `{}` prints), rounding half away from zero, so `1.005` rounds to
//! `1.01` rather than falling victim to its binary approximation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Joules per kilojoule.
pub const JOULES_PER_KJ: f64 = 1e3;
/// Joules per megajoule.
pub const JOULES_PER_MJ: f64 = 1e6;
/// Fraction digits shown for kJ and MJ magnitudes.
pub const SCALED_FRACTION_DIGITS: usize = 2;

/// How energies are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Pick J, kJ or MJ by magnitude.
    #[default]
    Auto,
    /// Always whole joules.
    Full,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Auto => DisplayMode::Full,
            DisplayMode::Full => DisplayMode::Auto,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Auto => "Format: Auto",
            DisplayMode::Full => "Format: Full",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(DisplayMode::Auto),
            "full" => Ok(DisplayMode::Full),
            other => Err(format!(
                "unknown display mode '{other}'; expected 'auto' or 'full'"
            )),
        }
    }
}

/// Unit attached to a formatted magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "J")]
    Joule,
    #[serde(rename = "kJ")]
    Kilojoule,
    #[serde(rename = "MJ")]
    Megajoule,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A display-ready energy magnitude and unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedEnergy {
    pub magnitude: String,
    pub unit: EnergyUnit,
}

impl FormattedEnergy {
    /// The `0 J` placeholder shown when there is no result.
    pub fn placeholder() -> Self {
        Self {
            magnitude: "0".to_string(),
            unit: EnergyUnit::Joule,
        }
    }
}

impl fmt::Display for FormattedEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Format an energy for display.
///
/// `None` and non-finite values render as the `0 J` placeholder.
///
/// # Examples
///
/// ```
/// use crater_energy_lib::format::{format_energy, DisplayMode};
///
/// assert_eq!(format_energy(Some(999.4), DisplayMode::Auto).to_string(), "999 J");
/// assert_eq!(format_energy(Some(1000.0), DisplayMode::Auto).to_string(), "1 kJ");
/// assert_eq!(format_energy(Some(999_999.0), DisplayMode::Auto).to_string(), "1,000 kJ");
/// assert_eq!(format_energy(Some(1_234_567.0), DisplayMode::Full).to_string(), "1,234,567 J");
/// assert_eq!(format_energy(None, DisplayMode::Full).to_string(), "0 J");
/// ```
pub fn format_energy(joules: Option<f64>, mode: DisplayMode) -> FormattedEnergy {
    let joules = match joules {
        Some(j) if j.is_finite() => j,
        _ => return FormattedEnergy::placeholder(),
    };

    let (magnitude, unit) = match mode {
        DisplayMode::Full => (format_number(joules, 0), EnergyUnit::Joule),
        DisplayMode::Auto if joules >= JOULES_PER_MJ => (
            format_number(joules / JOULES_PER_MJ, SCALED_FRACTION_DIGITS),
            EnergyUnit::Megajoule,
        ),
        DisplayMode::Auto if joules >= JOULES_PER_KJ => (
            format_number(joules / JOULES_PER_KJ, SCALED_FRACTION_DIGITS),
            EnergyUnit::Kilojoule,
        ),
        DisplayMode::Auto => (format_number(joules, 0), EnergyUnit::Joule),
    };

    FormattedEnergy { magnitude, unit }
}

/// Round `value` to at most `max_fraction_digits` and group the integer part.
///
/// Trailing fractional zeros are dropped, so `2.50` renders as `2.5` and `3.00` as `3`.
/// Non-finite values are returned as their plain `Display` text (`inf`, `NaN`);
/// [`format_energy`] never passes them through.
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(
            frac_part
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(max_fraction_digits),
        )
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(max_fraction_digits)
        .is_some_and(|&b| b >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let to_str = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let int_str = to_str(&digits[..int_len]);
    let frac_str = to_str(&digits[int_len..]);
    let frac_str = frac_str.trim_end_matches('0');

    let is_zero = digits.iter().all(|&d| d == 0);
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_str));
    if !frac_str.is_empty() {
        out.push('.');
        out.push_str(frac_str);
    }
    out
}

/// Insert `,` between every group of three digits, counting from the right.
///
/// ```
/// use crater_energy_lib::format::group_thousands;
///
/// assert_eq!(group_thousands("999"), "999");
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
