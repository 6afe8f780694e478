//! printf-style formatting of the numeric label shown next to a measurement.
//!
//! A [`LabelFormat`] holds exactly one floating-point conversion
//! (`%f`, `%e`, `%g` and their upper-case forms) with the usual flags,
//! width and precision, surrounded by optional literal text. The format is
//! parsed once when it is configured, so applying it cannot fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MarkupsError, Result};

/// Format used for angle labels unless configured otherwise.
pub const DEFAULT_LABEL_FORMAT: &str = "%-#6.3g";

/// Largest accepted field width or precision.
pub const MAX_FIELD_WIDTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Exponent,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
struct FloatSpec {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    alternate: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
    uppercase: bool,
}

/// A parsed printf-style format with a single floating-point conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelFormat {
    source: String,
    prefix: String,
    suffix: String,
    spec: FloatSpec,
}

impl LabelFormat {
    /// Parses a format string such as `"%-#6.3g"` or `"%.1f deg"`.
    pub fn parse(format: &str) -> Result<Self> {
        let invalid = |reason: &str| MarkupsError::InvalidLabelFormat {
            format: format.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec = None;
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if spec.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if spec.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }
            if spec.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut parsed = FloatSpec {
                left_align: false,
                plus_sign: false,
                space_sign: false,
                alternate: false,
                zero_pad: false,
                width: 0,
                precision: None,
                conversion: Conversion::General,
                uppercase: false,
            };

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => parsed.left_align = true,
                    '+' => parsed.plus_sign = true,
                    ' ' => parsed.space_sign = true,
                    '#' => parsed.alternate = true,
                    '0' => parsed.zero_pad = true,
                    _ => break,
                }
                chars.next();
            }

            parsed.width = take_number(&mut chars).unwrap_or(0);
            if parsed.width > MAX_FIELD_WIDTH {
                return Err(invalid(&format!("width exceeds {MAX_FIELD_WIDTH}")));
            }

            if chars.peek() == Some(&'.') {
                chars.next();
                let precision = take_number(&mut chars).unwrap_or(0);
                if precision > MAX_FIELD_WIDTH {
                    return Err(invalid(&format!("precision exceeds {MAX_FIELD_WIDTH}")));
                }
                parsed.precision = Some(precision);
            }

            // Length modifiers are meaningless for a double but C accepts them.
            while matches!(chars.peek(), Some('l' | 'L')) {
                chars.next();
            }

            let (conversion, uppercase) = match chars.next() {
                Some('f') => (Conversion::Fixed, false),
                Some('F') => (Conversion::Fixed, true),
                Some('e') => (Conversion::Exponent, false),
                Some('E') => (Conversion::Exponent, true),
                Some('g') => (Conversion::General, false),
                Some('G') => (Conversion::General, true),
                Some('*') => return Err(invalid("'*' width or precision is not supported")),
                Some(other) => {
                    return Err(invalid(&format!("unsupported conversion '{other}'")));
                }
                None => return Err(invalid("incomplete conversion")),
            };
            parsed.conversion = conversion;
            parsed.uppercase = uppercase;
            spec = Some(parsed);
        }

        let spec = spec.ok_or_else(|| invalid("no floating-point conversion"))?;
        Ok(Self {
            source: format.to_string(),
            prefix,
            suffix,
            spec,
        })
    }

    /// Returns the format string as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Formats a value.
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 16);
        out.push_str(&self.prefix);
        out.push_str(&self.format_value(value));
        out.push_str(&self.suffix);
        out
    }

    fn format_value(&self, value: f64) -> String {
        let spec = &self.spec;

        let sign = if value.is_sign_negative() && !value.is_nan() {
            "-"
        } else if spec.plus_sign {
            "+"
        } else if spec.space_sign {
            " "
        } else {
            ""
        };

        let magnitude = value.abs();
        let body = if magnitude.is_nan() {
            "nan".to_string()
        } else if magnitude.is_infinite() {
            "inf".to_string()
        } else {
            match spec.conversion {
                Conversion::Fixed => format_fixed(magnitude, spec.precision.unwrap_or(6), spec.alternate),
                Conversion::Exponent => {
                    format_exponent(magnitude, spec.precision.unwrap_or(6), spec.alternate)
                }
                Conversion::General => format_general(magnitude, spec.precision, spec.alternate),
            }
        };
        let body = if spec.uppercase { body.to_uppercase() } else { body };

        let len = sign.len() + body.len();
        if len >= spec.width {
            return format!("{sign}{body}");
        }
        let pad = spec.width - len;
        if spec.left_align {
            format!("{sign}{body}{}", " ".repeat(pad))
        } else if spec.zero_pad && magnitude.is_finite() {
            format!("{sign}{}{body}", "0".repeat(pad))
        } else {
            format!("{}{sign}{body}", " ".repeat(pad))
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        // The default string is a fixed, valid literal.
        Self {
            source: DEFAULT_LABEL_FORMAT.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            spec: FloatSpec {
                left_align: true,
                plus_sign: false,
                space_sign: false,
                alternate: true,
                zero_pad: false,
                width: 6,
                precision: Some(3),
                conversion: Conversion::General,
                uppercase: false,
            },
        }
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for LabelFormat {
    type Error = MarkupsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LabelFormat> for String {
    fn from(format: LabelFormat) -> Self {
        format.source
    }
}

impl std::str::FromStr for LabelFormat {
    type Err = MarkupsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}

fn format_fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut s = format!("{value:.precision$}");
    if alternate && precision == 0 {
        s.push('.');
    }
    s
}

/// Splits Rust's `1.5e2` notation into mantissa and decimal exponent.
fn split_exponent(value: f64, precision: usize) -> (String, i32) {
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn join_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn format_exponent(value: f64, precision: usize, alternate: bool) -> String {
    let (mut mantissa, exponent) = split_exponent(value, precision);
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    join_exponent(&mantissa, exponent)
}

fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
}

fn format_general(value: f64, precision: Option<usize>, alternate: bool) -> String {
    let significant = match precision {
        Some(0) => 1,
        Some(p) => p,
        None => 6,
    };

    // The exponent is taken after rounding to the requested significant digits.
    let exponent = if value == 0.0 {
        0
    } else {
        split_exponent(value, significant - 1).1
    };

    let significant_i = i32::try_from(significant).unwrap_or(i32::MAX);
    if exponent >= -4 && exponent < significant_i {
        let decimals = usize::try_from(significant_i - 1 - exponent).unwrap_or(0);
        let mut s = format!("{value:.decimals$}");
        if alternate {
            if !s.contains('.') {
                s.push('.');
            }
        } else {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let (mut mantissa, exponent) = split_exponent(value, significant - 1);
        if alternate {
            if !mantissa.contains('.') {
                mantissa.push('.');
            }
        } else {
            strip_trailing_zeros(&mut mantissa);
        }
        join_exponent(&mantissa, exponent)
    }
}
