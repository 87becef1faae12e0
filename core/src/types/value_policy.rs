use std::fmt;
use std::str::FromStr;

/// How a numeric `value` field of a map-shaped record set is normalised into
/// an `i64` while decoding.
///
/// Integral JSON numbers are accepted by both policies. The policies only
/// differ for numbers carrying a fractional part or an exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePolicy {
    /// Only integral numbers within `i64` are accepted; anything else is a
    /// decode error.
    Strict,
    /// Floating-point numbers are truncated toward zero. Every number outside
    /// the `i64` range, integral or not, saturates at the nearest bound.
    #[default]
    Truncate,
}

impl ValuePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuePolicy::Strict => "strict",
            ValuePolicy::Truncate => "truncate",
        }
    }

    /// Converts a decoded JSON number into the canonical TTL representation.
    pub fn normalize(&self, number: &serde_json::Number) -> Result<i64, String> {
        if let Some(v) = number.as_i64() {
            return Ok(v);
        }
        if number.is_u64() {
            return match self {
                ValuePolicy::Strict => Err(format!(
                    "value {number} does not fit in a signed 64-bit integer"
                )),
                ValuePolicy::Truncate => Ok(i64::MAX),
            };
        }

        match self {
            ValuePolicy::Strict => Err(format!(
                "value {number} is not an integer (strict value policy)"
            )),
            ValuePolicy::Truncate => match number.as_f64() {
                // `as` saturates at the i64 bounds and truncates toward zero.
                Some(f) if f.is_finite() => Ok(f as i64),
                _ => Err(format!("value {number} is not a finite number")),
            },
        }
    }
}

impl fmt::Display for ValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValuePolicy::Strict),
            "truncate" => Ok(ValuePolicy::Truncate),
            other => Err(format!(
                "unknown value policy '{other}' (expected 'strict' or 'truncate')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> serde_json::Number {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn integers_pass_under_both_policies() {
        for policy in [ValuePolicy::Strict, ValuePolicy::Truncate] {
            assert_eq!(policy.normalize(&number("300")), Ok(300));
            assert_eq!(policy.normalize(&number("-5")), Ok(-5));
        }
    }

    #[test]
    fn strict_rejects_fractional_numbers() {
        assert!(ValuePolicy::Strict.normalize(&number("300.0")).is_err());
        assert!(ValuePolicy::Strict.normalize(&number("3e2")).is_err());
    }

    #[test]
    fn truncate_drops_the_fraction() {
        assert_eq!(ValuePolicy::Truncate.normalize(&number("300.9")), Ok(300));
        assert_eq!(ValuePolicy::Truncate.normalize(&number("-2.5")), Ok(-2));
        assert_eq!(ValuePolicy::Truncate.normalize(&number("3e2")), Ok(300));
    }

    #[test]
    fn truncate_saturates_floats_at_the_bounds() {
        assert_eq!(ValuePolicy::Truncate.normalize(&number("1e30")), Ok(i64::MAX));
        assert_eq!(ValuePolicy::Truncate.normalize(&number("-1e30")), Ok(i64::MIN));
    }

    #[test]
    fn oversized_unsigned_values_saturate_only_when_truncating() {
        for raw in ["9223372036854775808", "18446744073709551615"] {
            let big = number(raw);
            assert_eq!(ValuePolicy::Truncate.normalize(&big), Ok(i64::MAX));
            assert!(ValuePolicy::Strict.normalize(&big).is_err());
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("STRICT".parse::<ValuePolicy>(), Ok(ValuePolicy::Strict));
        assert_eq!(" truncate ".parse::<ValuePolicy>(), Ok(ValuePolicy::Truncate));
        assert!("loose".parse::<ValuePolicy>().is_err());
    }
}
