//! Duration and byte-size conversion
//!
//! Parses systemd-style quantities ("1h 30min", "500ms", "512K") into
//! canonical integer values and formats them back into file fragments.

/// Time units accepted in duration values, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months, // 30.4375 days
    Years,  // 365.25 days
}

impl TimeUnit {
    /// Length of one unit as an exact nanosecond count. Every value is a
    /// whole integer below 2^53, so it survives the trip through f64.
    fn in_nanos(self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 3600 * 1_000_000_000,
            TimeUnit::Days => 86400 * 1_000_000_000,
            TimeUnit::Weeks => 604_800 * 1_000_000_000,
            TimeUnit::Months => 2_629_800 * 1_000_000_000,
            TimeUnit::Years => 31_557_600 * 1_000_000_000,
        }
    }

    /// Short suffix used when formatting
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Weeks => "w",
            TimeUnit::Months => "month",
            TimeUnit::Years => "year",
        }
    }

    /// Recognize a unit suffix, long or short form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ns" | "nsec" => Some(Self::Nanoseconds),
            "us" | "usec" => Some(Self::Microseconds),
            "ms" | "msec" => Some(Self::Milliseconds),
            "s" | "sec" | "second" | "seconds" => Some(Self::Seconds),
            "m" | "min" | "minute" | "minutes" => Some(Self::Minutes),
            "h" | "hr" | "hour" | "hours" => Some(Self::Hours),
            "d" | "day" | "days" => Some(Self::Days),
            "w" | "week" | "weeks" => Some(Self::Weeks),
            "month" | "months" => Some(Self::Months),
            "y" | "year" | "years" => Some(Self::Years),
            _ => None,
        }
    }

    pub fn is_sub_second(self) -> bool {
        matches!(
            self,
            TimeUnit::Nanoseconds | TimeUnit::Microseconds | TimeUnit::Milliseconds
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("empty value")]
    Empty,

    #[error("invalid number '{0}'")]
    BadNumber(String),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("sub-second unit '{0}' is not accepted for this setting")]
    SubSecondUnit(String),

    #[error("trailing characters '{0}'")]
    Trailing(String),
}

/// Parse a duration like "1h 30min" or "500ms" into an integer count of
/// `canonical` units.
///
/// A bare number is read in `read_unit`. Tokens are summed and the total is
/// truncated to an integer exactly once, at the end. Any token that fails
/// the grammar rejects the whole value.
pub fn parse_duration(
    text: &str,
    allow_sub_second: bool,
    read_unit: TimeUnit,
    canonical: TimeUnit,
) -> Result<u64, ConvertError> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return Err(ConvertError::Empty);
    }

    let mut total = 0f64;
    while !rest.is_empty() {
        let num_len = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .count();
        if num_len == 0 {
            return Err(ConvertError::BadNumber(rest.to_string()));
        }
        let number: f64 = rest[..num_len]
            .parse()
            .map_err(|_| ConvertError::BadNumber(rest[..num_len].to_string()))?;
        // "2 hours" is as valid as "2hours"
        rest = rest[num_len..].trim_start();

        let unit_len = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        let unit = if unit_len == 0 {
            read_unit
        } else {
            TimeUnit::parse(&rest[..unit_len])
                .ok_or_else(|| ConvertError::UnknownUnit(rest[..unit_len].to_string()))?
        };
        if unit.is_sub_second() && !allow_sub_second {
            return Err(ConvertError::SubSecondUnit(unit.suffix().to_string()));
        }

        // Unit lengths are exact integers, so converting between sub-second
        // units never drifts the way a ratio of fractional seconds would.
        total += number * unit.in_nanos() as f64;
        rest = rest[unit_len..].trim_start();
    }

    Ok((total / canonical.in_nanos() as f64) as u64)
}

/// Format a duration stored in `canonical` units. Zero is unit-independent
/// and renders bare.
pub fn format_duration(value: u64, canonical: TimeUnit) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{}{}", value, canonical.suffix())
    }
}

/// Parse a byte size like "2G" or "512K" into whole megabytes.
///
/// Suffixes K/M/G/T/P/E are 1024 multipliers; no suffix means bytes.
/// Conversion truncates toward zero ("512K" is 0 MB).
pub fn parse_byte_size(text: &str) -> Result<u64, ConvertError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ConvertError::Empty);
    }

    let num_len = s
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .count();
    if num_len == 0 {
        return Err(ConvertError::BadNumber(s.to_string()));
    }
    let number: f64 = s[..num_len]
        .parse()
        .map_err(|_| ConvertError::BadNumber(s[..num_len].to_string()))?;

    let rest = &s[num_len..];
    let bytes = match rest {
        "" => number,
        "K" => number * 1024.0,
        "M" => number * 1024.0 * 1024.0,
        "G" => number * 1024.0 * 1024.0 * 1024.0,
        "T" => number * 1024.0_f64.powi(4),
        "P" => number * 1024.0_f64.powi(5),
        "E" => number * 1024.0_f64.powi(6),
        other => return Err(ConvertError::Trailing(other.to_string())),
    };

    Ok((bytes / (1024.0 * 1024.0)) as u64)
}

/// Format a stored megabyte count with its literal suffix
pub fn format_byte_size(megabytes: u64) -> String {
    format!("{}M", megabytes)
}
