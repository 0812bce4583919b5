//! Date parsing shared by the `date` and `modified` fields

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use std::{fmt::Display, sync::LazyLock};
use thiserror::Error;

/// YAML 1.1 timestamp: `2001-12-14 21:59:43.10 -5`, `2001-12-14t21:59:43.10-05:00`, ...
static YAML_TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"(?x)
        ^(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})
        (?:[Tt]|[\ \t]+)
        (?P<hour>\d{1,2}):(?P<minute>\d{2}):(?P<second>\d{2})
        (?:\.(?P<fraction>\d*))?
        (?:[\ \t]*(?P<zone>Z|(?P<sign>[-+])(?P<zone_hour>\d{1,2})(?::?(?P<zone_minute>\d{2}))?))?$",
    )
    .build()
    .unwrap()
});

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y %m %d %H:%M:%S",
    "%Y %m %d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y %m %d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Errors from [`parse_date`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Nothing left to parse after trimming
    #[error("Empty date")]
    Empty,

    /// No known format matched
    #[error("Invalid date: `{0}`")]
    Invalid(String),
}

/// Canonical date of a document
///
/// Dates written with an explicit UTC offset keep it, all others stay naive and are
/// interpreted in the site's timezone later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Date {
    /// Date without timezone information
    Naive(NaiveDateTime),

    /// Date with a fixed UTC offset
    Aware(DateTime<FixedOffset>),
}

impl Date {
    /// Local date and time, ignoring the offset
    #[must_use]
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Self::Naive(datetime) => *datetime,
            Self::Aware(datetime) => datetime.naive_local(),
        }
    }

    /// UTC offset, if one was given
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Aware(datetime) => Some(*datetime.offset()),
        }
    }

    /// Date-only part
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.naive().date()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Aware(datetime) => write!(f, "{}", datetime.to_rfc3339()),
        }
    }
}

/// Parses a date string into a [`Date`]
///
/// Accepts ISO 8601 dates and datetimes (with `T` or space separator, optional fractional
/// seconds and offset), `YYYY/MM/DD`, `YYYY MM DD` and written month names.
///
/// # Errors
/// - [`Error::Empty`] for blank input
/// - [`Error::Invalid`] if no format matches
///
/// # Example
/// ```
/// use yaml_metadata_reader::metadata::date::parse_date;
///
/// let date = parse_date("2020-01-15").unwrap();
/// assert_eq!(date.to_string(), "2020-01-15T00:00:00");
///
/// let date = parse_date("2020-01-15 10:20+02:00").unwrap();
/// assert_eq!(date.to_string(), "2020-01-15T10:20:00+02:00");
/// ```
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::Empty);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(Date::Aware(datetime));
    }

    if let Some(date) = YAML_TIMESTAMP_REGEX
        .captures(text)
        .and_then(|captures| from_yaml_timestamp(&captures))
    {
        return Ok(date);
    }

    if let Some(datetime) = AWARE_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Ok(Date::Aware(datetime));
    }

    if let Some(datetime) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Ok(Date::Naive(datetime));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| Date::Naive(date.and_time(NaiveTime::MIN)))
        .ok_or_else(|| Error::Invalid(text.to_string()))
}

fn from_yaml_timestamp(captures: &Captures) -> Option<Date> {
    let number = |name: &str| captures.name(name)?.as_str().parse::<u32>().ok();

    let date = NaiveDate::from_ymd_opt(
        captures["year"].parse().ok()?,
        number("month")?,
        number("day")?,
    )?;

    let nanos = captures.name("fraction").map_or(Some(0), |fraction| {
        let digits = fraction.as_str();
        let digits = &digits[..digits.len().min(9)];
        format!("{digits:0<9}").parse::<u32>().ok()
    })?;
    let time =
        NaiveTime::from_hms_nano_opt(number("hour")?, number("minute")?, number("second")?, nanos)?;
    let datetime = date.and_time(time);

    let Some(zone) = captures.name("zone") else {
        return Some(Date::Naive(datetime));
    };

    let offset = if zone.as_str() == "Z" {
        0
    } else {
        let minutes = number("zone_hour")? * 60 + number("zone_minute").unwrap_or(0);
        let seconds = i32::try_from(minutes * 60).ok()?;

        if &captures["sign"] == "-" {
            -seconds
        } else {
            seconds
        }
    };

    FixedOffset::east_opt(offset)?
        .from_local_datetime(&datetime)
        .single()
        .map(Date::Aware)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_date_only() {
        let expected = Date::Naive(naive("2020-01-15 00:00:00"));

        assert_eq!(parse_date("2020-01-15").unwrap(), expected);
        assert_eq!(parse_date("2020/01/15").unwrap(), expected);
        assert_eq!(parse_date("2020 01 15").unwrap(), expected);
        assert_eq!(parse_date("15 January 2020").unwrap(), expected);
        assert_eq!(parse_date("Jan 15, 2020").unwrap(), expected);
        assert_eq!(parse_date("  2020-01-15\n").unwrap(), expected);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_naive_datetime() {
        assert_eq!(
            parse_date("2012-10-04 14:03").unwrap(),
            Date::Naive(naive("2012-10-04 14:03:00"))
        );
        assert_eq!(
            parse_date("2012-10-04T14:03:59").unwrap(),
            Date::Naive(naive("2012-10-04 14:03:59"))
        );
        assert_eq!(
            parse_date("2012-10-04 14:03:59.250").unwrap().naive(),
            naive("2012-10-04 14:03:59") + chrono::Duration::milliseconds(250)
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_aware_datetime() {
        let date = parse_date("2012-10-04T14:03:00+02:00").unwrap();
        assert_eq!(date.offset(), FixedOffset::east_opt(2 * 3600));
        assert_eq!(date.naive(), naive("2012-10-04 14:03:00"));

        let date = parse_date("2012-10-04T14:03:00Z").unwrap();
        assert_eq!(date.offset(), FixedOffset::east_opt(0));

        let date = parse_date("2012-10-04 14:03:00 -0500").unwrap();
        assert_eq!(date.offset(), FixedOffset::west_opt(5 * 3600));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_yaml_timestamp() {
        let date = parse_date("2001-12-14 21:59:43.10 -5").unwrap();
        assert_eq!(date.offset(), FixedOffset::west_opt(5 * 3600));
        assert_eq!(
            date.naive(),
            naive("2001-12-14 21:59:43") + chrono::Duration::milliseconds(100)
        );

        let date = parse_date("2001-12-14t21:59:43.10-05:00").unwrap();
        assert_eq!(date.offset(), FixedOffset::west_opt(5 * 3600));

        let date = parse_date("2001-12-15 2:59:43.10").unwrap();
        assert_eq!(date.offset(), None);
        assert_eq!(
            date.naive(),
            naive("2001-12-15 02:59:43") + chrono::Duration::milliseconds(100)
        );

        let date = parse_date("2001-1-5 10:00:00 +5:30").unwrap();
        assert_eq!(date.offset(), FixedOffset::east_opt(5 * 3600 + 30 * 60));
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2001, 1, 5).unwrap());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_offset_without_colon() {
        let date = parse_date("2012-10-04T14:03:00+0200").unwrap();
        assert_eq!(date.offset(), FixedOffset::east_opt(2 * 3600));
        assert_eq!(date.naive(), naive("2012-10-04 14:03:00"));

        let date = parse_date("2012-10-04T14:03+0200").unwrap();
        assert_eq!(date.offset(), FixedOffset::east_opt(2 * 3600));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn parse_invalid() {
        assert_eq!(parse_date(""), Err(Error::Empty));
        assert_eq!(parse_date("   "), Err(Error::Empty));
        assert_eq!(
            parse_date("not a date"),
            Err(Error::Invalid("not a date".to_string()))
        );
        assert!(matches!(parse_date("2020-13-45"), Err(Error::Invalid(_))));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn date_part() {
        let date = parse_date("2020-01-15 10:00").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
    }
}
