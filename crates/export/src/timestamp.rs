//! Converting Canvas' UTC timestamps into Pacific and Central civil time.
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::{
    Tz,
    US::{Central, Pacific},
};
use thiserror::Error;

/// What Canvas gives us. No fractional seconds, always `Z`.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Something spreadsheets will show sensibly, eg `2021-09-29 14:00:00 PDT-0700`
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

#[derive(Error, Debug)]
#[error("couldn't parse timestamp {raw:?}: {source}")]
pub struct TimestampError {
    pub raw: String,
    source: chrono::ParseError,
}

/// One instant, rendered in both zones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zoned {
    pub pacific: String,
    pub central: String,
}

/// Render a raw UTC timestamp in Pacific and Central time.
///
/// Absent or blank input gives two empty strings.
pub fn normalize(raw: Option<&str>) -> Result<Zoned, TimestampError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(Zoned::default());
    };

    let utc = NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .map_err(|source| TimestampError {
            raw: raw.to_string(),
            source,
        })?
        .and_utc();

    Ok(Zoned {
        pacific: render(&utc, Pacific),
        central: render(&utc, Central),
    })
}

fn render(utc: &DateTime<Utc>, tz: Tz) -> String {
    utc.with_timezone(&tz).format(OUTPUT_FORMAT).to_string()
}
