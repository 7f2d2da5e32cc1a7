//! Instant resolution: birth input to one absolute UTC instant.
//!
//! Exact mode combines the civil date and clock time, then subtracts the
//! supplied UTC offset. Noon and Midnight are fixed UTC instants on the
//! birth date. Sunrise/Sunset ask the ephemeris for the next horizon
//! crossing starting from noon UTC on the date; on any failure (missing or
//! non-finite coordinates, provider error, no event in the window) they fall
//! back to a fixed default so resolution always terminates with an instant.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use natal_core::{Body, Direction, EphemerisProvider, GeoLocation};

use crate::error::ChartError;
use crate::input::{BirthInput, TimeMode};

/// Forward search window for rise/set events, in days.
const RISE_SET_WINDOW_DAYS: f64 = 2.0;

/// Fixed fallback hour (UTC) when a sunrise search fails.
const SUNRISE_FALLBACK_HOUR: u32 = 6;

/// Fixed fallback hour (UTC) when a sunset search fails.
const SUNSET_FALLBACK_HOUR: u32 = 18;

/// Resolve a birth input into a single absolute UTC instant.
///
/// Fails only with [`ChartError::InvalidTimeSpec`]: Sunrise/Sunset failures
/// are absorbed into the fixed defaults and never surface.
pub fn resolve_instant(
    input: &BirthInput,
    ephemeris: &dyn EphemerisProvider,
) -> Result<DateTime<Utc>, ChartError> {
    let date = NaiveDate::from_ymd_opt(input.year, input.month, input.day).ok_or(
        ChartError::InvalidTimeSpec("date does not form a valid calendar day"),
    )?;

    match input.time_mode {
        TimeMode::Exact => resolve_exact(input, date),
        TimeMode::Noon => Ok(at_utc_hour(date, 12)),
        TimeMode::Midnight => Ok(at_utc_hour(date, 0)),
        TimeMode::Sunrise => Ok(rise_set_or_fallback(
            input,
            date,
            Direction::Ascending,
            SUNRISE_FALLBACK_HOUR,
            ephemeris,
        )),
        TimeMode::Sunset => Ok(rise_set_or_fallback(
            input,
            date,
            Direction::Descending,
            SUNSET_FALLBACK_HOUR,
            ephemeris,
        )),
    }
}

/// Combine civil date + clock time, then shift by the UTC offset.
fn resolve_exact(input: &BirthInput, date: NaiveDate) -> Result<DateTime<Utc>, ChartError> {
    let time = NaiveTime::from_hms_opt(input.hour, input.minute, 0).ok_or(
        ChartError::InvalidTimeSpec("clock time does not form a valid time of day"),
    )?;
    if !input.utc_offset_hours.is_finite() {
        return Err(ChartError::InvalidTimeSpec("utc offset must be finite"));
    }
    let local = NaiveDateTime::new(date, time);
    let offset_ms = (input.utc_offset_hours * 3_600_000.0).round() as i64;
    Ok((local - Duration::milliseconds(offset_ms)).and_utc())
}

/// Best-effort rise/set resolution with the fixed-default fallback.
///
/// Never fails: any provider problem degrades to `fallback_hour` UTC on the
/// birth date.
fn rise_set_or_fallback(
    input: &BirthInput,
    date: NaiveDate,
    direction: Direction,
    fallback_hour: u32,
    ephemeris: &dyn EphemerisProvider,
) -> DateTime<Utc> {
    let fallback = at_utc_hour(date, fallback_hour);

    let Some(observer) = input.observer() else {
        log::debug!(
            "{} resolution without finite coordinates, using {:02}:00 UTC",
            input.time_mode.name(),
            fallback_hour
        );
        return fallback;
    };

    let baseline = at_utc_hour(date, 12);
    match search_rise_set(ephemeris, &observer, direction, baseline) {
        Some(instant) => instant,
        None => {
            log::debug!(
                "{} search found no event, using {:02}:00 UTC",
                input.time_mode.name(),
                fallback_hour
            );
            fallback
        }
    }
}

/// Single bounded provider call; errors collapse into `None`.
fn search_rise_set(
    ephemeris: &dyn EphemerisProvider,
    observer: &GeoLocation,
    direction: Direction,
    baseline: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match ephemeris.search_rise_set(Body::Sun, observer, direction, baseline, RISE_SET_WINDOW_DAYS)
    {
        Ok(found) => found,
        Err(e) => {
            log::debug!("rise/set search failed: {e}");
            None
        }
    }
}

/// UTC instant at a whole hour on the given date.
fn at_utc_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    // Callers only pass mode constants (0, 6, 12, 18), all valid hours.
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    NaiveDateTime::new(date, time).and_utc()
}
