use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::weather_type::determine_weather_type;
use crate::models::{DayForecast, ForecastPayload, HourForecast, WeatherSnapshot};

/// Reasons a forecast payload cannot be turned into a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("no weather data found")]
    NoData,

    #[error("forecast bucket is missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid forecast timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Pick the forecast bucket describing `now` and build a snapshot from it
///
/// Hourly data wins whenever the payload has any: the hour closest to `now`
/// is used, the earliest one on ties. Without hourly data the first day is
/// used with the mean of its max and min temperatures.
pub fn select_snapshot(
    payload: &ForecastPayload,
    now: DateTime<Utc>,
) -> Result<WeatherSnapshot, ForecastError> {
    if let Some(hour) = nearest_hour(&payload.hours, now)? {
        return hour_snapshot(hour);
    }

    match payload.days.first() {
        Some(day) => day_snapshot(day),
        None => Err(ForecastError::NoData),
    }
}

/// Linear scan for the hour with the smallest distance to `now`
pub fn nearest_hour(
    hours: &[HourForecast],
    now: DateTime<Utc>,
) -> Result<Option<&HourForecast>, ForecastError> {
    let mut closest: Option<(&HourForecast, i64)> = None;

    for hour in hours {
        let time = parse_bucket_time(&hour.date_time)?;
        let distance = (now - time).num_milliseconds().abs();

        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((hour, distance)),
        }
    }

    Ok(closest.map(|(hour, _)| hour))
}

fn hour_snapshot(hour: &HourForecast) -> Result<WeatherSnapshot, ForecastError> {
    let temperature = hour.temperature_c.ok_or(ForecastError::MissingField("TTT_C"))?;
    let symbol_code = hour.symbol_code.ok_or(ForecastError::MissingField("symbol_code"))?;

    Ok(WeatherSnapshot {
        temperature,
        weather_type: determine_weather_type(symbol_code.round() as i32),
        time: hour.date_time.clone(),
    })
}

fn day_snapshot(day: &DayForecast) -> Result<WeatherSnapshot, ForecastError> {
    let max = day.max_temperature_c.ok_or(ForecastError::MissingField("TX_C"))?;
    let min = day.min_temperature_c.ok_or(ForecastError::MissingField("TN_C"))?;
    let symbol_code = day.symbol_code.ok_or(ForecastError::MissingField("symbol_code"))?;
    let time = day.date_time.clone().ok_or(ForecastError::MissingField("date_time"))?;

    Ok(WeatherSnapshot {
        temperature: (max + min) / 2.0,
        weather_type: determine_weather_type(symbol_code.round() as i32),
        time,
    })
}

/// Bucket timestamps are RFC 3339, either with an offset or a trailing `Z`
fn parse_bucket_time(raw: &str) -> Result<DateTime<Utc>, ForecastError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ForecastError::InvalidTimestamp(raw.to_string()))
}
