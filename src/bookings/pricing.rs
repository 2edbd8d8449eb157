use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateField::Start => "start",
            DateField::End => "end",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: DateField, value: String },
    #[error("end must be after start")]
    InvalidRange,
    #[error("unknown service: {0:?}")]
    UnknownService(String),
}

/// Kind of pet-sitting engagement. Walks and visits are billed per hour,
/// everything else per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "garde_domicile")]
    HomeSitting,
    #[serde(rename = "garde_chez_sitter")]
    SitterHomeSitting,
    #[serde(rename = "promenade")]
    Walk,
    #[serde(rename = "visite")]
    Visit,
    #[serde(rename = "toilettage")]
    Grooming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    PerDay,
    PerHour,
}

impl ServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::HomeSitting => "garde_domicile",
            ServiceKind::SitterHomeSitting => "garde_chez_sitter",
            ServiceKind::Walk => "promenade",
            ServiceKind::Visit => "visite",
            ServiceKind::Grooming => "toilettage",
        }
    }

    pub fn billing(self) -> Billing {
        match self {
            ServiceKind::Walk | ServiceKind::Visit => Billing::PerHour,
            ServiceKind::HomeSitting | ServiceKind::SitterHomeSitting | ServiceKind::Grooming => {
                Billing::PerDay
            }
        }
    }
}

impl FromStr for ServiceKind {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "garde_domicile" => Ok(ServiceKind::HomeSitting),
            "garde_chez_sitter" => Ok(ServiceKind::SitterHomeSitting),
            "promenade" => Ok(ServiceKind::Walk),
            "visite" => Ok(ServiceKind::Visit),
            "toilettage" => Ok(ServiceKind::Grooming),
            other => Err(BookingError::UnknownService(other.to_string())),
        }
    }
}

/// A booking boundary as sent by the client.
///
/// Keeps the exact instant for the ordering check and the calendar date
/// (in the input's own offset) for the day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDate {
    instant: OffsetDateTime,
}

impl BookingDate {
    /// Accepts `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]`
    /// read as UTC.
    pub fn parse(raw: &str, field: DateField) -> Result<Self, BookingError> {
        let raw = raw.trim();
        let date_only = format_description!("[year]-[month]-[day]");
        let naive_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        let naive_minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");

        let instant = Date::parse(raw, date_only)
            .map(|d| d.midnight().assume_utc())
            .or_else(|_| OffsetDateTime::parse(raw, &Rfc3339))
            .or_else(|_| PrimitiveDateTime::parse(raw, naive_seconds).map(|dt| dt.assume_utc()))
            .or_else(|_| PrimitiveDateTime::parse(raw, naive_minutes).map(|dt| dt.assume_utc()))
            .map_err(|_| BookingError::InvalidDate {
                field,
                value: raw.to_string(),
            })?;

        Ok(Self { instant })
    }

    pub fn instant(&self) -> OffsetDateTime {
        self.instant
    }

    /// The date with the time of day dropped.
    pub fn calendar_date(&self) -> Date {
        self.instant.date()
    }
}

/// Number of billable days between two boundaries.
///
/// `end` must be strictly after `start`. The count is taken on calendar
/// dates and never goes below 1, so two instants on the same day bill one
/// day.
pub fn duration_between(start: BookingDate, end: BookingDate) -> Result<u32, BookingError> {
    if end.instant <= start.instant {
        return Err(BookingError::InvalidRange);
    }
    let days = (end.calendar_date() - start.calendar_date()).whole_days().max(1);
    Ok(u32::try_from(days).unwrap_or(u32::MAX))
}

pub fn compute_duration(start: &str, end: &str) -> Result<u32, BookingError> {
    let start = BookingDate::parse(start, DateField::Start)?;
    let end = BookingDate::parse(end, DateField::End)?;
    duration_between(start, end)
}

/// Rates advertised by a sitter. Either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitterRates {
    #[serde(default)]
    pub per_day: Option<f64>,
    #[serde(default)]
    pub per_hour: Option<f64>,
}

/// The rate that applies to `service`, or `None` if the sitter has not set it.
pub fn compute_unit_price(service: ServiceKind, rates: &SitterRates) -> Option<f64> {
    match service.billing() {
        Billing::PerHour => rates.per_hour,
        Billing::PerDay => rates.per_day,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteOptions {
    /// Stand-in for a missing rate when computing the total.
    pub missing_price: f64,
    /// Round the total half away from zero to two decimals.
    pub round_to_cents: bool,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            missing_price: 0.0,
            round_to_cents: false,
        }
    }
}

/// Advisory price estimate shown before a booking is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub service: ServiceKind,
    pub billing: Billing,
    pub duration_units: u32,
    pub unit_price: Option<f64>,
    pub price_missing: bool,
    pub total: f64,
}

pub fn quote(
    start: &str,
    end: &str,
    service: ServiceKind,
    rates: &SitterRates,
    options: &QuoteOptions,
) -> Result<Quote, BookingError> {
    let duration_units = compute_duration(start, end)?;
    let unit_price = compute_unit_price(service, rates);
    let mut total = f64::from(duration_units) * unit_price.unwrap_or(options.missing_price);
    if options.round_to_cents {
        total = round_cents(total);
    }

    Ok(Quote {
        service,
        billing: service.billing(),
        duration_units,
        unit_price,
        price_missing: unit_price.is_none(),
        total,
    })
}

pub fn compute_total(
    start: &str,
    end: &str,
    service: ServiceKind,
    rates: &SitterRates,
    options: &QuoteOptions,
) -> Result<f64, BookingError> {
    quote(start, end, service, rates, options).map(|q| q.total)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
