use serde::Deserialize;

use super::pricing::SitterRates;

/// Draft booking as filled in on the booking form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub price_per_day: Option<f64>,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
}

impl QuoteRequest {
    pub fn rates(&self) -> SitterRates {
        SitterRates {
            per_day: self.price_per_day,
            per_hour: self.price_per_hour,
        }
    }
}
