use serde::Deserialize;

/// SRF Meteo forecast point payload
///
/// Both series are optional; numeric fields are optional as well so that a
/// defect in a bucket that is never selected does not reject the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub hours: Vec<HourForecast>,
    #[serde(default)]
    pub days: Vec<DayForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourForecast {
    pub date_time: String,
    #[serde(rename = "TTT_C")]
    pub temperature_c: Option<f64>,
    pub symbol_code: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayForecast {
    pub date_time: Option<String>,
    #[serde(rename = "TX_C")]
    pub max_temperature_c: Option<f64>,
    #[serde(rename = "TN_C")]
    pub min_temperature_c: Option<f64>,
    pub symbol_code: Option<f64>,
}
