use crate::models::WeatherType;

/// Map an SRF Meteo symbol code to a weather category
///
/// The sign of the code only distinguishes day from night, so the magnitude
/// alone decides the category. Snow codes fold into rain and unknown codes
/// fall back to cloudy.
pub fn determine_weather_type(symbol_code: i32) -> WeatherType {
    match symbol_code.unsigned_abs() {
        // sunny, clear
        1 | 10 => WeatherType::Clear,
        3 => WeatherType::PartlyCloudy,
        // overcast
        19 => WeatherType::Cloudy,
        // rain, sleet, showers, thunder showers
        20 | 22 | 4 | 5 | 25 => WeatherType::Rain,
        // snowfall, snow showers, sleet showers
        21 | 6 | 8 => WeatherType::Rain,
        // fog banks, fog
        2 | 17 => WeatherType::Fog,
        _ => WeatherType::Cloudy,
    }
}
