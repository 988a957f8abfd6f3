//! Weather snapshot values.

use std::{fmt, ops::RangeInclusive};

use serde::Serialize;

/// Temperature range in °C
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 5..=39;

/// Relative humidity range in %
pub const HUMIDITY_RANGE: RangeInclusive<i32> = 40..=79;

/// Wind speed range in km/h
pub const WIND_SPEED_RANGE: RangeInclusive<i32> = 5..=24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Snowy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::Cloudy => "☁️",
            WeatherCondition::Rainy => "🌧️",
            WeatherCondition::Snowy => "❄️",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of made-up weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: i32,
    pub condition: WeatherCondition,
    pub humidity_percent: i32,
    pub wind_speed_kmh: i32,
}

/// Today and tomorrow, sampled together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherForecast {
    pub today: WeatherSnapshot,
    pub tomorrow: WeatherSnapshot,
}
