//! UseCase: 天気スナップショットの生成
//!
//! 実際の予報ではなく、毎回独立に生成される見せかけの値です。
//! 同じ都市で2回呼んでも結果に関連はありません。

use crate::domain::{
    HUMIDITY_RANGE, RandomSource, TEMPERATURE_RANGE, WIND_SPEED_RANGE, WeatherCondition,
    WeatherForecast, WeatherSnapshot,
};

/// Draws made-up forecasts from a random source
pub struct WeatherSampler {
    random: Box<dyn RandomSource>,
}

impl WeatherSampler {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Sample a fresh (today, tomorrow) pair.
    pub fn sample(&mut self) -> WeatherForecast {
        let forecast = WeatherForecast {
            today: self.sample_day(),
            tomorrow: self.sample_day(),
        };
        tracing::debug!(
            "Sampled weather: today {} {}°C, tomorrow {} {}°C",
            forecast.today.condition,
            forecast.today.temperature_celsius,
            forecast.tomorrow.condition,
            forecast.tomorrow.temperature_celsius
        );
        forecast
    }

    fn sample_day(&mut self) -> WeatherSnapshot {
        let temperature_celsius = self.random.int_in(TEMPERATURE_RANGE);
        let condition =
            WeatherCondition::ALL[self.random.pick_index(WeatherCondition::ALL.len())];
        let humidity_percent = self.random.int_in(HUMIDITY_RANGE);
        let wind_speed_kmh = self.random.int_in(WIND_SPEED_RANGE);
        WeatherSnapshot {
            temperature_celsius,
            condition,
            humidity_percent,
            wind_speed_kmh,
        }
    }
}
