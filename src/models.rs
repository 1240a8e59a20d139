use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::aqi::{AqiCategory, classify};

/// 每条读数的历史采样数
pub const HISTORY_LEN: usize = 12;

/// 天气图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Rain,
}

impl WeatherIcon {
    /// 根据天气描述选择图标，按 Sunny / Rain / Cloud 顺序匹配
    pub fn from_label(weather: &str) -> Self {
        if weather.contains("Sunny") {
            WeatherIcon::Sun
        } else if weather.contains("Rain") {
            WeatherIcon::Rain
        } else if weather.contains("Cloud") {
            WeatherIcon::Cloud
        } else {
            WeatherIcon::Sun
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::Rain => "☂",
        }
    }
}

/// 单个城市的空气质量与天气快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub city: String,
    pub country: String,
    pub aqi: i32,
    pub temperature: i32,
    pub humidity: u8,
    pub weather: String,
    pub pm25: u32,
    #[serde(default)]
    pub history: Vec<u32>, // 最近的 AQI 采样，旧 -> 新
    #[serde(default = "Local::now")]
    pub observed_at: DateTime<Local>,
}

impl AirQualityReading {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        aqi: i32,
        temperature: i32,
        humidity: u8,
        weather: impl Into<String>,
        pm25: u32,
        history: Vec<u32>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            aqi,
            temperature,
            humidity,
            weather: weather.into(),
            pm25,
            history,
            observed_at: Local::now(),
        }
    }

    pub fn category(&self) -> AqiCategory {
        classify(self.aqi)
    }

    pub fn weather_icon(&self) -> WeatherIcon {
        WeatherIcon::from_label(&self.weather)
    }
}

/// 内置的演示城市
pub fn seed_readings() -> Vec<AirQualityReading> {
    vec![
        AirQualityReading::new(
            "Jakarta",
            "Indonesia",
            95,
            28,
            75,
            "Partly Cloudy",
            35,
            vec![85, 88, 92, 89, 95, 97, 93, 91, 95, 98, 96, 95],
        ),
        AirQualityReading::new(
            "Bangkok",
            "Thailand",
            142,
            32,
            68,
            "Sunny",
            55,
            vec![145, 148, 142, 139, 142, 144, 140, 138, 142, 146, 143, 142],
        ),
        AirQualityReading::new(
            "Singapore",
            "Singapore",
            38,
            29,
            82,
            "Light Rain",
            15,
            vec![42, 40, 38, 35, 38, 41, 39, 37, 38, 40, 39, 38],
        ),
    ]
}

/// 会话内的读数列表，最新的在最前
#[derive(Debug, Clone, Default)]
pub struct ReadingList {
    readings: Vec<AirQualityReading>,
}

impl ReadingList {
    pub fn new(seed: Vec<AirQualityReading>) -> Self {
        Self { readings: seed }
    }

    /// 插入到列表头部
    pub fn prepend(&mut self, reading: AirQualityReading) {
        self.readings.insert(0, reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AirQualityReading> {
        self.readings.get(index)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &AirQualityReading> {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_readings() {
        let seed = seed_readings();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].city, "Jakarta");
        assert_eq!(seed[1].category(), AqiCategory::UnhealthyForSensitive);
        assert_eq!(seed[2].category(), AqiCategory::Good);
        assert!(seed.iter().all(|r| r.history.len() == 12));
    }

    #[test]
    fn test_weather_icon() {
        assert_eq!(WeatherIcon::from_label("Sunny"), WeatherIcon::Sun);
        assert_eq!(WeatherIcon::from_label("Light Rain"), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_label("Partly Cloudy"), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::from_label("Fog"), WeatherIcon::Sun);
        // Sunny 优先于 Cloud
        assert_eq!(WeatherIcon::from_label("Sunny, Cloudy later"), WeatherIcon::Sun);
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut list = ReadingList::new(seed_readings());
        let reading = AirQualityReading::new("Hanoi", "Vietnam", 160, 30, 70, "Cloudy", 70, vec![1]);
        list.prepend(reading.clone());

        assert_eq!(list.len(), 4);
        assert_eq!(list.get(0), Some(&reading));
        assert_eq!(list.get(1).map(|r| r.city.as_str()), Some("Jakarta"));
    }

    #[test]
    fn test_empty_list() {
        let list = ReadingList::default();
        assert!(list.is_empty());
        assert!(list.get(0).is_none());
        assert_eq!(list.iter().count(), 0);
    }
}
