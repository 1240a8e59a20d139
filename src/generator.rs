//! 搜索时生成的模拟读数

use rand::Rng;

use crate::models::{AirQualityReading, HISTORY_LEN};

pub const DEMO_COUNTRY: &str = "Demo Country";
pub const DEMO_WEATHER: &str = "Partly Cloudy";

/// 为搜索的城市名生成一条随机读数
pub fn mock_reading<R: Rng>(city: &str, rng: &mut R) -> AirQualityReading {
    let history = (0..HISTORY_LEN).map(|_| rng.gen_range(20..120)).collect();

    AirQualityReading::new(
        city,
        DEMO_COUNTRY,
        rng.gen_range(20..220),
        rng.gen_range(20..35),
        rng.gen_range(50..80),
        DEMO_WEATHER,
        rng.gen_range(10..60),
        history,
    )
}
