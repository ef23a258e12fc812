//! Embedded reference datasets
//!
//! The dashboard ships with a fixed historical table so it can forecast
//! without any backend. Everything here is built once per call and never
//! mutated afterwards.

use crate::forecast::domains::{HUMIDITY, HUMIDITY_RANGE, RAINFALL, RAINFALL_RANGE};
use crate::models::{HistoricalSeries, Location, LocationRegistry, Observation, Reading};
use crate::types::round_to;

/// Location label for readings that aggregate every city
pub const ALL_CITIES: &str = "All Cities";

/// Monthly AQI, January 2020 to February 2025
const AIR_QUALITY_TABLE: [(i32, u32, f64); 62] = [
    // 2020
    (2020, 1, 142.0),
    (2020, 2, 135.0),
    (2020, 3, 98.0),
    (2020, 4, 72.0),
    (2020, 5, 65.0),
    (2020, 6, 78.0),
    (2020, 7, 85.0),
    (2020, 8, 82.0),
    (2020, 9, 68.0),
    (2020, 10, 88.0),
    (2020, 11, 125.0),
    (2020, 12, 148.0),
    // 2021
    (2021, 1, 155.0),
    (2021, 2, 138.0),
    (2021, 3, 95.0),
    (2021, 4, 68.0),
    (2021, 5, 58.0),
    (2021, 6, 72.0),
    (2021, 7, 88.0),
    (2021, 8, 79.0),
    (2021, 9, 62.0),
    (2021, 10, 85.0),
    (2021, 11, 118.0),
    (2021, 12, 142.0),
    // 2022
    (2022, 1, 148.0),
    (2022, 2, 132.0),
    (2022, 3, 92.0),
    (2022, 4, 65.0),
    (2022, 5, 55.0),
    (2022, 6, 68.0),
    (2022, 7, 82.0),
    (2022, 8, 75.0),
    (2022, 9, 58.0),
    (2022, 10, 78.0),
    (2022, 11, 112.0),
    (2022, 12, 138.0),
    // 2023
    (2023, 1, 145.0),
    (2023, 2, 128.0),
    (2023, 3, 88.0),
    (2023, 4, 62.0),
    (2023, 5, 52.0),
    (2023, 6, 65.0),
    (2023, 7, 78.0),
    (2023, 8, 72.0),
    (2023, 9, 55.0),
    (2023, 10, 72.0),
    (2023, 11, 108.0),
    (2023, 12, 132.0),
    // 2024
    (2024, 1, 140.0),
    (2024, 2, 125.0),
    (2024, 3, 85.0),
    (2024, 4, 58.0),
    (2024, 5, 48.0),
    (2024, 6, 62.0),
    (2024, 7, 75.0),
    (2024, 8, 68.0),
    (2024, 9, 52.0),
    (2024, 10, 68.0),
    (2024, 11, 102.0),
    (2024, 12, 128.0),
    // 2025
    (2025, 1, 135.0),
    (2025, 2, 120.0),
];

const WEATHER_FIRST_YEAR: i32 = 2020;
const WEATHER_LAST_YEAR: i32 = 2025;
/// °C added per year since the first year
const WARMING_PER_YEAR: f64 = 0.15;

const MONTHLY_TEMPERATURE: [f64; 12] = [
    18.0, 21.0, 26.0, 32.0, 36.0, 34.0, 30.0, 29.0, 30.0, 28.0, 23.0, 19.0,
];
const MONTHLY_HUMIDITY: [f64; 12] = [
    55.0, 45.0, 35.0, 30.0, 35.0, 55.0, 75.0, 80.0, 75.0, 60.0, 50.0, 55.0,
];
const MONTHLY_RAINFALL: [f64; 12] = [
    15.0, 10.0, 8.0, 5.0, 15.0, 120.0, 280.0, 260.0, 150.0, 40.0, 10.0, 8.0,
];

struct CityProfile {
    id: &'static str,
    name: &'static str,
    aqi_adjustment: f64,
    temperature_adjustment: f64,
    aqi_description: &'static str,
    climate_description: &'static str,
}

const CITIES: [CityProfile; 3] = [
    CityProfile {
        id: "delhi",
        name: "Delhi",
        aqi_adjustment: 45.0,
        temperature_adjustment: 2.0,
        aqi_description: "High pollution from traffic and industry",
        climate_description: "Landlocked capital with hot summers and dry winters",
    },
    CityProfile {
        id: "mumbai",
        name: "Mumbai",
        aqi_adjustment: 30.0,
        temperature_adjustment: -2.0,
        aqi_description: "Coastal city with industrial and vehicular pollution",
        climate_description: "Coastal city with humid, moderated temperatures",
    },
    CityProfile {
        id: "bengaluru",
        name: "Bengaluru",
        aqi_adjustment: 15.0,
        temperature_adjustment: -4.0,
        aqi_description: "IT hub with growing traffic congestion",
        climate_description: "Plateau city kept cooler by its elevation",
    },
];

const REGION: &str = "India";

/// Raw AQI readings, tagged with [`ALL_CITIES`]
pub fn air_quality_readings() -> Vec<Reading> {
    AIR_QUALITY_TABLE
        .iter()
        .map(|&(year, month, value)| Reading {
            location: ALL_CITIES.to_string(),
            year,
            month,
            value,
        })
        .collect()
}

pub fn air_quality_series() -> HistoricalSeries {
    HistoricalSeries {
        observations: AIR_QUALITY_TABLE
            .iter()
            .map(|&(year, month, value)| Observation::new(year, month, value))
            .collect(),
    }
}

/// Monthly temperature with humidity and rainfall as secondaries
pub fn weather_series() -> HistoricalSeries {
    let observations = (WEATHER_FIRST_YEAR..=WEATHER_LAST_YEAR)
        .flat_map(|year| {
            let offset = (year - WEATHER_FIRST_YEAR) as f64 * WARMING_PER_YEAR;
            (1..=12u32).map(move |month| {
                let idx = (month - 1) as usize;
                Observation::new(year, month, round_to(MONTHLY_TEMPERATURE[idx] + offset, 1))
                    .with_secondary(HUMIDITY, HUMIDITY_RANGE.clamp(MONTHLY_HUMIDITY[idx]))
                    .with_secondary(RAINFALL, RAINFALL_RANGE.clamp(MONTHLY_RAINFALL[idx]))
            })
        })
        .collect();

    HistoricalSeries { observations }
}

/// Locations with their AQI offsets
pub fn air_quality_locations() -> LocationRegistry {
    LocationRegistry::new(
        CITIES
            .iter()
            .map(|city| Location {
                id: city.id.to_string(),
                display_name: city.name.to_string(),
                region: REGION.to_string(),
                adjustment: city.aqi_adjustment,
                description: city.aqi_description.to_string(),
            })
            .collect(),
    )
}

/// Locations with their temperature offsets
pub fn weather_locations() -> LocationRegistry {
    LocationRegistry::new(
        CITIES
            .iter()
            .map(|city| Location {
                id: city.id.to_string(),
                display_name: city.name.to_string(),
                region: REGION.to_string(),
                adjustment: city.temperature_adjustment,
                description: city.climate_description.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_quality_series_is_valid() {
        let series = air_quality_series();
        assert_eq!(series.len(), 62);
        assert_eq!(series.distinct_years(), (2020..=2025).collect::<Vec<_>>());
        assert_eq!(HistoricalSeries::new(series.observations().to_vec()), Ok(series));
    }

    #[test]
    fn test_weather_series_has_secondaries() {
        let series = weather_series();
        assert_eq!(series.len(), 72);
        assert!(series
            .observations()
            .iter()
            .all(|o| o.secondary.contains_key(HUMIDITY) && o.secondary.contains_key(RAINFALL)));
        assert_eq!(series.observations()[24].primary, 18.3);
    }

    #[test]
    fn test_registries_share_ids() {
        let aqi = air_quality_locations();
        let weather = weather_locations();
        assert_eq!(aqi.len(), 3);
        for location in aqi.iter() {
            assert!(weather.get(&location.id).is_some());
        }
        assert_eq!(aqi.get("delhi").map(|l| l.adjustment), Some(45.0));
        assert_eq!(weather.get("bengaluru").map(|l| l.adjustment), Some(-4.0));
    }
}
