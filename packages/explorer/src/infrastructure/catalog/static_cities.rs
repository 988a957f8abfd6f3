//! Built-in city list.

use std::sync::LazyLock;

use crate::domain::{City, CityId, Coordinates};

const ENTRIES: [(&str, &str, f64, f64); 20] = [
    ("Tokyo", "Japan", 35.6762, 139.6503),
    ("New York", "USA", 40.7128, -74.006),
    ("London", "UK", 51.5074, -0.1278),
    ("Paris", "France", 48.8566, 2.3522),
    ("Sydney", "Australia", -33.8688, 151.2093),
    ("Dubai", "UAE", 25.2048, 55.2708),
    ("Singapore", "Singapore", 1.3521, 103.8198),
    ("Mumbai", "India", 19.076, 72.8777),
    ("Cairo", "Egypt", 30.0444, 31.2357),
    ("Rio de Janeiro", "Brazil", -22.9068, -43.1729),
    ("Moscow", "Russia", 55.7558, 37.6173),
    ("Bangkok", "Thailand", 13.7563, 100.5018),
    ("Istanbul", "Turkey", 41.0082, 28.9784),
    ("Cape Town", "South Africa", -33.9249, 18.4241),
    ("Buenos Aires", "Argentina", -34.6118, -58.396),
    ("Toronto", "Canada", 43.6532, -79.3832),
    ("Berlin", "Germany", 52.52, 13.405),
    ("Seoul", "South Korea", 37.5665, 126.978),
    ("Lagos", "Nigeria", 6.5244, 3.3792),
    ("Mexico City", "Mexico", 19.4326, -99.1332),
];

/// Built-in cities, ids 1..=20 in list order. Read-only for the program's lifetime.
pub static CITIES: LazyLock<Vec<City>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .zip(1u32..)
        .map(|(&(name, country, latitude, longitude), id)| {
            City::new(
                CityId::new(id),
                name,
                country,
                Coordinates::new(latitude, longitude),
            )
        })
        .collect()
});

/// Owned copy of the built-in list, for building a directory.
pub fn static_cities() -> Vec<City> {
    CITIES.clone()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_twenty_cities_starting_with_tokyo() {
        // テスト項目: カタログは20都市で、先頭は Tokyo
        // given (前提条件) / when (操作):
        let cities = &*CITIES;

        // then (期待する結果):
        assert_eq!(cities.len(), 20);
        assert_eq!(cities[0].name, "Tokyo");
        assert_eq!(cities[0].id, CityId::new(1));
        assert_eq!(cities[19].name, "Mexico City");
        assert_eq!(cities[19].id, CityId::new(20));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        // テスト項目: 都市 ID は重複しない
        // given (前提条件):
        let cities = static_cities();

        // when (操作):
        let ids: HashSet<CityId> = cities.iter().map(|city| city.id).collect();

        // then (期待する結果):
        assert_eq!(ids.len(), cities.len());
    }
}
