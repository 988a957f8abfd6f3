//! UseCase: 都市の検索

use crate::{
    domain::{City, CityId},
    infrastructure::catalog::static_cities,
};

/// Fixed, ordered list of cities with case-insensitive search
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities: Vec<City>,
}

impl CityDirectory {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Directory over the built-in city list
    pub fn builtin() -> Self {
        Self::new(static_cities())
    }

    pub fn all(&self) -> &[City] {
        &self.cities
    }

    pub fn first(&self) -> Option<&City> {
        self.cities.first()
    }

    /// Cities whose name or country contains `query`, ignoring case.
    ///
    /// Keeps the directory order. An empty query returns every city.
    pub fn filter(&self, query: &str) -> Vec<&City> {
        let query = query.to_lowercase();
        self.cities
            .iter()
            .filter(|city| city.matches(&query))
            .collect()
    }

    pub fn find(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// City whose name equals `name`, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        let name = name.trim().to_lowercase();
        self.cities
            .iter()
            .find(|city| city.name.to_lowercase() == name)
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(cities: &[&'a City]) -> Vec<&'a str> {
        cities.iter().map(|city| city.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        // テスト項目: 空クエリは全都市を元の順序で返す
        // given (前提条件):
        let directory = CityDirectory::builtin();

        // when (操作):
        let result = directory.filter("");

        // then (期待する結果):
        assert_eq!(result.len(), directory.all().len());
        assert!(
            result
                .iter()
                .zip(directory.all())
                .all(|(found, original)| found.id == original.id)
        );
    }

    #[test]
    fn test_filter_matches_name_case_insensitively() {
        // テスト項目: 都市名に大文字小文字を区別せず部分一致する
        // given (前提条件):
        let directory = CityDirectory::builtin();

        // when (操作):
        let result = directory.filter("TO");

        // then (期待する結果):
        assert_eq!(names(&result), vec!["Tokyo", "Cape Town", "Toronto"]);
    }

    #[test]
    fn test_filter_matches_country() {
        // テスト項目: 国名にも部分一致する
        // given (前提条件):
        let directory = CityDirectory::builtin();

        // when (操作):
        let result = directory.filter("south");

        // then (期待する結果):
        assert_eq!(names(&result), vec!["Cape Town", "Seoul"]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        // テスト項目: 一致しないクエリは空の結果を返す
        // given (前提条件):
        let directory = CityDirectory::builtin();

        // when (操作):
        let result = directory.filter("atlantis");

        // then (期待する結果):
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        // テスト項目: 絞り込み結果を同じクエリで再度絞り込んでも変わらない
        // given (前提条件):
        let directory = CityDirectory::builtin();

        for query in ["", "a", "ON", "new", "zz", " "] {
            // when (操作):
            let once: Vec<City> = directory.filter(query).into_iter().cloned().collect();
            let twice = CityDirectory::new(once.clone());
            let twice: Vec<City> = twice.filter(query).into_iter().cloned().collect();

            // then (期待する結果):
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_find_by_id_and_name() {
        // テスト項目: ID と名前で都市を取得できる
        // given (前提条件):
        let directory = CityDirectory::builtin();

        // when (操作):
        let by_id = directory.find(CityId::new(3));
        let by_name = directory.find_by_name("  rio de janeiro ");
        let missing = directory.find(CityId::new(99));

        // then (期待する結果):
        assert_eq!(by_id.map(|city| city.name.as_str()), Some("London"));
        assert_eq!(by_name.map(|city| city.id), Some(CityId::new(10)));
        assert!(missing.is_none());
    }
}
