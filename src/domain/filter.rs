//! Search and founding-year filtering over the club list.

use crate::domain::club::Club;

/// Search and year constraints applied to the club list.
///
/// The search term is stored lower-cased. Year bounds are inclusive and
/// compared against [`Club::founded`] as is, so a club with an unknown
/// founding year (`0`) fails any positive minimum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClubFilter {
    pub search: String,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

/// Parses a year bound, treating empty or non-numeric input as absent.
fn parse_year(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.parse::<i32>().ok())
}

impl ClubFilter {
    pub fn new(search: impl AsRef<str>) -> Self {
        Self {
            search: search.as_ref().to_lowercase(),
            min_year: None,
            max_year: None,
        }
    }

    /// Builds a filter from raw query-string values.
    pub fn from_params(
        search: Option<&str>,
        min_year: Option<&str>,
        max_year: Option<&str>,
    ) -> Self {
        Self {
            search: search.unwrap_or_default().to_lowercase(),
            min_year: parse_year(min_year),
            max_year: parse_year(max_year),
        }
    }

    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    pub fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    fn matches_search(&self, club: &Club) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let tla = club.tla.as_deref().unwrap_or_default();
        [club.name.as_str(), club.short_name.as_str(), tla]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.search))
    }

    pub fn matches(&self, club: &Club) -> bool {
        if !self.matches_search(club) {
            return false;
        }
        if self.min_year.is_some_and(|min| club.founded < min) {
            return false;
        }
        if self.max_year.is_some_and(|max| club.founded > max) {
            return false;
        }
        true
    }

    /// Returns the matching clubs in their original order.
    pub fn apply(&self, clubs: &[Club]) -> Vec<Club> {
        clubs
            .iter()
            .filter(|club| self.matches(club))
            .cloned()
            .collect()
    }
}
