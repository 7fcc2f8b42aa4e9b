use serde::{Deserialize, Deserializer, Serialize};

/// Football club record as stored in the dataset file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_name: String,
    /// Three-letter code.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub tla: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub website: Option<String>,
    /// Founding year, `0` when unknown.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_unset_year"
    )]
    pub founded: i32,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub crest_url: Option<String>,
}

fn is_unset_year(year: &i32) -> bool {
    *year == 0
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Reads `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Club {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: short_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn founded(mut self, year: i32) -> Self {
        self.founded = year;
        self
    }

    #[must_use]
    pub fn tla(mut self, tla: impl Into<String>) -> Self {
        self.tla = Some(tla.into());
        self
    }

    /// Identifier in the string form used by the favorites cookie.
    pub fn favorite_key(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_dataset_entry() {
        let raw = r#"{
            "id": 57,
            "name": "Arsenal FC",
            "shortName": "Arsenal",
            "tla": "ARS",
            "website": "http://www.arsenal.com",
            "founded": 1886,
            "venue": "Emirates Stadium",
            "crestUrl": "https://crests.football-data.org/57.png"
        }"#;

        let club: Club = serde_json::from_str(raw).unwrap();

        assert_eq!(club.id, 57);
        assert_eq!(club.short_name, "Arsenal");
        assert_eq!(club.tla.as_deref(), Some("ARS"));
        assert_eq!(club.founded, 1886);
        assert_eq!(
            club.crest_url.as_deref(),
            Some("https://crests.football-data.org/57.png")
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let club: Club = serde_json::from_str(r#"{"id": 1, "name": "Nameless"}"#).unwrap();

        assert_eq!(club.short_name, "");
        assert_eq!(club.founded, 0);
        assert!(club.tla.is_none());
        assert!(club.venue.is_none());
    }

    #[test]
    fn null_fields_default() {
        let club: Club = serde_json::from_str(
            r#"{"id": 2, "name": "Aston Villa FC", "shortName": null, "founded": null, "tla": null}"#,
        )
        .unwrap();

        assert_eq!(club.short_name, "");
        assert_eq!(club.founded, 0);
        assert!(club.tla.is_none());
    }

    #[test]
    fn empty_strings_are_omitted_when_serialized() {
        let mut club = Club::new(61, "Chelsea FC", "Chelsea");
        club.website = Some(String::new());
        club.venue = Some("Stamford Bridge".into());

        let value = serde_json::to_value(club).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 61,
                "name": "Chelsea FC",
                "shortName": "Chelsea",
                "venue": "Stamford Bridge"
            })
        );
    }

    #[test]
    fn unset_fields_are_omitted_when_serialized() {
        let value = serde_json::to_value(Club::new(3, "Chelsea FC", "Chelsea")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Chelsea FC", "shortName": "Chelsea"})
        );
    }
}
