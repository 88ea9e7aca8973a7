use serde::{Deserialize, Serialize};

/// One person record from the list endpoint.
///
/// Only the fields the table and detail panel consume are modeled; the
/// server sends many more, which serde drops. `url` doubles as the record's
/// identity and its canonical detail link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Display name, also the filter/sort field
    #[serde(default)]
    pub name: String,
    /// Height in centimeters (server sends it as a string, e.g. "172" or "unknown")
    #[serde(default)]
    pub height: String,
    /// Mass in kilograms, same string convention as `height`
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub hair_color: String,
    /// Canonical URL of this record
    #[serde(default)]
    pub url: String,
    /// URLs of the films this person appears in, in canonical order
    #[serde(default)]
    pub films: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_deserializes_known_fields() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "gender": "male",
            "hair_color": "blond",
            "url": "https://swapi.dev/api/people/1/",
            "films": ["https://swapi.dev/api/films/1/"]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Luke Skywalker");
        assert_eq!(person.height, "172");
        assert_eq!(person.films.len(), 1);
    }

    #[test]
    fn test_person_ignores_unknown_fields() {
        let json = r#"{
            "name": "R2-D2",
            "eye_color": "red",
            "starships": [],
            "created": "2014-12-10T15:11:50.376000Z"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "R2-D2");
        assert!(person.films.is_empty());
    }

    #[test]
    fn test_person_missing_fields_default_to_empty() {
        let person: Person = serde_json::from_str("{}").unwrap();
        assert!(person.name.is_empty());
        assert!(person.url.is_empty());
        assert!(person.films.is_empty());
    }
}
