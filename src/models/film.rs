use serde::{Deserialize, Serialize};

/// A film referenced by URL from a person record.
///
/// Fetched independently per URL; only the title is displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    #[serde(default)]
    pub title: String,
    /// Position in the saga, as sent by the server
    #[serde(default)]
    pub episode_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_deserializes_title() {
        let json = r#"{"title": "A New Hope", "episode_id": 4, "director": "George Lucas"}"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.episode_id, 4);
    }
}
