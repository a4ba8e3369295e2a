//! Storage codec for genre lists.
//!
//! Forms carry genres as an ordered list; the tables keep them as one
//! delimited column. `join` and `split` are exact inverses for any list
//! whose items are non-empty and free of the delimiter.

pub const DELIMITER: char = ',';

pub fn join<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

pub fn split(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_preserves_order() {
        let genres = vec!["Rock n Roll".to_string(), "Jazz".to_string(), "Blues".to_string()];
        let stored = join(&genres);

        assert_eq!(stored, "Rock n Roll,Jazz,Blues");
        assert_eq!(split(&stored), genres);
    }

    #[test]
    fn test_empty_list_round_trips_to_empty() {
        let stored = join::<String>(&[]);

        assert_eq!(stored, "");
        assert!(split(&stored).is_empty());
    }

    #[test]
    fn test_single_genre() {
        assert_eq!(split(&join(&["Folk"])), vec!["Folk".to_string()]);
    }
}
