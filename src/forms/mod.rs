//! Typed form submissions.
//!
//! Handlers decode request bodies into [`FormData`] and hand it to the
//! per-entity submission structs. Each submission keeps the raw strings so
//! a failed form can be re-rendered as the user typed it, and `validate`
//! runs every check before returning, never touching the store.

mod artist;
mod show;
mod venue;

pub use artist::{ArtistFields, ArtistForm};
pub use show::{NewShow, ShowForm};
pub use venue::{VenueFields, VenueForm};

use std::collections::BTreeMap;

use thiserror::Error;

use crate::db::enums::Genre;

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

const REQUIRED: &str = "This field is required.";

/// Decoded `application/x-www-form-urlencoded` body, repeated keys kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted for `name`, in submission order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    fn list(&self, name: &str) -> Vec<String> {
        self.get_all(name)
            .into_iter()
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Seeking flags are only set by an explicit `yes`.
    fn flag(&self, name: &str) -> bool {
        self.get(name) == Some("yes")
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Validation messages keyed by form field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded.
    fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn required(errors: &mut FieldErrors, field: &'static str, raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn check_state(errors: &mut FieldErrors, state: &str) {
    if !state.is_empty() && !STATES.contains(&state) {
        errors.add("state", "Not a valid choice.");
    }
}

fn check_genres(errors: &mut FieldErrors, genres: &[String]) {
    for genre in genres {
        if Genre::from_str(genre).is_none() {
            errors.add("genres", format!("'{}' is not a valid genre.", genre));
        }
    }
}

fn check_url(errors: &mut FieldErrors, field: &'static str, value: &Option<String>) {
    if let Some(url) = value {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        if !matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace)) {
            errors.add(field, "Invalid URL.");
        }
    }
}

fn check_phone(errors: &mut FieldErrors, value: &Option<String>) {
    if let Some(phone) = value {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')' | '+');
        if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
            errors.add("phone", "Invalid phone number.");
        }
    }
}

/// The description only survives while the seeking flag is set.
fn seeking_description(seeking: bool, raw: &str) -> String {
    if seeking {
        raw.trim().to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_get_returns_first_value() {
        let data = form(&[("name", "first"), ("name", "second")]);
        assert_eq!(data.get("name"), Some("first"));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn test_get_all_keeps_submission_order() {
        let data = form(&[("genres", "Jazz"), ("name", "x"), ("genres", "Blues")]);
        assert_eq!(data.get_all("genres"), vec!["Jazz", "Blues"]);
        assert!(data.get_all("other").is_empty());
    }

    #[test]
    fn test_flag_requires_yes() {
        assert!(form(&[("seeking_talent", "yes")]).flag("seeking_talent"));
        assert!(!form(&[("seeking_talent", "y")]).flag("seeking_talent"));
        assert!(!form(&[]).flag("seeking_talent"));
    }

    #[test]
    fn test_check_url() {
        let mut errors = FieldErrors::default();
        check_url(&mut errors, "website", &Some("https://example.com".to_string()));
        check_url(&mut errors, "image_link", &None);
        assert!(errors.is_empty());

        check_url(&mut errors, "website", &Some("example.com".to_string()));
        check_url(&mut errors, "facebook_link", &Some("http://".to_string()));
        assert!(errors.contains("website"));
        assert!(errors.contains("facebook_link"));
    }

    #[test]
    fn test_check_phone() {
        let mut errors = FieldErrors::default();
        check_phone(&mut errors, &Some("(415) 555-0100".to_string()));
        assert!(errors.is_empty());

        check_phone(&mut errors, &Some("call me".to_string()));
        assert_eq!(errors.get("phone"), &["Invalid phone number.".to_string()]);
    }
}
