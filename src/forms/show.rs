use chrono::NaiveDateTime;

use super::{required, FieldErrors, FormData};
use crate::config::PastShowPolicy;

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Validates the submission. `now` is only consulted when `policy`
    /// rejects past-dated shows.
    pub fn validate(
        &self,
        policy: PastShowPolicy,
        now: NaiveDateTime,
    ) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);

        let raw_start = required(&mut errors, "start_time", &self.start_time);
        let start_time = if raw_start.is_empty() {
            None
        } else {
            let parsed = parse_start_time(&raw_start);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        if let (PastShowPolicy::Reject, Some(start)) = (policy, start_time) {
            if start <= now {
                errors.add("start_time", "Start time must be in the future.");
            }
        }

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<i32> {
    let value = required(errors, field, raw);
    if value.is_empty() {
        return None;
    }
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid id.");
            None
        }
    }
}

pub(crate) fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn form(artist_id: &str, venue_id: &str, start_time: &str) -> ShowForm {
        ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: start_time.to_string(),
        }
    }

    #[test]
    fn test_accepts_supported_formats() {
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(at(2035, 4, 1, 20, 0)));
        assert_eq!(parse_start_time("2035-04-01 20:00"), Some(at(2035, 4, 1, 20, 0)));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(at(2035, 4, 1, 20, 0)));
        assert_eq!(parse_start_time("April 1st"), None);
    }

    #[test]
    fn test_valid_submission() {
        let now = at(2030, 1, 1, 0, 0);
        let show = form("4", "1", "2035-04-01 20:00")
            .validate(PastShowPolicy::Allow, now)
            .unwrap();

        assert_eq!(
            show,
            NewShow {
                artist_id: 4,
                venue_id: 1,
                start_time: at(2035, 4, 1, 20, 0),
            }
        );
    }

    #[test]
    fn test_required_and_type_errors() {
        let errors = form("", "abc", "")
            .validate(PastShowPolicy::Allow, at(2030, 1, 1, 0, 0))
            .unwrap_err();

        assert!(errors.contains("artist_id"));
        assert!(errors.contains("venue_id"));
        assert!(errors.contains("start_time"));
    }

    #[test]
    fn test_past_show_allowed_by_default_policy() {
        let now = at(2030, 1, 1, 0, 0);
        assert!(form("1", "1", "2019-05-21 21:30")
            .validate(PastShowPolicy::Allow, now)
            .is_ok());
    }

    #[test]
    fn test_reject_policy_refuses_past_and_present() {
        let now = at(2030, 1, 1, 0, 0);

        let errors = form("1", "1", "2019-05-21 21:30")
            .validate(PastShowPolicy::Reject, now)
            .unwrap_err();
        assert!(errors.contains("start_time"));

        assert!(form("1", "1", "2030-01-01 00:00")
            .validate(PastShowPolicy::Reject, now)
            .is_err());
        assert!(form("1", "1", "2030-01-01 00:01")
            .validate(PastShowPolicy::Reject, now)
            .is_ok());
    }
}
