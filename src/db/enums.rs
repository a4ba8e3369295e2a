use serde::{Deserialize, Serialize};

/// Genres offered by the venue and artist forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RhythmAndBlues,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RhythmAndBlues,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RhythmAndBlues => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == s)
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> String {
        genre.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_matches_display_names() {
        assert_eq!(Genre::from_str("Hip-Hop"), Some(Genre::HipHop));
        assert_eq!(Genre::from_str("R&B"), Some(Genre::RhythmAndBlues));
        assert_eq!(Genre::from_str("hip-hop"), None);
        assert_eq!(Genre::from_str(""), None);
    }

    #[test]
    fn test_names_never_contain_delimiter() {
        for genre in Genre::ALL {
            assert!(!genre.as_str().contains(crate::db::genres::DELIMITER));
        }
    }
}
