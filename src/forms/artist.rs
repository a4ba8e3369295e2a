use super::{
    check_genres, check_phone, check_state, check_url, optional, required, seeking_description,
    FieldErrors, FormData,
};
use crate::db::entities::artist;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            genres: data.list("genres"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website: data.text("website"),
            seeking_venue: data.flag("seeking_venue"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_model(model: &artist::Model) -> Self {
        Self {
            name: model.name.clone(),
            city: model.city.clone(),
            state: model.state.clone(),
            phone: model.phone.clone().unwrap_or_default(),
            genres: model.genre_list(),
            image_link: model.image_link.clone().unwrap_or_default(),
            facebook_link: model.facebook_link.clone().unwrap_or_default(),
            website: model.website.clone().unwrap_or_default(),
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description.clone(),
        }
    }

    pub fn validate(&self) -> Result<ArtistFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", &self.name);
        let city = required(&mut errors, "city", &self.city);
        let state = required(&mut errors, "state", &self.state);
        check_state(&mut errors, &state);

        let phone = optional(&self.phone);
        check_phone(&mut errors, &phone);

        check_genres(&mut errors, &self.genres);

        let image_link = optional(&self.image_link);
        let facebook_link = optional(&self.facebook_link);
        let website = optional(&self.website);
        check_url(&mut errors, "image_link", &image_link);
        check_url(&mut errors, "facebook_link", &facebook_link);
        check_url(&mut errors, "website", &website);

        errors.finish(ArtistFields {
            name,
            city,
            state,
            phone,
            genres: self.genres.clone(),
            image_link,
            facebook_link,
            website,
            seeking_venue: self.seeking_venue,
            seeking_description: seeking_description(
                self.seeking_venue,
                &self.seeking_description,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> ArtistForm {
        ArtistForm::from_form_data(&FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_seeking_venue_not_yes_clears_description() {
        let fields = form(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("seeking_venue", "no"),
            ("seeking_description", "Looking for shows"),
        ])
        .validate()
        .unwrap();

        assert!(!fields.seeking_venue);
        assert_eq!(fields.seeking_description, "");
    }

    #[test]
    fn test_invalid_links_reported_per_field() {
        let errors = form(&[
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "NY"),
            ("image_link", "not a url"),
            ("facebook_link", "facebook.com/mattquevedo"),
        ])
        .validate()
        .unwrap_err();

        assert!(errors.contains("image_link"));
        assert!(errors.contains("facebook_link"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_missing_state() {
        let errors = form(&[("name", "The Wild Sax Band"), ("city", "San Francisco")])
            .validate()
            .unwrap_err();

        assert!(errors.contains("state"));
        assert_eq!(errors.len(), 1);
    }
}
