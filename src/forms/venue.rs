use super::{
    check_genres, check_phone, check_state, check_url, optional, required, seeking_description,
    FieldErrors, FormData,
};
use crate::db::entities::venue;

/// Raw venue submission, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Validated venue columns, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website: data.text("website"),
            genres: data.list("genres"),
            seeking_talent: data.flag("seeking_talent"),
            seeking_description: data.text("seeking_description"),
        }
    }

    /// Prefill for the edit page.
    pub fn from_model(model: &venue::Model) -> Self {
        Self {
            name: model.name.clone(),
            city: model.city.clone(),
            state: model.state.clone(),
            address: model.address.clone().unwrap_or_default(),
            phone: model.phone.clone().unwrap_or_default(),
            image_link: model.image_link.clone().unwrap_or_default(),
            facebook_link: model.facebook_link.clone().unwrap_or_default(),
            website: model.website.clone().unwrap_or_default(),
            genres: model.genre_list(),
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description.clone(),
        }
    }

    pub fn validate(&self) -> Result<VenueFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", &self.name);
        let city = required(&mut errors, "city", &self.city);
        let state = required(&mut errors, "state", &self.state);
        check_state(&mut errors, &state);

        let phone = optional(&self.phone);
        check_phone(&mut errors, &phone);

        let image_link = optional(&self.image_link);
        let facebook_link = optional(&self.facebook_link);
        let website = optional(&self.website);
        check_url(&mut errors, "image_link", &image_link);
        check_url(&mut errors, "facebook_link", &facebook_link);
        check_url(&mut errors, "website", &website);

        check_genres(&mut errors, &self.genres);

        errors.finish(VenueFields {
            name,
            city,
            state,
            address: optional(&self.address),
            phone,
            image_link,
            facebook_link,
            website,
            genres: self.genres.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: seeking_description(
                self.seeking_talent,
                &self.seeking_description,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fillmore(extra: &[(&str, &str)]) -> FormData {
        let mut pairs = vec![
            ("name".to_string(), "The Fillmore".to_string()),
            ("city".to_string(), "SF".to_string()),
            ("state".to_string(), "CA".to_string()),
        ];
        pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        FormData::new(pairs)
    }

    #[test]
    fn test_seeking_talent_keeps_description() {
        let data = fillmore(&[
            ("seeking_talent", "yes"),
            ("seeking_description", "Looking for rock bands"),
        ]);

        let fields = VenueForm::from_form_data(&data).validate().unwrap();

        assert!(fields.seeking_talent);
        assert_eq!(fields.seeking_description, "Looking for rock bands");
    }

    #[test]
    fn test_missing_seeking_flag_clears_description() {
        let data = fillmore(&[("seeking_description", "Looking for rock bands")]);

        let fields = VenueForm::from_form_data(&data).validate().unwrap();

        assert!(!fields.seeking_talent);
        assert_eq!(fields.seeking_description, "");
    }

    #[test]
    fn test_genres_keep_submission_order() {
        let data = fillmore(&[("genres", "Rock n Roll"), ("genres", "Jazz"), ("genres", "Folk")]);

        let fields = VenueForm::from_form_data(&data).validate().unwrap();

        assert_eq!(fields.genres, vec!["Rock n Roll", "Jazz", "Folk"]);
    }

    #[test]
    fn test_no_genres_is_valid() {
        let fields = VenueForm::from_form_data(&fillmore(&[])).validate().unwrap();
        assert!(fields.genres.is_empty());
    }

    #[test]
    fn test_required_fields_reported_together() {
        let data = FormData::new(vec![("address".to_string(), "1805 Geary Blvd".to_string())]);

        let errors = VenueForm::from_form_data(&data).validate().unwrap_err();

        assert!(errors.contains("name"));
        assert!(errors.contains("city"));
        assert!(errors.contains("state"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_blank_name_is_missing() {
        let mut form = VenueForm::from_form_data(&fillmore(&[]));
        form.name = "   ".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), &["This field is required.".to_string()]);
    }

    #[test]
    fn test_rejects_unknown_state_and_genre() {
        let mut form = VenueForm::from_form_data(&fillmore(&[("genres", "Polka")]));
        form.state = "ZZ".to_string();

        let errors = form.validate().unwrap_err();
        assert!(errors.contains("state"));
        assert!(errors.contains("genres"));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let data = fillmore(&[("address", "  "), ("website", "")]);

        let fields = VenueForm::from_form_data(&data).validate().unwrap();

        assert_eq!(fields.address, None);
        assert_eq!(fields.website, None);
    }
}
