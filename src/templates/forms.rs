//! Form markup. Every field re-renders the submitted value and any
//! validation messages recorded for it.

use maud::{html, Markup};

use crate::db::enums::Genre;
use crate::forms::{ArtistForm, FieldErrors, ShowForm, VenueForm, STATES};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";

fn field_errors(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @for message in errors.get(name) {
            p class="field-error text-sm text-red-600 mt-1" data-field=(name) { (message) }
        }
    }
}

fn text_field(label: &str, name: &str, value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input type="text" id=(name) name=(name) value=(value) class=(INPUT_CLASS);
            (field_errors(errors, name))
        }
    }
}

fn state_select(value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div {
            label for="state" class="block text-sm font-medium text-gray-700 mb-2" { "State" }
            select id="state" name="state" class=(INPUT_CLASS) {
                option value="" { "Select a state" }
                @for state in STATES {
                    option value=(state) selected[state == value] { (state) }
                }
            }
            (field_errors(errors, "state"))
        }
    }
}

fn genre_select(selected: &[String], errors: &FieldErrors) -> Markup {
    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            select id="genres" name="genres" multiple class=(INPUT_CLASS) {
                @for genre in Genre::ALL {
                    option value=(genre.as_str())
                        selected[selected.iter().any(|g| g == genre.as_str())] {
                        (genre.as_str())
                    }
                }
            }
            (field_errors(errors, "genres"))
        }
    }
}

fn seeking_fields(flag: &str, label: &str, checked: bool, description: &str) -> Markup {
    html! {
        div class="flex items-center space-x-2" {
            input type="checkbox" id=(flag) name=(flag) value="yes" checked[checked];
            label for=(flag) class="text-sm font-medium text-gray-700" { (label) }
        }
        div {
            label for="seeking_description" class="block text-sm font-medium text-gray-700 mb-2" {
                "Seeking Description"
            }
            textarea id="seeking_description" name="seeking_description" rows="3" class=(INPUT_CLASS) {
                (description)
            }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit"
            class="w-full bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md" {
            (label)
        }
    }
}

pub fn venue_form(action: &str, submit_label: &str, form: &VenueForm, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
            (text_field("Name", "name", &form.name, errors))
            (text_field("City", "city", &form.city, errors))
            (state_select(&form.state, errors))
            (text_field("Address", "address", &form.address, errors))
            (text_field("Phone", "phone", &form.phone, errors))
            (genre_select(&form.genres, errors))
            (text_field("Image Link", "image_link", &form.image_link, errors))
            (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors))
            (text_field("Website", "website", &form.website, errors))
            (seeking_fields("seeking_talent", "Seeking Talent", form.seeking_talent, &form.seeking_description))
            (submit_button(submit_label))
        }
    }
}

pub fn artist_form(action: &str, submit_label: &str, form: &ArtistForm, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
            (text_field("Name", "name", &form.name, errors))
            (text_field("City", "city", &form.city, errors))
            (state_select(&form.state, errors))
            (text_field("Phone", "phone", &form.phone, errors))
            (genre_select(&form.genres, errors))
            (text_field("Image Link", "image_link", &form.image_link, errors))
            (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors))
            (text_field("Website", "website", &form.website, errors))
            (seeking_fields("seeking_venue", "Seeking Venue", form.seeking_venue, &form.seeking_description))
            (submit_button(submit_label))
        }
    }
}

pub fn show_form(form: &ShowForm, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action="/shows/create" class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
            (text_field("Artist ID", "artist_id", &form.artist_id, errors))
            (text_field("Venue ID", "venue_id", &form.venue_id, errors))
            div {
                label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" { "Start Time" }
                input type="text" id="start_time" name="start_time" value=(form.start_time)
                    placeholder="YYYY-MM-DD HH:MM" class=(INPUT_CLASS);
                (field_errors(errors, "start_time"))
            }
            (submit_button("Create Show"))
        }
    }
}
