use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    appearance_section, delete_button, detail_row, genre_tags, link_row, listing_links,
    ListingLink, PLACEHOLDER_IMAGE,
};
use super::forms::{artist_form, show_form, venue_form};
use super::layout::base_layout;
use crate::db::entities::{artist, venue};
use crate::flash::Flash;
use crate::forms::{ArtistForm, FieldErrors, ShowForm, VenueForm};
use crate::services::{Area, ShowListing, ShowPartition};

pub fn home_page(flashes: &[Flash]) -> Markup {
    base_layout(
        "Home",
        flashes,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "Fyyur" }
                p class="text-gray-600 mt-4" { "Book talent. Find venues. Fill the calendar." }
                div class="flex justify-center gap-4 mt-8" {
                    a href="/venues/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post a venue" }
                    a href="/artists/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post an artist" }
                    a href="/shows/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post a show" }
                }
            }
        },
    )
}

fn search_box(action: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="mb-6 flex gap-2" {
            input type="search" name="search_term" value=(term) placeholder="Search by name"
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md";
            button type="submit" class="px-4 py-2 bg-primary text-white rounded-md" { "Search" }
        }
    }
}

pub fn venues_page(areas: &[Area], flashes: &[Flash]) -> Markup {
    base_layout(
        "Venues",
        flashes,
        html! {
            (search_box("/venues/search", ""))
            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }
            @for area in areas {
                section class="area mb-8" {
                    h2 class="text-xl font-semibold mb-3" { (area.city) ", " (area.state) }
                    (listing_links(&area_links(area)))
                }
            }
        },
    )
}

fn area_links(area: &Area) -> Vec<ListingLink> {
    area.venues
        .iter()
        .map(|v| ListingLink {
            href: format!("/venues/{}", v.id),
            name: v.name.clone(),
        })
        .collect()
}

pub fn artists_page(artists: &[artist::Model], flashes: &[Flash]) -> Markup {
    let links: Vec<ListingLink> = artists
        .iter()
        .map(|a| ListingLink {
            href: format!("/artists/{}", a.id),
            name: a.name.clone(),
        })
        .collect();

    base_layout(
        "Artists",
        flashes,
        html! {
            (search_box("/artists/search", ""))
            @if links.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            } @else {
                (listing_links(&links))
            }
        },
    )
}

/// Results for either search route; zero hits still renders the page.
pub fn search_results_page(
    title: &str,
    action: &str,
    term: &str,
    results: &[ListingLink],
    flashes: &[Flash],
) -> Markup {
    base_layout(
        title,
        flashes,
        html! {
            (search_box(action, term))
            h2 class="search-summary text-lg text-gray-700 mb-4" {
                "Number of search results for \"" (term) "\": " (results.len())
            }
            (listing_links(results))
        },
    )
}

pub fn venue_detail_page(venue: &venue::Model, shows: &ShowPartition, flashes: &[Flash]) -> Markup {
    base_layout(
        &venue.name,
        flashes,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                div class="flex justify-between items-start" {
                    div {
                        p class="text-sm text-gray-500" { "ID: " (venue.id) }
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                    }
                    div class="flex gap-2" {
                        a href={(format!("/venues/{}/edit", venue.id))}
                          class="px-4 py-2 bg-blue-500 text-white font-semibold rounded-md" { "Edit" }
                        (delete_button(&format!("/venues/{}", venue.id), &venue.name))
                    }
                }
                div class="mt-4" { (genre_tags(&venue.genre_list())) }
                dl class="mt-6 space-y-4" {
                    (detail_row("Location", Some(format!("{}, {}", venue.city, venue.state).as_str())))
                    (detail_row("Address", venue.address.as_deref()))
                    (detail_row("Phone", venue.phone.as_deref()))
                    (link_row("Website", venue.website.as_deref()))
                    (link_row("Facebook", venue.facebook_link.as_deref()))
                }
                div class="mt-6" {
                    @if venue.seeking_talent {
                        p class="seeking font-semibold text-green-700" { "Currently seeking talent" }
                        p class="text-gray-700" { (venue.seeking_description) }
                    } @else {
                        p class="not-seeking text-gray-500" { "Not currently seeking talent" }
                    }
                }
            }
            p class="show-counts text-sm text-gray-500 mt-6" {
                (shows.upcoming_count()) " upcoming, " (shows.past_count()) " past"
            }
            (appearance_section("Upcoming", &shows.upcoming, "/artists"))
            (appearance_section("Past", &shows.past, "/artists"))
        },
    )
}

pub fn artist_detail_page(artist: &artist::Model, shows: &ShowPartition, flashes: &[Flash]) -> Markup {
    base_layout(
        &artist.name,
        flashes,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                div class="flex justify-between items-start" {
                    div {
                        p class="text-sm text-gray-500" { "ID: " (artist.id) }
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                    }
                    div class="flex gap-2" {
                        a href={(format!("/artists/{}/edit", artist.id))}
                          class="px-4 py-2 bg-blue-500 text-white font-semibold rounded-md" { "Edit" }
                        (delete_button(&format!("/artists/{}", artist.id), &artist.name))
                    }
                }
                div class="mt-4" { (genre_tags(&artist.genre_list())) }
                dl class="mt-6 space-y-4" {
                    (detail_row("Location", Some(format!("{}, {}", artist.city, artist.state).as_str())))
                    (detail_row("Phone", artist.phone.as_deref()))
                    (link_row("Website", artist.website.as_deref()))
                    (link_row("Facebook", artist.facebook_link.as_deref()))
                }
                div class="mt-6" {
                    @if artist.seeking_venue {
                        p class="seeking font-semibold text-green-700" { "Currently seeking performance venues" }
                        p class="text-gray-700" { (artist.seeking_description) }
                    } @else {
                        p class="not-seeking text-gray-500" { "Not currently seeking performance venues" }
                    }
                }
            }
            p class="show-counts text-sm text-gray-500 mt-6" {
                (shows.upcoming_count()) " upcoming, " (shows.past_count()) " past"
            }
            (appearance_section("Upcoming", &shows.upcoming, "/venues"))
            (appearance_section("Past", &shows.past, "/venues"))
        },
    )
}

pub fn new_venue_page(form: &VenueForm, errors: &FieldErrors, flashes: &[Flash]) -> Markup {
    base_layout(
        "New Venue",
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "List a new venue" }
            (venue_form("/venues/create", "Create Venue", form, errors))
        },
    )
}

pub fn edit_venue_page(id: i32, form: &VenueForm, errors: &FieldErrors, flashes: &[Flash]) -> Markup {
    base_layout(
        "Edit Venue",
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Edit venue " em { (form.name) } }
            (venue_form(&format!("/venues/{}/edit", id), "Save Venue", form, errors))
        },
    )
}

pub fn new_artist_page(form: &ArtistForm, errors: &FieldErrors, flashes: &[Flash]) -> Markup {
    base_layout(
        "New Artist",
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "List a new artist" }
            (artist_form("/artists/create", "Create Artist", form, errors))
        },
    )
}

pub fn edit_artist_page(id: i32, form: &ArtistForm, errors: &FieldErrors, flashes: &[Flash]) -> Markup {
    base_layout(
        "Edit Artist",
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Edit artist " em { (form.name) } }
            (artist_form(&format!("/artists/{}/edit", id), "Save Artist", form, errors))
        },
    )
}

pub fn shows_page(shows: &[ShowListing], flashes: &[Flash]) -> Markup {
    base_layout(
        "Shows",
        flashes,
        html! {
            @if shows.is_empty() {
                p class="text-gray-600" { "No shows listed yet." }
            }
            div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                @for show in shows {
                    div class="show-card bg-white rounded-lg shadow-sm p-4" {
                        img src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                            alt=(show.artist_name)
                            class="w-full h-40 object-cover rounded mb-3"
                            loading="lazy";
                        p class="text-sm text-gray-500" { (show.start_time) }
                        a href={(format!("/artists/{}", show.artist_id))} class="block font-semibold text-gray-900" {
                            (show.artist_name)
                        }
                        p class="text-sm text-gray-600" {
                            "playing at "
                            a href={(format!("/venues/{}", show.venue_id))} class="hover:underline" { (show.venue_name) }
                        }
                    }
                }
            }
        },
    )
}

pub fn new_show_page(form: &ShowForm, errors: &FieldErrors, flashes: &[Flash]) -> Markup {
    base_layout(
        "New Show",
        flashes,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "List a new show" }
            (show_form(form, errors))
        },
    )
}

pub fn error_page(status: StatusCode, message: &str, flashes: &[Flash]) -> Markup {
    let heading = match status {
        StatusCode::NOT_FOUND => "404: Page not found",
        _ => "500: Something went wrong",
    };

    base_layout(
        status.canonical_reason().unwrap_or("Error"),
        flashes,
        html! {
            div class="error-page text-center py-12" {
                h1 class="text-3xl font-bold text-gray-900" { (heading) }
                p class="text-gray-600 mt-4" { (message) }
                a href="/" class="inline-block mt-6 text-primary hover:underline" { "Back home" }
            }
        },
    )
}
