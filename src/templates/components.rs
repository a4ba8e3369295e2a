use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::flash::{Flash, FlashLevel};
use crate::services::ShowAppearance;

pub(crate) const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=Fyyur";

/// Long date used on detail pages, e.g. "Sun 04, 01, 2035 8:00PM".
pub fn format_show_time(start_time: &NaiveDateTime) -> String {
    start_time.format("%a %m, %d, %Y %-I:%M%p").to_string()
}

pub fn flash_messages(flashes: &[Flash]) -> Markup {
    html! {
        @for flash in flashes {
            @let color = match flash.level {
                FlashLevel::Success => "bg-green-100 text-green-800 border-green-300",
                FlashLevel::Error => "bg-red-100 text-red-800 border-red-300",
            };
            div class={(format!("flash flash-{} border rounded-md px-4 py-3 mb-4 {}", flash.level.as_str(), color))}
                role="alert" {
                (flash.message)
            }
        }
    }
}

/// A titled link row used by listings and search results.
pub struct ListingLink {
    pub href: String,
    pub name: String,
}

pub fn listing_links(links: &[ListingLink]) -> Markup {
    html! {
        ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
            @for link in links {
                li class="px-4 py-3" {
                    a href=(link.href) class="text-gray-900 hover:text-primary font-medium" {
                        (link.name)
                    }
                }
            }
        }
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="genre px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
            }
        }
    }
}

pub fn detail_row(label: &str, value: Option<&str>) -> Markup {
    html! {
        @if let Some(value) = value {
            div {
                dt class="text-sm font-medium text-gray-500" { (label) }
                dd class="mt-1 text-gray-900" { (value) }
            }
        }
    }
}

pub fn link_row(label: &str, href: Option<&str>) -> Markup {
    html! {
        @if let Some(href) = href {
            div {
                dt class="text-sm font-medium text-gray-500" { (label) }
                dd class="mt-1" {
                    a href=(href) target="_blank" class="text-primary hover:underline" { (href) }
                }
            }
        }
    }
}

/// Past or upcoming shows on a detail page. `base_path` is where the
/// counterpart lives, e.g. `/artists`.
pub fn appearance_section(heading: &str, shows: &[ShowAppearance], base_path: &str) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (shows.len()) " " (heading) " " @if shows.len() == 1 { "Show" } @else { "Shows" }
            }
            div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                @for show in shows {
                    div class="show-card bg-white rounded-lg shadow-sm overflow-hidden" {
                        img src=(show.counterpart_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                            alt=(show.counterpart_name)
                            class="w-full h-40 object-cover"
                            loading="lazy";
                        div class="p-4" {
                            a href={(format!("{}/{}", base_path, show.counterpart_id))}
                              class="font-semibold text-gray-900 hover:text-primary" {
                                (show.counterpart_name)
                            }
                            p class="text-sm text-gray-600 mt-1" { (format_show_time(&show.start_time)) }
                        }
                    }
                }
            }
        }
    }
}

pub fn delete_button(href: &str, name: &str) -> Markup {
    html! {
        button
            class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-md"
            hx-delete=(href)
            hx-confirm={(format!("Delete {}?", name))}
            hx-target="body"
            hx-push-url="/" {
            "Delete"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_show_time() {
        let start = NaiveDate::from_ymd_opt(2035, 4, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        assert_eq!(format_show_time(&start), "Sun 04, 01, 2035 8:00PM");
    }

    #[test]
    fn test_flash_messages_render_level() {
        let markup = flash_messages(&[Flash::error("Venue X could not be deleted.")]).into_string();
        assert!(markup.contains("flash-error"));
        assert!(markup.contains("Venue X could not be deleted."));
    }
}
