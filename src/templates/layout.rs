use maud::{html, Markup, DOCTYPE};

use super::components::flash_messages;
use crate::flash::Flash;

pub fn base_layout(title: &str, flashes: &[Flash], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Fyyur" }

                link rel="stylesheet" href="/static/css/output.css";

                // HTMX drives the DELETE buttons
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body class="h-full bg-gray-50" hx-boost="false" {
                div class="min-h-full" {
                    (nav_bar())

                    main class="container mx-auto px-4 py-8" {
                        (flash_messages(flashes))
                        (content)
                    }

                    (footer())
                }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    a href="/" class="text-xl font-bold text-gray-900" { "🔥 Fyyur" }

                    div class="flex space-x-4" {
                        a href="/venues" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Venues"
                        }
                        a href="/artists" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Artists"
                        }
                        a href="/shows" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Shows"
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-6 text-center text-gray-600 text-sm" {
                "Fyyur - Book venues and artists for live shows"
            }
        }
    }
}
