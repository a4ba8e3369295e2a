//! View-ready projections over the entity store.
//!
//! Every function here that depends on time takes `now` from its caller so
//! that one request classifies all of its shows against the same instant.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::debug;

use crate::db::{
    entities::venue,
    repositories::{CounterpartRow, ShowListingRow, StoreResult},
    ShowRepository, VenueRepository,
};

/// Format used for start times on the show listing.
pub const LISTING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// One show from the perspective of a venue or artist detail page: the
/// other party plus the start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowAppearance {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowPartition {
    pub upcoming: Vec<ShowAppearance>,
    pub past: Vec<ShowAppearance>,
}

impl ShowPartition {
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Groups venues by (city, state). Groups appear in the order their first
/// venue appears; venues keep their relative order within a group.
pub fn group_by_area(venues: Vec<venue::Model>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
        };
        match areas
            .iter_mut()
            .find(|area| area.city == venue.city && area.state == venue.state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

/// Splits shows at `now`. A show starting exactly at `now` is past.
pub fn split_shows(rows: Vec<CounterpartRow>, now: NaiveDateTime) -> ShowPartition {
    let (upcoming, past): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .map(|row| ShowAppearance {
            counterpart_id: row.counterpart_id,
            counterpart_name: row.counterpart_name,
            counterpart_image_link: row.counterpart_image_link,
            start_time: row.start_time,
        })
        .partition(|show| show.start_time > now);

    ShowPartition { upcoming, past }
}

pub async fn venue_areas(db: &DatabaseConnection) -> StoreResult<Vec<Area>> {
    let venues = VenueRepository::new(db.clone()).find_all().await?;
    let areas = group_by_area(venues);
    debug!("Grouped venues into {} areas", areas.len());
    Ok(areas)
}

/// Shows at a venue, each carrying the performing artist.
pub async fn venue_shows(
    db: &DatabaseConnection,
    venue_id: i32,
    now: NaiveDateTime,
) -> StoreResult<ShowPartition> {
    let rows = ShowRepository::new(db.clone()).for_venue(venue_id).await?;
    Ok(split_shows(rows, now))
}

/// Shows by an artist, each carrying the hosting venue.
pub async fn artist_shows(
    db: &DatabaseConnection,
    artist_id: i32,
    now: NaiveDateTime,
) -> StoreResult<ShowPartition> {
    let rows = ShowRepository::new(db.clone()).for_artist(artist_id).await?;
    Ok(split_shows(rows, now))
}

pub async fn show_listing(db: &DatabaseConnection) -> StoreResult<Vec<ShowListing>> {
    let rows = ShowRepository::new(db.clone()).listing().await?;
    Ok(rows.into_iter().map(format_listing).collect())
}

fn format_listing(row: ShowListingRow) -> ShowListing {
    ShowListing {
        show_id: row.show_id,
        venue_id: row.venue_id,
        venue_name: row.venue_name,
        artist_id: row.artist_id,
        artist_name: row.artist_name,
        artist_image_link: row.artist_image_link,
        start_time: row.start_time.format(LISTING_TIME_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn venue(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        let now = Utc::now().into();
        venue::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            genres: String::new(),
            seeking_talent: false,
            seeking_description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn row(id: i32, start_time: NaiveDateTime) -> CounterpartRow {
        CounterpartRow {
            counterpart_id: id,
            counterpart_name: format!("Artist {}", id),
            counterpart_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_group_by_area_collects_shared_pairs() {
        let areas = group_by_area(vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(
            areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn test_same_city_different_state_are_distinct_areas() {
        let areas = group_by_area(vec![
            venue(1, "A", "Portland", "OR"),
            venue(2, "B", "Portland", "ME"),
        ]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn test_split_shows_boundary_is_past() {
        let now = at(15, 20);
        let partition = split_shows(vec![row(1, at(14, 20)), row(2, now), row(3, at(16, 20))], now);

        assert_eq!(
            partition.past.iter().map(|s| s.counterpart_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            partition.upcoming.iter().map(|s| s.counterpart_id).collect::<Vec<_>>(),
            vec![3]
        );
        assert_eq!(partition.past_count(), 2);
        assert_eq!(partition.upcoming_count(), 1);
    }

    #[test]
    fn test_format_listing_time() {
        let listing = format_listing(ShowListingRow {
            show_id: 1,
            venue_id: 2,
            venue_name: "The Musical Hop".to_string(),
            artist_id: 3,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time: at(1, 21),
        });

        assert_eq!(listing.start_time, "2030-06-01 21:00");
    }
}
