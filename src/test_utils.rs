//! Test utilities for Fyyur
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState and router factories
//! - Test data generators

use chrono::{NaiveDateTime, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat, PastShowPolicy},
    db::{
        entities::{artist, show, venue},
        genres,
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        past_show_policy: PastShowPolicy::Allow,
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

/// Same as [`setup_test_app_state`] but refusing past-dated shows.
pub async fn setup_test_app_state_rejecting_past_shows() -> AppState {
    let mut config = test_config();
    config.past_show_policy = PastShowPolicy::Reject;
    AppState::new(setup_test_db().await, config)
}

/// Parse a `YYYY-MM-DD HH:MM` literal.
pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").expect("Invalid test datetime")
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let now = Utc::now().into();
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set(Some("1015 Folsom Street".to_string())),
        phone: Set(None),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        genres: Set(genres::join(&["Jazz", "Folk"])),
        seeking_talent: Set(false),
        seeking_description: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let now = Utc::now().into();
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(None),
        image_link: Set(Some("https://images.example.com/artist.jpg".to_string())),
        facebook_link: Set(None),
        website: Set(None),
        genres: Set(genres::join(&["Rock n Roll"])),
        seeking_venue: Set(false),
        seeking_description: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database, bypassing reference checks
pub async fn create_test_show(
    db: &DatabaseConnection,
    venue_id: i32,
    artist_id: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    let show = show::ActiveModel {
        venue_id: Set(venue_id),
        artist_id: Set(artist_id),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}
