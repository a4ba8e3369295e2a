use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::db::{ArtistRepository, ShowRepository, VenueRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn venues(&self) -> VenueRepository {
        VenueRepository::new(self.db.clone())
    }

    pub fn artists(&self) -> ArtistRepository {
        ArtistRepository::new(self.db.clone())
    }

    pub fn shows(&self) -> ShowRepository {
        ShowRepository::new(self.db.clone())
    }
}
