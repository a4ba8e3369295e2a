pub mod entities;
pub mod enums;
pub mod genres;
pub mod repositories;

pub use entities::*;
pub use enums::*;
pub use repositories::{ArtistRepository, ShowRepository, StoreError, VenueRepository};
