pub mod read_model;

pub use read_model::{Area, ShowAppearance, ShowListing, ShowPartition, VenueSummary};
