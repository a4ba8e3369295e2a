use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};

use super::{StoreError, StoreResult};
use crate::db::entities::{artist, show, venue};
use crate::forms::NewShow;

/// A show joined with both its venue and artist display fields.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ShowListingRow {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: chrono::NaiveDateTime,
}

/// A show seen from one side: the other party's display fields.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CounterpartRow {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: chrono::NaiveDateTime,
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a show after confirming both its artist and venue exist.
    ///
    /// The existence checks and the insert share one transaction.
    pub async fn create(&self, new_show: &NewShow) -> StoreResult<show::Model> {
        let txn = self.db.begin().await?;

        if artist::Entity::find_by_id(new_show.artist_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(StoreError::MissingReference {
                entity: "Artist",
                id: new_show.artist_id,
            });
        }

        if venue::Entity::find_by_id(new_show.venue_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(StoreError::MissingReference {
                entity: "Venue",
                id: new_show.venue_id,
            });
        }

        let show = show::ActiveModel {
            venue_id: Set(new_show.venue_id),
            artist_id: Set(new_show.artist_id),
            start_time: Set(new_show.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(show)
    }

    pub async fn find_all(&self) -> StoreResult<Vec<show::Model>> {
        Ok(show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?)
    }

    pub async fn count_for_venue(&self, venue_id: i32) -> StoreResult<u64> {
        Ok(count_referencing(&self.db, show::Column::VenueId, venue_id).await?)
    }

    pub async fn count_for_artist(&self, artist_id: i32) -> StoreResult<u64> {
        Ok(count_referencing(&self.db, show::Column::ArtistId, artist_id).await?)
    }

    pub async fn listing(&self) -> StoreResult<Vec<ShowListingRow>> {
        Ok(show::Entity::find()
            .select_only()
            .column_as(show::Column::Id, "show_id")
            .column(show::Column::VenueId)
            .column_as(venue::Column::Name, "venue_name")
            .column(show::Column::ArtistId)
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .column(show::Column::StartTime)
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .into_model::<ShowListingRow>()
            .all(&self.db)
            .await?)
    }

    /// Shows at venue `venue_id`, each carrying its artist.
    pub async fn for_venue(&self, venue_id: i32) -> StoreResult<Vec<CounterpartRow>> {
        Ok(show::Entity::find()
            .select_only()
            .column_as(artist::Column::Id, "counterpart_id")
            .column_as(artist::Column::Name, "counterpart_name")
            .column_as(artist::Column::ImageLink, "counterpart_image_link")
            .column(show::Column::StartTime)
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .into_model::<CounterpartRow>()
            .all(&self.db)
            .await?)
    }

    /// Shows played by artist `artist_id`, each carrying its venue.
    pub async fn for_artist(&self, artist_id: i32) -> StoreResult<Vec<CounterpartRow>> {
        Ok(show::Entity::find()
            .select_only()
            .column_as(venue::Column::Id, "counterpart_id")
            .column_as(venue::Column::Name, "counterpart_name")
            .column_as(venue::Column::ImageLink, "counterpart_image_link")
            .column(show::Column::StartTime)
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .into_model::<CounterpartRow>()
            .all(&self.db)
            .await?)
    }
}

/// Shows whose `column` points at `id`. Deletes call this on their own
/// transaction.
pub(super) async fn count_referencing<C: ConnectionTrait>(
    conn: &C,
    column: show::Column,
    id: i32,
) -> Result<u64, DbErr> {
    show::Entity::find()
        .filter(column.eq(id))
        .count(conn)
        .await
}
