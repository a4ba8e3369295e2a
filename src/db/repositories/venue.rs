use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{name_contains, show::count_referencing, StoreError, StoreResult};
use crate::db::{
    entities::{show, venue},
    genres,
};
use crate::forms::VenueFields;

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> StoreResult<venue::Model> {
        venue::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound { entity: "Venue", id })
    }

    /// All venues, ordered so that venues sharing a (city, state) are adjacent.
    pub async fn find_all(&self) -> StoreResult<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::Name)
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn search(&self, term: &str) -> StoreResult<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .filter(name_contains(venue::Column::Name, term))
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, fields: &VenueFields) -> StoreResult<venue::Model> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let mut active = venue::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_fields(&mut active, fields);
        let venue = active.insert(&txn).await?;

        txn.commit().await?;
        Ok(venue)
    }

    /// Replaces every form-backed column of venue `id`.
    pub async fn update(&self, id: i32, fields: &VenueFields) -> StoreResult<venue::Model> {
        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;

        let mut active: venue::ActiveModel = existing.into();
        apply_fields(&mut active, fields);
        active.updated_at = Set(Utc::now().into());
        let venue = active.update(&txn).await?;

        txn.commit().await?;
        Ok(venue)
    }

    /// Deletes venue `id`, refusing while any show still references it.
    pub async fn delete(&self, id: i32) -> StoreResult<venue::Model> {
        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;

        let shows = count_referencing(&txn, show::Column::VenueId, id).await?;
        if shows > 0 {
            txn.rollback().await?;
            return Err(StoreError::ReferentialConstraint {
                entity: "Venue",
                name: existing.name,
            });
        }

        venue::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| StoreError::from_delete(e, "Venue", &existing.name))?;

        txn.commit().await?;
        Ok(existing)
    }
}

fn apply_fields(active: &mut venue::ActiveModel, fields: &VenueFields) {
    active.name = Set(fields.name.clone());
    active.city = Set(fields.city.clone());
    active.state = Set(fields.state.clone());
    active.address = Set(fields.address.clone());
    active.phone = Set(fields.phone.clone());
    active.image_link = Set(fields.image_link.clone());
    active.facebook_link = Set(fields.facebook_link.clone());
    active.website = Set(fields.website.clone());
    active.genres = Set(genres::join(&fields.genres));
    active.seeking_talent = Set(fields.seeking_talent);
    active.seeking_description = Set(fields.seeking_description.clone());
}
