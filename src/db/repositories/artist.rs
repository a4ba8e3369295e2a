use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{name_contains, show::count_referencing, StoreError, StoreResult};
use crate::db::{
    entities::{artist, show},
    genres,
};
use crate::forms::ArtistFields;

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> StoreResult<artist::Model> {
        artist::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound { entity: "Artist", id })
    }

    pub async fn find_all(&self) -> StoreResult<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn search(&self, term: &str) -> StoreResult<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(name_contains(artist::Column::Name, term))
            .order_by_asc(artist::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, fields: &ArtistFields) -> StoreResult<artist::Model> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let mut active = artist::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_fields(&mut active, fields);
        let artist = active.insert(&txn).await?;

        txn.commit().await?;
        Ok(artist)
    }

    pub async fn update(&self, id: i32, fields: &ArtistFields) -> StoreResult<artist::Model> {
        let txn = self.db.begin().await?;

        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Artist", id })?;

        let mut active: artist::ActiveModel = existing.into();
        apply_fields(&mut active, fields);
        active.updated_at = Set(Utc::now().into());
        let artist = active.update(&txn).await?;

        txn.commit().await?;
        Ok(artist)
    }

    pub async fn delete(&self, id: i32) -> StoreResult<artist::Model> {
        let txn = self.db.begin().await?;

        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Artist", id })?;

        let shows = count_referencing(&txn, show::Column::ArtistId, id).await?;
        if shows > 0 {
            txn.rollback().await?;
            return Err(StoreError::ReferentialConstraint {
                entity: "Artist",
                name: existing.name,
            });
        }

        artist::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| StoreError::from_delete(e, "Artist", &existing.name))?;

        txn.commit().await?;
        Ok(existing)
    }
}

fn apply_fields(active: &mut artist::ActiveModel, fields: &ArtistFields) {
    active.name = Set(fields.name.clone());
    active.city = Set(fields.city.clone());
    active.state = Set(fields.state.clone());
    active.phone = Set(fields.phone.clone());
    active.genres = Set(genres::join(&fields.genres));
    active.image_link = Set(fields.image_link.clone());
    active.facebook_link = Set(fields.facebook_link.clone());
    active.website = Set(fields.website.clone());
    active.seeking_venue = Set(fields.seeking_venue);
    active.seeking_description = Set(fields.seeking_description.clone());
}
