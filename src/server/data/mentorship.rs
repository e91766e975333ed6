//! Mentorship offerings.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::mentorship::CreateMentorshipDto;

/// Repository for the `mentorships` table
pub struct MentorshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentorshipRepository<'a, C> {
    /// Creates a new instance of [`MentorshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new mentorship offering
    pub async fn create(
        &self,
        mentorship: CreateMentorshipDto,
    ) -> Result<entity::mentorship::Model, DbErr> {
        entity::prelude::Mentorship::insert(entity::mentorship::ActiveModel {
            creator_id: ActiveValue::Set(mentorship.creator_id),
            title: ActiveValue::Set(mentorship.title),
            description: ActiveValue::Set(mentorship.description),
            specialties: ActiveValue::Set(mentorship.specialties.into()),
            price: ActiveValue::Set(mentorship.price),
            max_mentees: ActiveValue::Set(mentorship.max_mentees),
            duration: ActiveValue::Set(mentorship.duration),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find a mentorship offering by ID
    pub async fn get(&self, id: i32) -> Result<Option<entity::mentorship::Model>, DbErr> {
        entity::prelude::Mentorship::find_by_id(id).one(self.db).await
    }

    /// List offerings, newest first, optionally only those of one creator
    pub async fn list(
        &self,
        creator_id: Option<&str>,
    ) -> Result<Vec<entity::mentorship::Model>, DbErr> {
        let mut query = entity::prelude::Mentorship::find();

        if let Some(creator_id) = creator_id {
            query = query.filter(entity::mentorship::Column::CreatorId.eq(creator_id));
        }

        query
            .order_by_desc(entity::mentorship::Column::CreatedAt)
            .order_by_desc(entity::mentorship::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `(id, title)` pairs for the provided mentorship offering IDs
    pub async fn get_titles_by_ids(&self, ids: &[i32]) -> Result<Vec<(i32, String)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Mentorship::find()
            .select_only()
            .column(entity::mentorship::Column::Id)
            .column(entity::mentorship::Column::Title)
            .filter(entity::mentorship::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }
}
