//! Projects open for collaboration.

use chrono::Utc;
use entity::sea_orm_active_enums::ProjectStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::project::CreateProjectDto;

/// Repository for the `projects` table
pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new project with the given initial status
    pub async fn create(
        &self,
        project: CreateProjectDto,
        status: ProjectStatus,
    ) -> Result<entity::project::Model, DbErr> {
        entity::prelude::Project::insert(entity::project::ActiveModel {
            user_id: ActiveValue::Set(project.user_id),
            title: ActiveValue::Set(project.title),
            description: ActiveValue::Set(project.description),
            tech_stacks: ActiveValue::Set(project.tech_stacks.into()),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find a project by ID
    pub async fn get(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// List projects newest first, optionally restricted to a single owner
    pub async fn list(&self, owner: Option<&str>) -> Result<Vec<entity::project::Model>, DbErr> {
        let mut query = entity::prelude::Project::find();

        if let Some(owner) = owner {
            query = query.filter(entity::project::Column::UserId.eq(owner));
        }

        query
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `(id, title)` pairs for the provided project IDs
    ///
    /// IDs without a matching project are omitted from the result.
    pub async fn get_titles_by_ids(&self, ids: &[i32]) -> Result<Vec<(i32, String)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::Id)
            .column(entity::project::Column::Title)
            .filter(entity::project::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Set the status of a project, returning `None` if it does not exist
    pub async fn update_status(
        &self,
        id: i32,
        status: ProjectStatus,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let project = match self.get(id).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let mut project_am = project.into_active_model();
        project_am.status = ActiveValue::Set(status);

        let project = project_am.update(self.db).await?;

        Ok(Some(project))
    }
}
