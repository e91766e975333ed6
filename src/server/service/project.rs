//! Projects.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::ProjectStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::project::CreateProjectDto,
    server::{
        data::project::ProjectRepository,
        error::{resource::ResourceError, Error},
        model::db::ProjectModel,
        util::validation::{parse_status, require_non_empty},
    },
};

/// Project creation, listing and status changes
pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a project, defaulting its status to `open`
    pub async fn create_project(&self, project: CreateProjectDto) -> Result<ProjectModel, Error> {
        require_non_empty("userId", &project.user_id)?;
        require_non_empty("title", &project.title)?;
        require_non_empty("description", &project.description)?;

        let status = match project.status.as_deref() {
            Some(status) => parse_status(status)?,
            None => ProjectStatus::Open,
        };

        let project = ProjectRepository::new(self.db)
            .create(project, status)
            .await?;

        tracing::info!("Project {} created by {}", project.id, project.user_id);

        Ok(project)
    }

    /// List projects, optionally only those of one owner
    pub async fn list_projects(&self, owner: Option<&str>) -> Result<Vec<ProjectModel>, Error> {
        let projects = ProjectRepository::new(self.db).list(owner).await?;

        Ok(projects)
    }

    /// Set the status of a project
    pub async fn update_status(&self, id: i32, status: &str) -> Result<ProjectModel, Error> {
        let status: ProjectStatus = parse_status(status)?;

        let project = ProjectRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| ResourceError::not_found("Project", id))?;

        tracing::info!("Project {} set to {:?}", id, status);

        Ok(project)
    }
}
