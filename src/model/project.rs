use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ProjectStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    /// Owner of the project
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    /// Defaults to `open`
    pub status: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub tech_stacks: Vec<String>,
    #[schema(value_type = String)]
    pub status: ProjectStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProjectListDto {
    pub projects: Vec<ProjectDto>,
}

impl From<entity::project::Model> for ProjectDto {
    fn from(project: entity::project::Model) -> Self {
        Self {
            id: project.id,
            user_id: project.user_id,
            title: project.title,
            description: project.description,
            tech_stacks: project.tech_stacks.into(),
            status: project.status,
            created_at: project.created_at,
        }
    }
}
