//! Database queries for projects.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::entity::project::{self, ActiveModel as ProjectActiveModel, Entity as Project};
use crate::error::AppResult;

use super::{DbPool, scope};

/// Represents a project to be inserted.
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

impl DbPool {
    /// List all projects ordered by ID.
    pub async fn list_projects(&self) -> AppResult<Vec<project::Model>> {
        let projects = Project::find()
            .order_by_asc(project::Column::Id)
            .all(self.connection())
            .await?;

        Ok(projects)
    }

    /// Get a single project by ID.
    pub async fn get_project(&self, project_id: i32) -> AppResult<project::Model> {
        scope::project(self.connection(), project_id).await
    }

    /// Insert a new project. `created_at` is always assigned server-side.
    pub async fn insert_project(&self, project: NewProject) -> AppResult<project::Model> {
        let model = ProjectActiveModel {
            name: Set(project.name),
            description: Set(project.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = model.insert(self.connection()).await?;
        Ok(inserted)
    }
}
