use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::ProjectResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub name: String,

    pub description: Option<String>,

    pub url: Option<String>,

    // Ordered free-text tags, stored as a JSONB array
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> ProjectResult {
        ProjectResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            tech_stack: serde_json::from_value(self.tech_stack.clone()).unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::cv::adapter::outgoing::sea_orm_entity::project_inclusions::Entity"
    )]
    ProjectInclusions,
}

impl ActiveModelBehavior for ActiveModel {}
