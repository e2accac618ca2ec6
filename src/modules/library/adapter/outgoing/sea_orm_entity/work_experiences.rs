use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::WorkExperienceResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_work_experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub company: String,

    pub role: String,

    pub location: Option<String>,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub is_current: bool,

    pub summary: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> WorkExperienceResult {
        WorkExperienceResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            company: self.company.clone(),
            role: self.role.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            summary: self.summary.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::cv::adapter::outgoing::sea_orm_entity::work_inclusions::Entity"
    )]
    WorkInclusions,
}

impl ActiveModelBehavior for ActiveModel {}
