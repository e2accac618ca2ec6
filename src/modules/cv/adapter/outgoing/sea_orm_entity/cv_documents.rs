use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::CvResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub template: String,

    pub is_default: bool,

    pub override_summary: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> CvResult {
        CvResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            template: self.template.clone(),
            is_default: self.is_default,
            override_summary: self.override_summary.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work_inclusions::Entity")]
    WorkInclusions,

    #[sea_orm(has_many = "super::education_inclusions::Entity")]
    EducationInclusions,

    #[sea_orm(has_many = "super::skill_inclusions::Entity")]
    SkillInclusions,

    #[sea_orm(has_many = "super::project_inclusions::Entity")]
    ProjectInclusions,
}

impl ActiveModelBehavior for ActiveModel {}
