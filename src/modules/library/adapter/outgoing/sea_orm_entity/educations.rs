use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::EducationResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub institution: String,

    pub degree: String,

    pub field_of_study: Option<String>,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,

    pub description: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> EducationResult {
        EducationResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::cv::adapter::outgoing::sea_orm_entity::education_inclusions::Entity"
    )]
    EducationInclusions,
}

impl ActiveModelBehavior for ActiveModel {}
