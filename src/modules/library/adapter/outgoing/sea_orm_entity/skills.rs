use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::SkillResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub name: String,

    pub proficiency: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> SkillResult {
        SkillResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            name: self.name.clone(),
            proficiency: self.proficiency.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::cv::adapter::outgoing::sea_orm_entity::skill_inclusions::Entity"
    )]
    SkillInclusions,
}

impl ActiveModelBehavior for ActiveModel {}
