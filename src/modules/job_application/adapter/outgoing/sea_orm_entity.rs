use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::job_application::application::ports::outgoing::ApplicationResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub company: String,

    pub position: String,

    pub status: String,

    pub job_url: Option<String>,

    pub notes: Option<String>,

    pub applied_at: Option<Date>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> ApplicationResult {
        ApplicationResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            company: self.company.clone(),
            position: self.position.clone(),
            status: self.status.clone(),
            job_url: self.job_url.clone(),
            notes: self.notes.clone(),
            applied_at: self.applied_at,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::snapshot::adapter::outgoing::sea_orm_entity::snapshots::Entity"
    )]
    Snapshots,
}

impl ActiveModelBehavior for ActiveModel {}
