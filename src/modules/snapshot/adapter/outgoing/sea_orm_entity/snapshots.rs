use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_snapshots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    // Bare uuid, no FK: the source CV may be edited or deleted later
    // without touching this row.
    pub source_cv_id: Uuid,

    pub application_id: Option<Uuid>,

    pub title: String,

    pub template: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::job_application::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::ApplicationId",
        to = "crate::job_application::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    JobApplications,

    #[sea_orm(has_one = "super::snapshot_headers::Entity")]
    SnapshotHeaders,

    #[sea_orm(has_many = "super::snapshot_work_entries::Entity")]
    SnapshotWorkEntries,

    #[sea_orm(has_many = "super::snapshot_education_entries::Entity")]
    SnapshotEducationEntries,

    #[sea_orm(has_many = "super::snapshot_skill_entries::Entity")]
    SnapshotSkillEntries,

    #[sea_orm(has_many = "super::snapshot_project_entries::Entity")]
    SnapshotProjectEntries,
}

impl Related<crate::job_application::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
