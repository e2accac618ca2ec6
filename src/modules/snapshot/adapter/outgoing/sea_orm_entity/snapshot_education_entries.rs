use sea_orm::entity::prelude::*;

use crate::snapshot::application::ports::outgoing::SnapshotEducationEntryView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot_education_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub snapshot_id: Uuid,

    pub institution: String,

    pub degree: String,

    pub field_of_study: Option<String>,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,

    pub description: Option<String>,

    pub sort_order: i32,
}

impl Model {
    pub fn to_view(&self) -> SnapshotEducationEntryView {
        SnapshotEducationEntryView {
            id: self.id,
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            sort_order: self.sort_order,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::snapshots::Entity",
        from = "Column::SnapshotId",
        to = "super::snapshots::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Snapshots,
}

impl Related<super::snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Snapshots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
