use sea_orm::entity::prelude::*;

use crate::snapshot::application::ports::outgoing::SnapshotWorkEntryView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot_work_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub snapshot_id: Uuid,

    pub company: String,

    pub role: String,

    pub location: Option<String>,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub is_current: bool,

    pub summary: Option<String>,

    pub sort_order: i32,
}

impl Model {
    pub fn to_view(&self) -> SnapshotWorkEntryView {
        SnapshotWorkEntryView {
            id: self.id,
            company: self.company.clone(),
            role: self.role.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            summary: self.summary.clone(),
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
