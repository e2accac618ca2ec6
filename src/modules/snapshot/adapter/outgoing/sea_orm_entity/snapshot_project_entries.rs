use sea_orm::entity::prelude::*;

use crate::snapshot::application::ports::outgoing::SnapshotProjectEntryView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot_project_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub snapshot_id: Uuid,

    pub name: String,

    pub description: Option<String>,

    pub url: Option<String>,

    // Copied tag array, stored as JSONB like its library counterpart
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,

    pub sort_order: i32,
}

impl Model {
    pub fn to_view(&self) -> SnapshotProjectEntryView {
        SnapshotProjectEntryView {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            tech_stack: serde_json::from_value(self.tech_stack.clone()).unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
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
