use sea_orm::entity::prelude::*;

use crate::snapshot::application::ports::outgoing::SnapshotSkillEntryView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot_skill_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub snapshot_id: Uuid,

    pub name: String,

    pub proficiency: Option<String>,

    pub sort_order: i32,
}

impl Model {
    pub fn to_view(&self) -> SnapshotSkillEntryView {
        SnapshotSkillEntryView {
            id: self.id,
            name: self.name.clone(),
            proficiency: self.proficiency.clone(),
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
