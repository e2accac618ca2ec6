use sea_orm::entity::prelude::*;

use crate::snapshot::application::ports::outgoing::SnapshotHeaderView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot_headers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub snapshot_id: Uuid,

    pub full_name: Option<String>,

    pub headline: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub location: Option<String>,

    pub website: Option<String>,

    pub summary: Option<String>,

    pub photo_url: Option<String>,
}

impl Model {
    pub fn to_view(&self) -> SnapshotHeaderView {
        SnapshotHeaderView {
            full_name: self.full_name.clone(),
            headline: self.headline.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            summary: self.summary.clone(),
            photo_url: self.photo_url.clone(),
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
