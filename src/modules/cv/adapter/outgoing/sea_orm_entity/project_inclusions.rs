use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_project_inclusions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cv_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: Uuid,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cv_documents::Entity",
        from = "Column::CvId",
        to = "super::cv_documents::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    CvDocuments,

    #[sea_orm(
        belongs_to = "crate::library::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ItemId",
        to = "crate::library::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Projects,
}

impl Related<super::cv_documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvDocuments.def()
    }
}

impl Related<crate::library::adapter::outgoing::sea_orm_entity::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
