use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,

    pub full_name: Option<String>,

    pub headline: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub location: Option<String>,

    pub website: Option<String>,

    pub summary: Option<String>,

    pub photo_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> UserProfile {
        UserProfile {
            owner: UserId::from(self.user_id),
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
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
