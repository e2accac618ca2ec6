use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;

/// Current profile fields for a user, as maintained by the external profile
/// service. The snapshot engine copies these verbatim into a header row;
/// nothing in this backend writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub owner: UserId,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// A user who has never filled in their profile still gets a snapshot;
    /// the header is simply empty.
    pub fn empty(owner: UserId) -> Self {
        Self {
            owner,
            full_name: None,
            headline: None,
            email: None,
            phone: None,
            location: None,
            website: None,
            summary: None,
            photo_url: None,
        }
    }
}
