use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

// Read shapes for a committed snapshot. These are deliberately distinct
// from the library result types: a snapshot row has no live link to the
// library item it was copied from.

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotHeaderView {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotWorkEntryView {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub summary: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEducationEntryView {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSkillEntryView {
    pub id: Uuid,
    pub name: String,
    pub proficiency: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotProjectEntryView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tech_stack: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResult {
    pub id: Uuid,
    pub owner: UserId,
    /// Historical reference only; the CV may have been edited or deleted
    /// since.
    pub source_cv_id: Uuid,
    pub application_id: Option<Uuid>,
    pub title: String,
    pub template: String,
    pub created_at: DateTime<Utc>,
    pub header: SnapshotHeaderView,
    pub work_experiences: Vec<SnapshotWorkEntryView>,
    pub educations: Vec<SnapshotEducationEntryView>,
    pub skills: Vec<SnapshotSkillEntryView>,
    pub projects: Vec<SnapshotProjectEntryView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotQueryError {
    /// Snapshot doesn't exist OR doesn't belong to owner.
    #[error("Snapshot not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SnapshotQuery: Send + Sync {
    /// Children come back ordered by their stored `sort_order`, ties broken
    /// by row id.
    async fn fetch_snapshot(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<SnapshotResult, SnapshotQueryError>;

    /// Located via the snapshot's back-reference to the application.
    async fn fetch_by_application(
        &self,
        owner: UserId,
        application_id: Uuid,
    ) -> Result<SnapshotResult, SnapshotQueryError>;
}
