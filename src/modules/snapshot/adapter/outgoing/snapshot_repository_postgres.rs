use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, QueryFilter, Set, SqlErr, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::adapter::outgoing::sea_orm_entity::cv_documents::{
    Column as CvColumn, Entity as CvEntity,
};
use crate::cv::application::ports::outgoing::{ComposedCv, Included};
use crate::library::application::ports::outgoing::{
    EducationResult, ProjectResult, SkillResult, WorkExperienceResult,
};
use crate::profile::adapter::outgoing::sea_orm_entity::Entity as ProfileEntity;
use crate::profile::application::domain::entities::UserProfile;
use crate::snapshot::application::domain::entities::SnapshotDraft;
use crate::snapshot::application::ports::outgoing::{
    SnapshotEducationEntryView, SnapshotHeaderView, SnapshotProjectEntryView, SnapshotRepository,
    SnapshotRepositoryError, SnapshotResult, SnapshotSkillEntryView, SnapshotWorkEntryView,
};

use super::sea_orm_entity::{
    snapshot_education_entries, snapshot_headers, snapshot_project_entries, snapshot_skill_entries,
    snapshot_work_entries, snapshots,
};

#[derive(Debug, Clone)]
pub struct SnapshotRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

// The inclusion joins mirror the composed read exactly, so a snapshot
// freezes the same ordering a caller saw when reading the CV:
// sort_order, then inclusion insertion time, then item id.
const WORK_JOIN_SQL: &str = r#"
SELECT i.id, i.user_id, i.company, i.role, i.location, i.start_date, i.end_date,
       i.is_current, i.summary, i.created_at, i.updated_at, l.sort_order
FROM cv_work_inclusions l
JOIN library_work_experiences i ON i.id = l.item_id
WHERE l.cv_id = $1
ORDER BY l.sort_order ASC, l.created_at ASC, i.id ASC
"#;

const EDUCATION_JOIN_SQL: &str = r#"
SELECT i.id, i.user_id, i.institution, i.degree, i.field_of_study, i.start_date,
       i.end_date, i.description, i.created_at, i.updated_at, l.sort_order
FROM cv_education_inclusions l
JOIN library_educations i ON i.id = l.item_id
WHERE l.cv_id = $1
ORDER BY l.sort_order ASC, l.created_at ASC, i.id ASC
"#;

const SKILL_JOIN_SQL: &str = r#"
SELECT i.id, i.user_id, i.name, i.proficiency, i.created_at, i.updated_at, l.sort_order
FROM cv_skill_inclusions l
JOIN library_skills i ON i.id = l.item_id
WHERE l.cv_id = $1
ORDER BY l.sort_order ASC, l.created_at ASC, i.id ASC
"#;

const PROJECT_JOIN_SQL: &str = r#"
SELECT i.id, i.user_id, i.name, i.description, i.url, i.tech_stack, i.start_date,
       i.end_date, i.created_at, i.updated_at, l.sort_order
FROM cv_project_inclusions l
JOIN library_projects i ON i.id = l.item_id
WHERE l.cv_id = $1
ORDER BY l.sort_order ASC, l.created_at ASC, i.id ASC
"#;

#[derive(FromQueryResult)]
struct WorkRow {
    id: Uuid,
    user_id: Uuid,
    company: String,
    role: String,
    location: Option<String>,
    start_date: chrono::NaiveDate,
    end_date: Option<chrono::NaiveDate>,
    is_current: bool,
    summary: Option<String>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
    updated_at: chrono::DateTime<chrono::FixedOffset>,
    sort_order: i32,
}

#[derive(FromQueryResult)]
struct EducationRow {
    id: Uuid,
    user_id: Uuid,
    institution: String,
    degree: String,
    field_of_study: Option<String>,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
    updated_at: chrono::DateTime<chrono::FixedOffset>,
    sort_order: i32,
}

#[derive(FromQueryResult)]
struct SkillRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    proficiency: Option<String>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
    updated_at: chrono::DateTime<chrono::FixedOffset>,
    sort_order: i32,
}

#[derive(FromQueryResult)]
struct ProjectRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    url: Option<String>,
    tech_stack: serde_json::Value,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
    updated_at: chrono::DateTime<chrono::FixedOffset>,
    sort_order: i32,
}

impl SnapshotRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SnapshotRepositoryError {
        SnapshotRepositoryError::DatabaseError(e.to_string())
    }

    /// The partial unique index on (application_id) surfaces the
    /// concurrent-replace race as a unique violation; everything else is an
    /// infrastructure failure.
    fn map_insert_err(e: DbErr) -> SnapshotRepositoryError {
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            SnapshotRepositoryError::Conflict
        } else {
            Self::map_db_err(e)
        }
    }

    fn join_stmt(sql: &str, cv_id: Uuid) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [cv_id.into()])
    }

    /// Re-read the CV's composition inside the snapshot transaction.
    async fn load_composition(
        txn: &DatabaseTransaction,
        document: crate::cv::application::ports::outgoing::CvResult,
    ) -> Result<ComposedCv, SnapshotRepositoryError> {
        let cv_id = document.id;

        let work_experiences = WorkRow::find_by_statement(Self::join_stmt(WORK_JOIN_SQL, cv_id))
            .all(txn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|r| Included {
                sort_order: r.sort_order,
                item: WorkExperienceResult {
                    id: r.id,
                    owner: UserId::from(r.user_id),
                    company: r.company,
                    role: r.role,
                    location: r.location,
                    start_date: r.start_date,
                    end_date: r.end_date,
                    is_current: r.is_current,
                    summary: r.summary,
                    created_at: r.created_at.into(),
                    updated_at: r.updated_at.into(),
                },
            })
            .collect();

        let educations =
            EducationRow::find_by_statement(Self::join_stmt(EDUCATION_JOIN_SQL, cv_id))
                .all(txn)
                .await
                .map_err(Self::map_db_err)?
                .into_iter()
                .map(|r| Included {
                    sort_order: r.sort_order,
                    item: EducationResult {
                        id: r.id,
                        owner: UserId::from(r.user_id),
                        institution: r.institution,
                        degree: r.degree,
                        field_of_study: r.field_of_study,
                        start_date: r.start_date,
                        end_date: r.end_date,
                        description: r.description,
                        created_at: r.created_at.into(),
                        updated_at: r.updated_at.into(),
                    },
                })
                .collect();

        let skills = SkillRow::find_by_statement(Self::join_stmt(SKILL_JOIN_SQL, cv_id))
            .all(txn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|r| Included {
                sort_order: r.sort_order,
                item: SkillResult {
                    id: r.id,
                    owner: UserId::from(r.user_id),
                    name: r.name,
                    proficiency: r.proficiency,
                    created_at: r.created_at.into(),
                    updated_at: r.updated_at.into(),
                },
            })
            .collect();

        let projects = ProjectRow::find_by_statement(Self::join_stmt(PROJECT_JOIN_SQL, cv_id))
            .all(txn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(|r| Included {
                sort_order: r.sort_order,
                item: ProjectResult {
                    id: r.id,
                    owner: UserId::from(r.user_id),
                    name: r.name,
                    description: r.description,
                    url: r.url,
                    tech_stack: serde_json::from_value(r.tech_stack).unwrap_or_default(),
                    start_date: r.start_date,
                    end_date: r.end_date,
                    created_at: r.created_at.into(),
                    updated_at: r.updated_at.into(),
                },
            })
            .collect();

        Ok(ComposedCv {
            document,
            work_experiences,
            educations,
            skills,
            projects,
        })
    }

    async fn verify_application_owned(
        txn: &DatabaseTransaction,
        owner: Uuid,
        application_id: Uuid,
    ) -> Result<(), SnapshotRepositoryError> {
        #[derive(FromQueryResult)]
        struct AppOk {
            app_ok: bool,
        }

        let row = AppOk::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS (
                SELECT 1 FROM job_applications
                WHERE id = $1 AND user_id = $2
            ) AS app_ok
            "#,
            [application_id.into(), owner.into()],
        ))
        .one(txn)
        .await
        .map_err(Self::map_db_err)?;

        if !row.map(|r| r.app_ok).unwrap_or(false) {
            return Err(SnapshotRepositoryError::ApplicationNotFound);
        }

        Ok(())
    }

    /// Persist the draft and hand back the committed shape. Child ids are
    /// minted here so the result can be assembled without a re-read.
    async fn insert_draft(
        txn: &DatabaseTransaction,
        draft: &SnapshotDraft,
    ) -> Result<SnapshotResult, SnapshotRepositoryError> {
        let snapshot_id = Uuid::new_v4();
        let now = chrono::Utc::now().fixed_offset();

        snapshots::ActiveModel {
            id: Set(snapshot_id),
            user_id: Set(draft.owner.into()),
            source_cv_id: Set(draft.source_cv_id),
            application_id: Set(draft.application_id),
            title: Set(draft.title.clone()),
            template: Set(draft.template.clone()),
            created_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(Self::map_insert_err)?;

        snapshot_headers::ActiveModel {
            snapshot_id: Set(snapshot_id),
            full_name: Set(draft.header.full_name.clone()),
            headline: Set(draft.header.headline.clone()),
            email: Set(draft.header.email.clone()),
            phone: Set(draft.header.phone.clone()),
            location: Set(draft.header.location.clone()),
            website: Set(draft.header.website.clone()),
            summary: Set(draft.header.summary.clone()),
            photo_url: Set(draft.header.photo_url.clone()),
        }
        .insert(txn)
        .await
        .map_err(Self::map_db_err)?;

        let mut work_views = Vec::with_capacity(draft.work_experiences.len());
        let mut work_rows = Vec::with_capacity(draft.work_experiences.len());
        for entry in &draft.work_experiences {
            let id = Uuid::new_v4();
            work_rows.push(snapshot_work_entries::ActiveModel {
                id: Set(id),
                snapshot_id: Set(snapshot_id),
                company: Set(entry.company.clone()),
                role: Set(entry.role.clone()),
                location: Set(entry.location.clone()),
                start_date: Set(entry.start_date),
                end_date: Set(entry.end_date),
                is_current: Set(entry.is_current),
                summary: Set(entry.summary.clone()),
                sort_order: Set(entry.sort_order),
            });
            work_views.push(SnapshotWorkEntryView {
                id,
                company: entry.company.clone(),
                role: entry.role.clone(),
                location: entry.location.clone(),
                start_date: entry.start_date,
                end_date: entry.end_date,
                is_current: entry.is_current,
                summary: entry.summary.clone(),
                sort_order: entry.sort_order,
            });
        }
        if !work_rows.is_empty() {
            snapshot_work_entries::Entity::insert_many(work_rows)
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        let mut education_views = Vec::with_capacity(draft.educations.len());
        let mut education_rows = Vec::with_capacity(draft.educations.len());
        for entry in &draft.educations {
            let id = Uuid::new_v4();
            education_rows.push(snapshot_education_entries::ActiveModel {
                id: Set(id),
                snapshot_id: Set(snapshot_id),
                institution: Set(entry.institution.clone()),
                degree: Set(entry.degree.clone()),
                field_of_study: Set(entry.field_of_study.clone()),
                start_date: Set(entry.start_date),
                end_date: Set(entry.end_date),
                description: Set(entry.description.clone()),
                sort_order: Set(entry.sort_order),
            });
            education_views.push(SnapshotEducationEntryView {
                id,
                institution: entry.institution.clone(),
                degree: entry.degree.clone(),
                field_of_study: entry.field_of_study.clone(),
                start_date: entry.start_date,
                end_date: entry.end_date,
                description: entry.description.clone(),
                sort_order: entry.sort_order,
            });
        }
        if !education_rows.is_empty() {
            snapshot_education_entries::Entity::insert_many(education_rows)
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        let mut skill_views = Vec::with_capacity(draft.skills.len());
        let mut skill_rows = Vec::with_capacity(draft.skills.len());
        for entry in &draft.skills {
            let id = Uuid::new_v4();
            skill_rows.push(snapshot_skill_entries::ActiveModel {
                id: Set(id),
                snapshot_id: Set(snapshot_id),
                name: Set(entry.name.clone()),
                proficiency: Set(entry.proficiency.clone()),
                sort_order: Set(entry.sort_order),
            });
            skill_views.push(SnapshotSkillEntryView {
                id,
                name: entry.name.clone(),
                proficiency: entry.proficiency.clone(),
                sort_order: entry.sort_order,
            });
        }
        if !skill_rows.is_empty() {
            snapshot_skill_entries::Entity::insert_many(skill_rows)
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        let mut project_views = Vec::with_capacity(draft.projects.len());
        let mut project_rows = Vec::with_capacity(draft.projects.len());
        for entry in &draft.projects {
            let id = Uuid::new_v4();
            let tech_stack = serde_json::to_value(&entry.tech_stack)
                .map_err(|e| SnapshotRepositoryError::DatabaseError(e.to_string()))?;
            project_rows.push(snapshot_project_entries::ActiveModel {
                id: Set(id),
                snapshot_id: Set(snapshot_id),
                name: Set(entry.name.clone()),
                description: Set(entry.description.clone()),
                url: Set(entry.url.clone()),
                tech_stack: Set(tech_stack),
                start_date: Set(entry.start_date),
                end_date: Set(entry.end_date),
                sort_order: Set(entry.sort_order),
            });
            project_views.push(SnapshotProjectEntryView {
                id,
                name: entry.name.clone(),
                description: entry.description.clone(),
                url: entry.url.clone(),
                tech_stack: entry.tech_stack.clone(),
                start_date: entry.start_date,
                end_date: entry.end_date,
                sort_order: entry.sort_order,
            });
        }
        if !project_rows.is_empty() {
            snapshot_project_entries::Entity::insert_many(project_rows)
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        Ok(SnapshotResult {
            id: snapshot_id,
            owner: draft.owner,
            source_cv_id: draft.source_cv_id,
            application_id: draft.application_id,
            title: draft.title.clone(),
            template: draft.template.clone(),
            created_at: now.into(),
            header: SnapshotHeaderView {
                full_name: draft.header.full_name.clone(),
                headline: draft.header.headline.clone(),
                email: draft.header.email.clone(),
                phone: draft.header.phone.clone(),
                location: draft.header.location.clone(),
                website: draft.header.website.clone(),
                summary: draft.header.summary.clone(),
                photo_url: draft.header.photo_url.clone(),
            },
            work_experiences: work_views,
            educations: education_views,
            skills: skill_views,
            projects: project_views,
        })
    }
}

#[async_trait]
impl SnapshotRepository for SnapshotRepositoryPostgres {
    async fn create_snapshot(
        &self,
        owner: UserId,
        cv_id: Uuid,
        application_id: Option<Uuid>,
    ) -> Result<SnapshotResult, SnapshotRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // 1. The CV must exist and belong to the caller.
        let cv = CvEntity::find_by_id(cv_id)
            .filter(CvColumn::UserId.eq(owner.as_uuid()))
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SnapshotRepositoryError::CvNotFound)?;

        // 2-3. Same for the application; its previous snapshot is replaced,
        // never accumulated next to the new one.
        if let Some(application_id) = application_id {
            Self::verify_application_owned(&txn, owner.as_uuid(), application_id).await?;

            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM cv_snapshots WHERE application_id = $1"#,
                [application_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;
        }

        // 4. Current profile fields, copied verbatim; a missing profile row
        // yields an empty header.
        let profile = ProfileEntity::find_by_id(owner.as_uuid())
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_domain())
            .unwrap_or_else(|| UserProfile::empty(owner));

        // 5. The composition as of this transaction.
        let composed = Self::load_composition(&txn, cv.to_domain()).await?;
        let draft = SnapshotDraft::from_composition(composed, &profile, application_id);

        // 6. All-or-nothing persist.
        let result = Self::insert_draft(&txn, &draft).await?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(result)
    }

    async fn delete_snapshot(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<(), SnapshotRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM cv_snapshots WHERE id = $1 AND user_id = $2 RETURNING id"#,
            [snapshot_id.into(), owner.as_uuid().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        if result.is_none() {
            return Err(SnapshotRepositoryError::SnapshotNotFound);
        }

        Ok(())
    }
}
