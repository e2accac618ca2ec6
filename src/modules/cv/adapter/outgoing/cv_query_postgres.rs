use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::{ComposedCv, CvQuery, CvQueryError, Included};
use crate::library::application::ports::outgoing::{
    EducationResult, ProjectResult, SkillResult, WorkExperienceResult,
};

use super::sea_orm_entity::cv_documents::{Column as CvColumn, Entity as CvEntity};

#[derive(Debug, Clone)]
pub struct CvQueryPostgres {
    db: Arc<DatabaseConnection>,
}

// One join per section. `ORDER BY l.sort_order, l.created_at, i.id` is the
// documented composed-read ordering: caller-chosen order first, then
// inclusion insertion time, then item id.
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

impl WorkRow {
    fn into_included(self) -> Included<WorkExperienceResult> {
        Included {
            sort_order: self.sort_order,
            item: WorkExperienceResult {
                id: self.id,
                owner: UserId::from(self.user_id),
                company: self.company,
                role: self.role,
                location: self.location,
                start_date: self.start_date,
                end_date: self.end_date,
                is_current: self.is_current,
                summary: self.summary,
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
            },
        }
    }
}

impl EducationRow {
    fn into_included(self) -> Included<EducationResult> {
        Included {
            sort_order: self.sort_order,
            item: EducationResult {
                id: self.id,
                owner: UserId::from(self.user_id),
                institution: self.institution,
                degree: self.degree,
                field_of_study: self.field_of_study,
                start_date: self.start_date,
                end_date: self.end_date,
                description: self.description,
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
            },
        }
    }
}

impl SkillRow {
    fn into_included(self) -> Included<SkillResult> {
        Included {
            sort_order: self.sort_order,
            item: SkillResult {
                id: self.id,
                owner: UserId::from(self.user_id),
                name: self.name,
                proficiency: self.proficiency,
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
            },
        }
    }
}

impl ProjectRow {
    fn into_included(self) -> Included<ProjectResult> {
        Included {
            sort_order: self.sort_order,
            item: ProjectResult {
                id: self.id,
                owner: UserId::from(self.user_id),
                name: self.name,
                description: self.description,
                url: self.url,
                tech_stack: serde_json::from_value(self.tech_stack).unwrap_or_default(),
                start_date: self.start_date,
                end_date: self.end_date,
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
            },
        }
    }
}

impl CvQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvQueryError {
        CvQueryError::DatabaseError(e.to_string())
    }

    fn join_stmt(sql: &str, cv_id: Uuid) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [cv_id.into()])
    }
}

#[async_trait]
impl CvQuery for CvQueryPostgres {
    async fn fetch_composed(
        &self,
        owner: UserId,
        cv_id: Uuid,
    ) -> Result<ComposedCv, CvQueryError> {
        let cv = CvEntity::find_by_id(cv_id)
            .filter(CvColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CvQueryError::NotFound)?;

        let work_experiences = WorkRow::find_by_statement(Self::join_stmt(WORK_JOIN_SQL, cv_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(WorkRow::into_included)
            .collect();

        let educations =
            EducationRow::find_by_statement(Self::join_stmt(EDUCATION_JOIN_SQL, cv_id))
                .all(&*self.db)
                .await
                .map_err(Self::map_db_err)?
                .into_iter()
                .map(EducationRow::into_included)
                .collect();

        let skills = SkillRow::find_by_statement(Self::join_stmt(SKILL_JOIN_SQL, cv_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(SkillRow::into_included)
            .collect();

        let projects = ProjectRow::find_by_statement(Self::join_stmt(PROJECT_JOIN_SQL, cv_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(ProjectRow::into_included)
            .collect();

        Ok(ComposedCv {
            document: cv.to_domain(),
            work_experiences,
            educations,
            skills,
            projects,
        })
    }
}
