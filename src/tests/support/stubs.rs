// Default stubs for every use-case trait in the AppState bundles. A route
// test overrides the one or two cases it exercises; any stub the test was
// not supposed to reach panics loudly instead of faking an answer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::cv::application::ports::incoming::use_cases::{
    AddInclusionError, AddInclusionUseCase, CreateCvCommand, CreateCvError, CreateCvUseCase,
    DeleteCvError, DeleteCvUseCase, GetComposedCvError, GetComposedCvUseCase, GetCvsError,
    GetCvsUseCase, PatchCvCommand, PatchCvError, PatchCvUseCase, RemoveInclusionError,
    RemoveInclusionUseCase, ReorderInclusionError, ReorderInclusionUseCase,
};
use crate::cv::application::ports::outgoing::{ComposedCv, CvResult, CvSection};
use crate::job_application::application::ports::incoming::use_cases::{
    CreateApplicationCommand, CreateApplicationError, CreateApplicationUseCase,
    DeleteApplicationError, DeleteApplicationUseCase, GetApplicationError, GetApplicationUseCase,
    ListApplicationsError, ListApplicationsUseCase, PatchApplicationCommand,
    PatchApplicationError, PatchApplicationUseCase,
};
use crate::job_application::application::ports::outgoing::ApplicationResult;
use crate::library::application::ports::incoming::use_cases::{
    CreateEducationCommand, CreateEducationError, CreateEducationUseCase, CreateProjectCommand,
    CreateProjectError, CreateProjectUseCase, CreateSkillCommand, CreateSkillError,
    CreateSkillUseCase, CreateWorkExperienceCommand, CreateWorkExperienceError,
    CreateWorkExperienceUseCase, DeleteEducationError, DeleteEducationUseCase, DeleteProjectError,
    DeleteProjectUseCase, DeleteSkillError, DeleteSkillUseCase, DeleteWorkExperienceError,
    DeleteWorkExperienceUseCase, ListEducationsError, ListEducationsUseCase, ListProjectsError,
    ListProjectsUseCase, ListSkillsError, ListSkillsUseCase, ListWorkExperiencesError,
    ListWorkExperiencesUseCase, PatchEducationCommand, PatchEducationError, PatchEducationUseCase,
    PatchProjectCommand, PatchProjectError, PatchProjectUseCase, PatchSkillCommand,
    PatchSkillError, PatchSkillUseCase, PatchWorkExperienceCommand, PatchWorkExperienceError,
    PatchWorkExperienceUseCase,
};
use crate::library::application::ports::outgoing::{
    EducationResult, ProjectResult, SkillResult, WorkExperienceResult,
};
use crate::profile::application::domain::entities::UserProfile;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::snapshot::application::ports::incoming::use_cases::{
    CreateSnapshotError, CreateSnapshotUseCase, DeleteSnapshotError, DeleteSnapshotUseCase,
    GetApplicationSnapshotError, GetApplicationSnapshotUseCase, GetSnapshotError,
    GetSnapshotUseCase,
};
use crate::snapshot::application::ports::outgoing::SnapshotResult;

// ============================================================
// Token provider
// ============================================================

#[derive(Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: "access".to_string(),
        })
    }
}

// ============================================================
// Library
// ============================================================

pub struct StubCreateWorkExperience;

#[async_trait]
impl CreateWorkExperienceUseCase for StubCreateWorkExperience {
    async fn execute(
        &self,
        _command: CreateWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, CreateWorkExperienceError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubListWorkExperiences;

#[async_trait]
impl ListWorkExperiencesUseCase for StubListWorkExperiences {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<WorkExperienceResult>, ListWorkExperiencesError> {
        Ok(vec![])
    }
}

pub struct StubPatchWorkExperience;

#[async_trait]
impl PatchWorkExperienceUseCase for StubPatchWorkExperience {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: PatchWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, PatchWorkExperienceError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteWorkExperience {
    result: Result<(), DeleteWorkExperienceError>,
}

impl StubDeleteWorkExperience {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteWorkExperienceError::NotFound),
        }
    }
}

impl Default for StubDeleteWorkExperience {
    fn default() -> Self {
        Self::ok()
    }
}

#[async_trait]
impl DeleteWorkExperienceUseCase for StubDeleteWorkExperience {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteWorkExperienceError> {
        self.result.clone()
    }
}

pub struct StubCreateEducation;

#[async_trait]
impl CreateEducationUseCase for StubCreateEducation {
    async fn execute(
        &self,
        _command: CreateEducationCommand,
    ) -> Result<EducationResult, CreateEducationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubListEducations;

#[async_trait]
impl ListEducationsUseCase for StubListEducations {
    async fn execute(&self, _owner: UserId) -> Result<Vec<EducationResult>, ListEducationsError> {
        Ok(vec![])
    }
}

pub struct StubPatchEducation;

#[async_trait]
impl PatchEducationUseCase for StubPatchEducation {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: PatchEducationCommand,
    ) -> Result<EducationResult, PatchEducationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteEducation;

#[async_trait]
impl DeleteEducationUseCase for StubDeleteEducation {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteEducationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubCreateSkill;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkill {
    async fn execute(&self, _command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubListSkills;

#[async_trait]
impl ListSkillsUseCase for StubListSkills {
    async fn execute(&self, _owner: UserId) -> Result<Vec<SkillResult>, ListSkillsError> {
        Ok(vec![])
    }
}

pub struct StubPatchSkill;

#[async_trait]
impl PatchSkillUseCase for StubPatchSkill {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: PatchSkillCommand,
    ) -> Result<SkillResult, PatchSkillError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteSkill;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkill {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteSkillError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubCreateLibraryProject;

#[async_trait]
impl CreateProjectUseCase for StubCreateLibraryProject {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubListLibraryProjects;

#[async_trait]
impl ListProjectsUseCase for StubListLibraryProjects {
    async fn execute(&self, _owner: UserId) -> Result<Vec<ProjectResult>, ListProjectsError> {
        Ok(vec![])
    }
}

pub struct StubPatchLibraryProject;

#[async_trait]
impl PatchProjectUseCase for StubPatchLibraryProject {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: PatchProjectCommand,
    ) -> Result<ProjectResult, PatchProjectError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteLibraryProject;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteLibraryProject {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================
// CVs
// ============================================================

pub struct StubCreateCv;

#[async_trait]
impl CreateCvUseCase for StubCreateCv {
    async fn execute(&self, _command: CreateCvCommand) -> Result<CvResult, CreateCvError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubGetCvs;

#[async_trait]
impl GetCvsUseCase for StubGetCvs {
    async fn execute(&self, _owner: UserId) -> Result<Vec<CvResult>, GetCvsError> {
        Ok(vec![])
    }
}

pub struct StubGetComposedCv {
    result: Result<ComposedCv, GetComposedCvError>,
}

impl StubGetComposedCv {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetComposedCvError::NotFound),
        }
    }

    pub fn success(composed: ComposedCv) -> Self {
        Self {
            result: Ok(composed),
        }
    }
}

#[async_trait]
impl GetComposedCvUseCase for StubGetComposedCv {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
    ) -> Result<ComposedCv, GetComposedCvError> {
        self.result.clone()
    }
}

pub struct StubPatchCv;

#[async_trait]
impl PatchCvUseCase for StubPatchCv {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
        _command: PatchCvCommand,
    ) -> Result<CvResult, PatchCvError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteCv;

#[async_trait]
impl DeleteCvUseCase for StubDeleteCv {
    async fn execute(&self, _owner: UserId, _cv_id: Uuid) -> Result<(), DeleteCvError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubAddInclusion {
    result: Result<(), AddInclusionError>,
}

impl StubAddInclusion {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn item_not_found() -> Self {
        Self {
            result: Err(AddInclusionError::ItemNotFound),
        }
    }

    pub fn already_included() -> Self {
        Self {
            result: Err(AddInclusionError::AlreadyIncluded),
        }
    }
}

#[async_trait]
impl AddInclusionUseCase for StubAddInclusion {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
        _section: CvSection,
        _item_id: Uuid,
        _sort_order: i32,
    ) -> Result<(), AddInclusionError> {
        self.result.clone()
    }
}

pub struct StubRemoveInclusion;

#[async_trait]
impl RemoveInclusionUseCase for StubRemoveInclusion {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
        _section: CvSection,
        _item_id: Uuid,
    ) -> Result<(), RemoveInclusionError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubReorderInclusion;

#[async_trait]
impl ReorderInclusionUseCase for StubReorderInclusion {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
        _section: CvSection,
        _item_id: Uuid,
        _sort_order: i32,
    ) -> Result<(), ReorderInclusionError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================
// Applications
// ============================================================

pub struct StubCreateApplication;

#[async_trait]
impl CreateApplicationUseCase for StubCreateApplication {
    async fn execute(
        &self,
        _command: CreateApplicationCommand,
    ) -> Result<ApplicationResult, CreateApplicationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubListApplications;

#[async_trait]
impl ListApplicationsUseCase for StubListApplications {
    async fn execute(
        &self,
        _owner: UserId,
    ) -> Result<Vec<ApplicationResult>, ListApplicationsError> {
        Ok(vec![])
    }
}

pub struct StubGetApplication;

#[async_trait]
impl GetApplicationUseCase for StubGetApplication {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
    ) -> Result<ApplicationResult, GetApplicationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubPatchApplication;

#[async_trait]
impl PatchApplicationUseCase for StubPatchApplication {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: PatchApplicationCommand,
    ) -> Result<ApplicationResult, PatchApplicationError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubDeleteApplication;

#[async_trait]
impl DeleteApplicationUseCase for StubDeleteApplication {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), DeleteApplicationError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================
// Snapshots
// ============================================================

pub struct StubCreateSnapshot {
    result: Result<SnapshotResult, CreateSnapshotError>,
}

impl StubCreateSnapshot {
    pub fn cv_not_found() -> Self {
        Self {
            result: Err(CreateSnapshotError::CvNotFound),
        }
    }

    pub fn conflict() -> Self {
        Self {
            result: Err(CreateSnapshotError::Conflict),
        }
    }

    pub fn success(snapshot: SnapshotResult) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }
}

#[async_trait]
impl CreateSnapshotUseCase for StubCreateSnapshot {
    async fn execute(
        &self,
        _owner: UserId,
        _cv_id: Uuid,
        _application_id: Option<Uuid>,
    ) -> Result<SnapshotResult, CreateSnapshotError> {
        self.result.clone()
    }
}

pub struct StubGetSnapshot {
    result: Result<SnapshotResult, GetSnapshotError>,
}

impl StubGetSnapshot {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSnapshotError::NotFound),
        }
    }

    pub fn success(snapshot: SnapshotResult) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }
}

#[async_trait]
impl GetSnapshotUseCase for StubGetSnapshot {
    async fn execute(
        &self,
        _owner: UserId,
        _snapshot_id: Uuid,
    ) -> Result<SnapshotResult, GetSnapshotError> {
        self.result.clone()
    }
}

pub struct StubGetApplicationSnapshot;

#[async_trait]
impl GetApplicationSnapshotUseCase for StubGetApplicationSnapshot {
    async fn execute(
        &self,
        _owner: UserId,
        _application_id: Uuid,
    ) -> Result<SnapshotResult, GetApplicationSnapshotError> {
        Err(GetApplicationSnapshotError::NotFound)
    }
}

pub struct StubDeleteSnapshot;

#[async_trait]
impl DeleteSnapshotUseCase for StubDeleteSnapshot {
    async fn execute(&self, _owner: UserId, _snapshot_id: Uuid) -> Result<(), DeleteSnapshotError> {
        unimplemented!("not used in this test")
    }
}

// ============================================================
// Profile
// ============================================================

pub struct StubGetProfile;

#[async_trait]
impl GetProfileUseCase for StubGetProfile {
    async fn execute(&self, owner: UserId) -> Result<UserProfile, GetProfileError> {
        Ok(UserProfile::empty(owner))
    }
}
