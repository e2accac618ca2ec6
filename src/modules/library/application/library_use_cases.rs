use std::sync::Arc;

use crate::library::application::ports::incoming::use_cases::{
    CreateEducationUseCase, CreateProjectUseCase, CreateSkillUseCase, CreateWorkExperienceUseCase,
    DeleteEducationUseCase, DeleteProjectUseCase, DeleteSkillUseCase, DeleteWorkExperienceUseCase,
    ListEducationsUseCase, ListProjectsUseCase, ListSkillsUseCase, ListWorkExperiencesUseCase,
    PatchEducationUseCase, PatchProjectUseCase, PatchSkillUseCase, PatchWorkExperienceUseCase,
};

#[derive(Clone)]
pub struct WorkExperienceUseCases {
    pub create: Arc<dyn CreateWorkExperienceUseCase + Send + Sync>,
    pub list: Arc<dyn ListWorkExperiencesUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchWorkExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteWorkExperienceUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct EducationUseCases {
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub list: Arc<dyn ListEducationsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct SkillUseCases {
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}

/// One bundle per master kind; the four together form the library store.
#[derive(Clone)]
pub struct LibraryUseCases {
    pub work_experiences: WorkExperienceUseCases,
    pub educations: EducationUseCases,
    pub skills: SkillUseCases,
    pub projects: ProjectUseCases,
}
