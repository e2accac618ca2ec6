use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::cv::application::cv_use_cases::CvUseCases;
use crate::job_application::application::application_use_cases::ApplicationUseCases;
use crate::library::application::library_use_cases::{
    EducationUseCases, LibraryUseCases, ProjectUseCases, SkillUseCases, WorkExperienceUseCases,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::snapshot::application::snapshot_use_cases::SnapshotUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Route-test scaffolding: every use case starts as a stub, a test swaps in
/// the one it exercises, and `build` hands back the two `app_data` values a
/// handler expects (state + token provider answering with `user_id`).
pub struct TestAppStateBuilder {
    pub user_id: Uuid,
    pub library: LibraryUseCases,
    pub cvs: CvUseCases,
    pub applications: ApplicationUseCases,
    pub snapshots: SnapshotUseCases,
    pub profile: ProfileUseCases,
}

impl TestAppStateBuilder {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            library: LibraryUseCases {
                work_experiences: WorkExperienceUseCases {
                    create: Arc::new(StubCreateWorkExperience),
                    list: Arc::new(StubListWorkExperiences),
                    patch: Arc::new(StubPatchWorkExperience),
                    delete: Arc::new(StubDeleteWorkExperience::default()),
                },
                educations: EducationUseCases {
                    create: Arc::new(StubCreateEducation),
                    list: Arc::new(StubListEducations),
                    patch: Arc::new(StubPatchEducation),
                    delete: Arc::new(StubDeleteEducation),
                },
                skills: SkillUseCases {
                    create: Arc::new(StubCreateSkill),
                    list: Arc::new(StubListSkills),
                    patch: Arc::new(StubPatchSkill),
                    delete: Arc::new(StubDeleteSkill),
                },
                projects: ProjectUseCases {
                    create: Arc::new(StubCreateLibraryProject),
                    list: Arc::new(StubListLibraryProjects),
                    patch: Arc::new(StubPatchLibraryProject),
                    delete: Arc::new(StubDeleteLibraryProject),
                },
            },
            cvs: CvUseCases {
                create: Arc::new(StubCreateCv),
                get_list: Arc::new(StubGetCvs),
                get_composed: Arc::new(StubGetComposedCv::not_found()),
                patch: Arc::new(StubPatchCv),
                delete: Arc::new(StubDeleteCv),
                add_inclusion: Arc::new(StubAddInclusion::ok()),
                remove_inclusion: Arc::new(StubRemoveInclusion),
                reorder_inclusion: Arc::new(StubReorderInclusion),
            },
            applications: ApplicationUseCases {
                create: Arc::new(StubCreateApplication),
                get_list: Arc::new(StubListApplications),
                get_single: Arc::new(StubGetApplication),
                patch: Arc::new(StubPatchApplication),
                delete: Arc::new(StubDeleteApplication),
            },
            snapshots: SnapshotUseCases {
                create: Arc::new(StubCreateSnapshot::cv_not_found()),
                get_single: Arc::new(StubGetSnapshot::not_found()),
                get_by_application: Arc::new(StubGetApplicationSnapshot),
                delete: Arc::new(StubDeleteSnapshot),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfile),
            },
        }
    }

    pub fn build(
        self,
    ) -> (
        web::Data<AppState>,
        web::Data<Arc<dyn TokenProvider + Send + Sync>>,
    ) {
        let state = AppState {
            library: self.library,
            cvs: self.cvs,
            applications: self.applications,
            snapshots: self.snapshots,
            profile: self.profile,
        };

        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider {
            user_id: self.user_id,
        });

        (web::Data::new(state), web::Data::new(token_provider))
    }
}
