use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::ComposedCv;
use crate::profile::application::domain::entities::UserProfile;

// A snapshot is built fully formed before anything touches the store. Every
// field below is an owned value; nothing borrows from or points back at the
// library rows it was copied from, which is what keeps a committed snapshot
// immune to later edits.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDraft {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkEntryDraft {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub summary: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntryDraft {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntryDraft {
    pub name: String,
    pub proficiency: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntryDraft {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tech_stack: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDraft {
    pub owner: UserId,
    pub source_cv_id: Uuid,
    pub application_id: Option<Uuid>,
    pub title: String,
    pub template: String,
    pub header: HeaderDraft,
    pub work_experiences: Vec<WorkEntryDraft>,
    pub educations: Vec<EducationEntryDraft>,
    pub skills: Vec<SkillEntryDraft>,
    pub projects: Vec<ProjectEntryDraft>,
}

impl SnapshotDraft {
    /// Flattens a composed CV and the owner's current profile into one
    /// value copy. Section order is taken as-is from the composed read.
    /// The CV's override summary, when set, replaces the profile summary:
    /// the snapshot freezes the composed document, not the raw profile.
    pub fn from_composition(
        composed: ComposedCv,
        profile: &UserProfile,
        application_id: Option<Uuid>,
    ) -> Self {
        let document = composed.document;
        let summary = document
            .override_summary
            .clone()
            .or_else(|| profile.summary.clone());

        Self {
            owner: document.owner,
            source_cv_id: document.id,
            application_id,
            title: document.title,
            template: document.template,
            header: HeaderDraft {
                full_name: profile.full_name.clone(),
                headline: profile.headline.clone(),
                email: profile.email.clone(),
                phone: profile.phone.clone(),
                location: profile.location.clone(),
                website: profile.website.clone(),
                summary,
                photo_url: profile.photo_url.clone(),
            },
            work_experiences: composed
                .work_experiences
                .into_iter()
                .map(|inc| WorkEntryDraft {
                    company: inc.item.company,
                    role: inc.item.role,
                    location: inc.item.location,
                    start_date: inc.item.start_date,
                    end_date: inc.item.end_date,
                    is_current: inc.item.is_current,
                    summary: inc.item.summary,
                    sort_order: inc.sort_order,
                })
                .collect(),
            educations: composed
                .educations
                .into_iter()
                .map(|inc| EducationEntryDraft {
                    institution: inc.item.institution,
                    degree: inc.item.degree,
                    field_of_study: inc.item.field_of_study,
                    start_date: inc.item.start_date,
                    end_date: inc.item.end_date,
                    description: inc.item.description,
                    sort_order: inc.sort_order,
                })
                .collect(),
            skills: composed
                .skills
                .into_iter()
                .map(|inc| SkillEntryDraft {
                    name: inc.item.name,
                    proficiency: inc.item.proficiency,
                    sort_order: inc.sort_order,
                })
                .collect(),
            projects: composed
                .projects
                .into_iter()
                .map(|inc| ProjectEntryDraft {
                    name: inc.item.name,
                    description: inc.item.description,
                    url: inc.item.url,
                    tech_stack: inc.item.tech_stack,
                    start_date: inc.item.start_date,
                    end_date: inc.item.end_date,
                    sort_order: inc.sort_order,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::cv::application::ports::outgoing::{CvResult, Included};
    use crate::library::application::ports::outgoing::{SkillResult, WorkExperienceResult};

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn cv(owner: UserId, override_summary: Option<&str>) -> CvResult {
        let now = Utc::now();
        CvResult {
            id: Uuid::new_v4(),
            owner,
            title: "Backend Resume".to_string(),
            template: "classic".to_string(),
            is_default: true,
            override_summary: override_summary.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    fn work(owner: UserId, role: &str) -> WorkExperienceResult {
        let now = Utc::now();
        WorkExperienceResult {
            id: Uuid::new_v4(),
            owner,
            company: "Acme".to_string(),
            role: role.to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn skill(owner: UserId, name: &str) -> SkillResult {
        let now = Utc::now();
        SkillResult {
            id: Uuid::new_v4(),
            owner,
            name: name.to_string(),
            proficiency: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn composed(owner: UserId, override_summary: Option<&str>) -> ComposedCv {
        ComposedCv {
            document: cv(owner, override_summary),
            work_experiences: vec![Included {
                sort_order: 0,
                item: work(owner, "Engineer"),
            }],
            educations: vec![],
            skills: vec![
                Included {
                    sort_order: 5,
                    item: skill(owner, "Rust"),
                },
                Included {
                    sort_order: 9,
                    item: skill(owner, "Postgres"),
                },
            ],
            projects: vec![],
        }
    }

    fn profile(owner: UserId) -> UserProfile {
        UserProfile {
            owner,
            full_name: Some("Jane Doe".to_string()),
            headline: Some("Backend Engineer".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: None,
            location: None,
            website: None,
            summary: Some("Profile summary".to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn copies_profile_fields_into_the_header() {
        let owner = owner();
        let draft = SnapshotDraft::from_composition(composed(owner, None), &profile(owner), None);

        assert_eq!(draft.header.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(draft.header.summary.as_deref(), Some("Profile summary"));
    }

    #[test]
    fn override_summary_wins_over_profile_summary() {
        let owner = owner();
        let draft = SnapshotDraft::from_composition(
            composed(owner, Some("Tailored for Acme")),
            &profile(owner),
            None,
        );

        assert_eq!(draft.header.summary.as_deref(), Some("Tailored for Acme"));
    }

    #[test]
    fn preserves_section_order_and_sort_values() {
        let owner = owner();
        let draft = SnapshotDraft::from_composition(composed(owner, None), &profile(owner), None);

        assert_eq!(draft.skills.len(), 2);
        assert_eq!(draft.skills[0].name, "Rust");
        assert_eq!(draft.skills[0].sort_order, 5);
        assert_eq!(draft.skills[1].name, "Postgres");
        assert_eq!(draft.skills[1].sort_order, 9);
    }

    #[test]
    fn draft_owns_its_values_independently_of_the_sources() {
        let owner = owner();
        let mut source = composed(owner, None);
        let mut prof = profile(owner);

        let draft =
            SnapshotDraft::from_composition(source.clone(), &prof, Some(Uuid::new_v4()));

        // Mutate everything the draft was built from.
        source.work_experiences[0].item.role = "Senior Engineer".to_string();
        prof.full_name = Some("Someone Else".to_string());

        assert_eq!(draft.work_experiences[0].role, "Engineer");
        assert_eq!(draft.header.full_name.as_deref(), Some("Jane Doe"));
    }
}
