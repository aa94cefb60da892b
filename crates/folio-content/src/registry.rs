#![forbid(unsafe_code)]

//! Case-study registry: project id → document constructor.
//!
//! Pure lookup with no failure mode beyond absence. Projects without a
//! written case study get `None`; the detail page renders
//! [`studies::placeholder`] in that case, which carries no headings and
//! therefore no table of contents.
//!
//! [`studies::placeholder`]: crate::studies::placeholder

use crate::document::Document;
use crate::project::ProjectId;
use crate::studies;

type StudyFn = fn() -> Document;

/// Registered case studies, keyed by project id.
const STUDIES: &[(ProjectId, StudyFn)] = &[(ProjectId(1), studies::icons)];

/// Look up the case study for a project.
pub fn case_study_for(id: ProjectId) -> Option<Document> {
    STUDIES
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, build)| build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::outline;
    use crate::project::PROJECTS;

    #[test]
    fn registered_ids_refer_to_listed_projects() {
        for (id, _) in STUDIES {
            assert!(
                PROJECTS.iter().any(|p| p.id == *id),
                "study registered for unknown project {id}"
            );
        }
    }

    #[test]
    fn unregistered_project_has_no_study() {
        assert!(case_study_for(ProjectId(2)).is_none());
        assert!(case_study_for(ProjectId(999)).is_none());
    }

    #[test]
    fn icons_study_resolves_with_outline() {
        let doc = case_study_for(ProjectId(1)).expect("icons study registered");
        let items = outline(&doc);
        assert!(!items.is_empty(), "icons study must have outline entries");
    }

    #[test]
    fn lookup_is_pure() {
        let a = case_study_for(ProjectId(1)).expect("study");
        let b = case_study_for(ProjectId(1)).expect("study");
        assert_eq!(a, b);
    }
}
