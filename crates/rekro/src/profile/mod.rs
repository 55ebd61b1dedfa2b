//! Profile completion scoring and badge unlocking.

pub mod checks;
pub mod domain;
pub mod router;
pub mod scorer;

#[cfg(test)]
mod tests;

pub use checks::{section_checks, CompletionCheck, ProfileSnapshot};
pub use domain::{
    Badge, CheckOutcome, DocumentKey, DocumentMetadata, EmploymentStatus, PersonalDetails,
    ProfileCompletion, ProfileCompletionDetails, ProfileDraft, ProfileSection, SectionId,
    StudentStatus, UploadedDocuments, UserRecord,
};
pub use router::{profile_router, CompletionRequest};
pub use scorer::{evaluate_section, score_profile, unlocked_badges};
