use tracing::debug;

use super::checks::{completion_percentage, filled, section_checks, ProfileSnapshot};
use super::domain::{
    Badge, CheckOutcome, ProfileCompletion, ProfileDraft, ProfileSection, SectionId,
    UploadedDocuments, UserRecord,
};

/// Score a user's profile from the persisted record, unsaved edits and
/// uploaded documents.
///
/// An absent user still gets section percentages for whatever the draft
/// holds, but is never complete and never earns badges.
pub fn score_profile(
    user: Option<&UserRecord>,
    draft: &ProfileDraft,
    documents: &UploadedDocuments,
) -> ProfileCompletion {
    let stored = user.cloned().unwrap_or_default();
    let snapshot = ProfileSnapshot {
        personal: stored.personal.overlay(&draft.personal),
        details: stored.details.overlay(&draft.details),
        documents,
    };

    let sections: Vec<ProfileSection> = SectionId::ALL
        .into_iter()
        .map(|id| evaluate_section(id, &snapshot))
        .collect();

    let overall_percentage = overall_percentage(&sections);
    let all_required_complete = sections
        .iter()
        .filter(|section| section.required)
        .all(|section| section.completed);

    let Some(user) = user else {
        debug!(overall_percentage, "scored profile without a user record");
        return ProfileCompletion {
            sections,
            overall_percentage,
            is_complete: false,
            badges: Vec::new(),
        };
    };

    let badges = unlocked_badges(user, &sections);

    ProfileCompletion {
        sections,
        overall_percentage,
        is_complete: all_required_complete,
        badges,
    }
}

pub fn evaluate_section(id: SectionId, snapshot: &ProfileSnapshot<'_>) -> ProfileSection {
    let checks: Vec<CheckOutcome> = section_checks(id, snapshot)
        .iter()
        .map(|check| check.evaluate(snapshot))
        .collect();
    let passed = checks.iter().filter(|check| check.passed).count();
    let completion_percentage = completion_percentage(passed, checks.len());

    ProfileSection {
        id,
        title: id.title(),
        completion_percentage,
        required: id.required(),
        completed: completion_percentage == 100,
        checks,
    }
}

/// Rounded mean of the required sections only.
fn overall_percentage(sections: &[ProfileSection]) -> u8 {
    let required: Vec<u32> = sections
        .iter()
        .filter(|section| section.required)
        .map(|section| u32::from(section.completion_percentage))
        .collect();

    if required.is_empty() {
        return 0;
    }

    let mean = f64::from(required.iter().sum::<u32>()) / required.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

fn section_complete(sections: &[ProfileSection], id: SectionId) -> bool {
    sections
        .iter()
        .any(|section| section.id == id && section.completed)
}

/// Badges earned by `user`. Rekro Trusted reads the stored record only, never
/// the draft.
pub fn unlocked_badges(user: &UserRecord, sections: &[ProfileSection]) -> Vec<Badge> {
    let mut badges = Vec::new();

    if filled(&user.image) && filled(&user.personal.full_name) && filled(&user.personal.phone) {
        badges.push(Badge::RekroTrusted);
    }

    if section_complete(sections, SectionId::PersonalDetails) && user.discoverable {
        badges.push(Badge::ReadyToConnect);
    }

    let rent_pass = [
        SectionId::VisaDetails,
        SectionId::IncomeDetails,
        SectionId::PersonalDetails,
        SectionId::LocationPreferences,
    ]
    .into_iter()
    .all(|id| section_complete(sections, id));
    if rent_pass {
        badges.push(Badge::RentPassAcquired);
    }

    badges
}
