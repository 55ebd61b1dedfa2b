use chrono::NaiveDate;

use crate::profile::{
    DocumentKey, EmploymentStatus, PersonalDetails, ProfileCompletionDetails, StudentStatus,
    UploadedDocuments, UserRecord,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub(super) fn complete_personal() -> PersonalDetails {
    PersonalDetails {
        full_name: text("Mia Tanaka"),
        username: text("mia.t"),
        phone: text("+61 400 123 456"),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 4, 12),
        gender: text("female"),
        occupation: text("Graduate engineer"),
        bio: text("Quiet, tidy, keen cyclist."),
        native_language: text("Japanese"),
        preferred_contact_method: text("email"),
    }
}

/// Citizen with a finished personal section and nothing else answered.
pub(super) fn citizen_user() -> UserRecord {
    UserRecord {
        id: text("user-001"),
        image: text("https://cdn.example.com/avatars/user-001.png"),
        discoverable: true,
        personal: complete_personal(),
        details: ProfileCompletionDetails {
            is_citizen: Some(true),
            ..ProfileCompletionDetails::default()
        },
    }
}

pub(super) fn working_details() -> ProfileCompletionDetails {
    ProfileCompletionDetails {
        is_citizen: Some(true),
        employment_status: Some(EmploymentStatus::Working),
        employment_type: text("full_time"),
        income_source: text("salary"),
        income_frequency: text("fortnightly"),
        income_amount: Some(3200.0),
        max_budget_per_week: Some(420.0),
        preferred_locality: text("Carlton"),
        ..ProfileCompletionDetails::default()
    }
}

pub(super) fn student_details() -> ProfileCompletionDetails {
    ProfileCompletionDetails {
        is_citizen: Some(false),
        visa_status: text("student_500"),
        employment_status: Some(EmploymentStatus::NotWorking),
        student_status: Some(StudentStatus::Student),
        finance_support_type: text("family"),
        finance_support_details: text("Parents transfer 1,500 AUD monthly"),
        max_budget_per_week: Some(300.0),
        preferred_locality: text("Parkville"),
        ..ProfileCompletionDetails::default()
    }
}

pub(super) fn documents(keys: &[DocumentKey]) -> UploadedDocuments {
    keys.iter().copied().collect()
}
