use chrono::NaiveDate;

use rekro::profile::{
    score_profile, Badge, DocumentKey, EmploymentStatus, PersonalDetails,
    ProfileCompletionDetails, ProfileDraft, SectionId, UploadedDocuments, UserRecord,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn personal() -> PersonalDetails {
    PersonalDetails {
        full_name: text("Arjun Patel"),
        username: text("arjunp"),
        phone: text("+61 412 555 010"),
        date_of_birth: NaiveDate::from_ymd_opt(1996, 11, 3),
        gender: text("male"),
        occupation: text("Nurse"),
        bio: text("Shift worker, early riser."),
        native_language: text("Gujarati"),
        preferred_contact_method: text("phone"),
    }
}

fn stored_user() -> UserRecord {
    UserRecord {
        id: text("user-042"),
        image: text("https://cdn.example.com/avatars/user-042.png"),
        discoverable: true,
        personal: personal(),
        details: ProfileCompletionDetails::default(),
    }
}

#[test]
fn tenant_completes_profile_over_several_edits() {
    let user = stored_user();
    let mut documents = UploadedDocuments::new();

    let first = score_profile(Some(&user), &ProfileDraft::default(), &documents);
    assert_eq!(first.percentage(SectionId::PersonalDetails), 100);
    assert_eq!(first.percentage(SectionId::VisaDetails), 0);
    assert!(first.has_badge(Badge::RekroTrusted));
    assert!(first.has_badge(Badge::ReadyToConnect));
    assert!(!first.may_apply());

    let draft = ProfileDraft {
        personal: PersonalDetails::default(),
        details: ProfileCompletionDetails {
            is_citizen: Some(true),
            employment_status: Some(EmploymentStatus::Working),
            employment_type: text("part_time"),
            income_source: text("wages"),
            income_frequency: text("weekly"),
            income_amount: Some(1150.0),
            max_budget_per_week: Some(380.0),
            preferred_locality: text("Footscray"),
            ..ProfileCompletionDetails::default()
        },
    };

    let drafted = score_profile(Some(&user), &draft, &documents);
    assert_eq!(drafted.percentage(SectionId::VisaDetails), 50);
    assert_eq!(drafted.percentage(SectionId::IncomeDetails), 83);
    assert_eq!(drafted.percentage(SectionId::LocationPreferences), 100);
    assert_eq!(
        drafted.missing_items(),
        vec!["Passport uploaded", "Payslips uploaded"]
    );

    documents = documents
        .with(DocumentKey::Passport)
        .with(DocumentKey::Payslips);
    let done = score_profile(Some(&user), &draft, &documents);
    assert_eq!(done.overall_percentage, 100);
    assert!(done.is_complete);
    assert!(done.may_apply());
    assert!(done.has_badge(Badge::RentPassAcquired));
    assert_eq!(done.percentage(SectionId::Documents), 0);
    assert!(done.missing_items().is_empty());
}

#[test]
fn completion_serializes_for_clients() {
    let completion = score_profile(
        Some(&stored_user()),
        &ProfileDraft::default(),
        &UploadedDocuments::new(),
    );
    let json = serde_json::to_value(&completion).expect("completion serializes");

    assert_eq!(json["sections"][0]["id"], "personal-details");
    assert_eq!(json["sections"][3]["required"], false);
    assert_eq!(json["badges"][0], "rekro_trusted");
}
