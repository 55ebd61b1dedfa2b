//! Ordered check lists per profile section.
//!
//! Branching sections (residency, income) pick their list from the answers
//! already given, so a check only appears once it is relevant.

use super::domain::{
    CheckOutcome, DocumentKey, EmploymentStatus, PersonalDetails, ProfileCompletionDetails,
    SectionId, StudentStatus, UploadedDocuments,
};

/// Merged view of persisted data, draft edits and uploaded documents.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot<'a> {
    pub personal: PersonalDetails,
    pub details: ProfileCompletionDetails,
    pub documents: &'a UploadedDocuments,
}

pub type CheckPredicate = fn(&ProfileSnapshot<'_>) -> bool;

#[derive(Clone, Copy)]
pub struct CompletionCheck {
    pub key: &'static str,
    pub description: &'static str,
    predicate: CheckPredicate,
}

impl CompletionCheck {
    pub fn new(key: &'static str, description: &'static str, predicate: CheckPredicate) -> Self {
        Self {
            key,
            description,
            predicate,
        }
    }

    pub fn passes(&self, snapshot: &ProfileSnapshot<'_>) -> bool {
        (self.predicate)(snapshot)
    }

    pub fn evaluate(&self, snapshot: &ProfileSnapshot<'_>) -> CheckOutcome {
        CheckOutcome {
            key: self.key,
            description: self.description,
            passed: self.passes(snapshot),
        }
    }
}

impl std::fmt::Debug for CompletionCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionCheck")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish()
    }
}

pub(super) fn filled(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}

fn numeric(value: Option<f64>) -> bool {
    value.map(f64::is_finite).unwrap_or(false)
}

/// Checks that apply to `section` given the current answers.
pub fn section_checks(section: SectionId, snapshot: &ProfileSnapshot<'_>) -> Vec<CompletionCheck> {
    match section {
        SectionId::PersonalDetails => personal_checks(),
        SectionId::VisaDetails => visa_checks(snapshot),
        SectionId::IncomeDetails => income_checks(snapshot),
        SectionId::Documents => optional_document_checks(),
        SectionId::LocationPreferences => preference_checks(),
    }
}

fn personal_checks() -> Vec<CompletionCheck> {
    vec![
        CompletionCheck::new("full_name", "Full name", |s| filled(&s.personal.full_name)),
        CompletionCheck::new("username", "Username", |s| filled(&s.personal.username)),
        CompletionCheck::new("phone", "Phone number", |s| filled(&s.personal.phone)),
        CompletionCheck::new("date_of_birth", "Date of birth", |s| {
            s.personal.date_of_birth.is_some()
        }),
        CompletionCheck::new("gender", "Gender", |s| filled(&s.personal.gender)),
        CompletionCheck::new("occupation", "Occupation", |s| filled(&s.personal.occupation)),
        CompletionCheck::new("bio", "Bio", |s| filled(&s.personal.bio)),
        CompletionCheck::new("native_language", "Native language", |s| {
            filled(&s.personal.native_language)
        }),
        CompletionCheck::new("preferred_contact_method", "Preferred contact method", |s| {
            filled(&s.personal.preferred_contact_method)
        }),
    ]
}

fn visa_checks(snapshot: &ProfileSnapshot<'_>) -> Vec<CompletionCheck> {
    let mut checks = vec![
        CompletionCheck::new("citizenship", "Citizenship answered", |s| {
            s.details.is_citizen.is_some()
        }),
        CompletionCheck::new("passport", "Passport uploaded", |s| {
            s.documents.contains(DocumentKey::Passport)
        }),
    ];

    if snapshot.details.is_citizen == Some(false) {
        checks.push(CompletionCheck::new("visa_status", "Visa status", |s| {
            filled(&s.details.visa_status)
        }));
        checks.push(CompletionCheck::new("visa_document", "Visa uploaded", |s| {
            s.documents.contains(DocumentKey::Visa)
        }));
    }

    checks
}

fn income_checks(snapshot: &ProfileSnapshot<'_>) -> Vec<CompletionCheck> {
    let mut checks = vec![CompletionCheck::new(
        "employment_status",
        "Employment status",
        |s| s.details.employment_status.is_some(),
    )];

    match snapshot.details.employment_status {
        None => {}
        Some(EmploymentStatus::Working) => {
            checks.extend([
                CompletionCheck::new("employment_type", "Employment type", |s| {
                    filled(&s.details.employment_type)
                }),
                CompletionCheck::new("income_source", "Income source", |s| {
                    filled(&s.details.income_source)
                }),
                CompletionCheck::new("income_frequency", "Income frequency", |s| {
                    filled(&s.details.income_frequency)
                }),
                CompletionCheck::new("income_amount", "Income amount", |s| {
                    numeric(s.details.income_amount)
                }),
                CompletionCheck::new("payslips", "Payslips uploaded", |s| {
                    s.documents.contains(DocumentKey::Payslips)
                }),
            ]);
        }
        Some(EmploymentStatus::NotWorking) => {
            checks.extend([
                CompletionCheck::new("student_status", "Student status", |s| {
                    s.details.student_status.is_some()
                }),
                CompletionCheck::new("finance_support_type", "Finance support type", |s| {
                    filled(&s.details.finance_support_type)
                }),
                CompletionCheck::new(
                    "finance_support_details",
                    "Finance support details",
                    |s| filled(&s.details.finance_support_details),
                ),
                CompletionCheck::new("proof_of_funds", "Proof of funds uploaded", |s| {
                    s.documents.contains(DocumentKey::ProofOfFunds)
                }),
            ]);

            if snapshot.details.student_status == Some(StudentStatus::Student) {
                checks.extend([
                    CompletionCheck::new("student_id", "Student ID uploaded", |s| {
                        s.documents.contains(DocumentKey::StudentId)
                    }),
                    CompletionCheck::new("coe", "Confirmation of enrolment uploaded", |s| {
                        s.documents.contains(DocumentKey::Coe)
                    }),
                ]);
            }
        }
    }

    checks
}

fn optional_document_checks() -> Vec<CompletionCheck> {
    vec![
        CompletionCheck::new("driving_license", "Driving license uploaded", |s| {
            s.documents.contains(DocumentKey::DrivingLicense)
        }),
        CompletionCheck::new("reference_letter", "Reference letter uploaded", |s| {
            s.documents.contains(DocumentKey::ReferenceLetter)
        }),
        CompletionCheck::new("guarantor_letter", "Guarantor letter uploaded", |s| {
            s.documents.contains(DocumentKey::GuarantorLetter)
        }),
    ]
}

fn preference_checks() -> Vec<CompletionCheck> {
    vec![
        CompletionCheck::new("max_budget", "Maximum weekly budget", |s| {
            numeric(s.details.max_budget_per_week)
        }),
        CompletionCheck::new("preferred_locality", "Preferred locality", |s| {
            filled(&s.details.preferred_locality)
        }),
    ]
}

/// `round(passed / total * 100)`, zero for an empty list.
pub fn completion_percentage(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percentage = (passed as f64 / total as f64 * 100.0).round();
    percentage.clamp(0.0, 100.0) as u8
}
