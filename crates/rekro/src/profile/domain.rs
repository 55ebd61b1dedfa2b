use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identity fields scored by the personal-details section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
    pub native_language: Option<String>,
    pub preferred_contact_method: Option<String>,
}

impl PersonalDetails {
    /// Draft values win wherever the draft supplies one.
    pub fn overlay(&self, draft: &PersonalDetails) -> PersonalDetails {
        PersonalDetails {
            full_name: pick(&draft.full_name, &self.full_name),
            username: pick(&draft.username, &self.username),
            phone: pick(&draft.phone, &self.phone),
            date_of_birth: draft.date_of_birth.or(self.date_of_birth),
            gender: pick(&draft.gender, &self.gender),
            occupation: pick(&draft.occupation, &self.occupation),
            bio: pick(&draft.bio, &self.bio),
            native_language: pick(&draft.native_language, &self.native_language),
            preferred_contact_method: pick(
                &draft.preferred_contact_method,
                &self.preferred_contact_method,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Working,
    NotWorking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Student,
    NotStudent,
}

/// Conditionally relevant answers that drive the residency, income and
/// preference sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileCompletionDetails {
    pub is_citizen: Option<bool>,
    pub visa_status: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    pub employment_type: Option<String>,
    pub income_source: Option<String>,
    pub income_frequency: Option<String>,
    pub income_amount: Option<f64>,
    pub student_status: Option<StudentStatus>,
    pub finance_support_type: Option<String>,
    pub finance_support_details: Option<String>,
    pub max_budget_per_week: Option<f64>,
    pub preferred_locality: Option<String>,
}

impl ProfileCompletionDetails {
    pub fn overlay(&self, draft: &ProfileCompletionDetails) -> ProfileCompletionDetails {
        ProfileCompletionDetails {
            is_citizen: draft.is_citizen.or(self.is_citizen),
            visa_status: pick(&draft.visa_status, &self.visa_status),
            employment_status: draft.employment_status.or(self.employment_status),
            employment_type: pick(&draft.employment_type, &self.employment_type),
            income_source: pick(&draft.income_source, &self.income_source),
            income_frequency: pick(&draft.income_frequency, &self.income_frequency),
            income_amount: draft.income_amount.or(self.income_amount),
            student_status: draft.student_status.or(self.student_status),
            finance_support_type: pick(&draft.finance_support_type, &self.finance_support_type),
            finance_support_details: pick(
                &draft.finance_support_details,
                &self.finance_support_details,
            ),
            max_budget_per_week: draft.max_budget_per_week.or(self.max_budget_per_week),
            preferred_locality: pick(&draft.preferred_locality, &self.preferred_locality),
        }
    }
}

fn pick(draft: &Option<String>, stored: &Option<String>) -> Option<String> {
    draft.as_ref().or(stored.as_ref()).cloned()
}

/// Persisted user record as supplied by the storage layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: Option<String>,
    pub image: Option<String>,
    pub discoverable: bool,
    pub personal: PersonalDetails,
    pub details: ProfileCompletionDetails,
}

/// In-progress edits that have not been saved yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub personal: PersonalDetails,
    pub details: ProfileCompletionDetails,
}

/// Document slots the upload collaborator reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKey {
    Passport,
    Visa,
    Payslips,
    StudentId,
    Coe,
    ProofOfFunds,
    DrivingLicense,
    ReferenceLetter,
    GuarantorLetter,
    /// Any slot the scorer does not look at.
    #[serde(other)]
    Other,
}

impl DocumentKey {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKey::Passport => "Passport",
            DocumentKey::Visa => "Visa grant",
            DocumentKey::Payslips => "Recent payslips",
            DocumentKey::StudentId => "Student ID",
            DocumentKey::Coe => "Confirmation of enrolment",
            DocumentKey::ProofOfFunds => "Proof of funds",
            DocumentKey::DrivingLicense => "Driving license",
            DocumentKey::ReferenceLetter => "Reference letter",
            DocumentKey::GuarantorLetter => "Guarantor letter",
            DocumentKey::Other => "Other document",
        }
    }
}

/// Metadata kept alongside an uploaded document. Scoring only looks at presence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub file_name: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadedDocuments(BTreeMap<DocumentKey, DocumentMetadata>);

impl UploadedDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: DocumentKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn insert(&mut self, key: DocumentKey, metadata: DocumentMetadata) {
        self.0.insert(key, metadata);
    }

    pub fn with(mut self, key: DocumentKey) -> Self {
        self.insert(key, DocumentMetadata::default());
        self
    }
}

impl FromIterator<DocumentKey> for UploadedDocuments {
    fn from_iter<I: IntoIterator<Item = DocumentKey>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|key| (key, DocumentMetadata::default()))
                .collect(),
        )
    }
}

/// The five fixed profile sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    PersonalDetails,
    VisaDetails,
    IncomeDetails,
    Documents,
    LocationPreferences,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::PersonalDetails,
        SectionId::VisaDetails,
        SectionId::IncomeDetails,
        SectionId::Documents,
        SectionId::LocationPreferences,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            SectionId::PersonalDetails => "Personal details",
            SectionId::VisaDetails => "Residency & visa",
            SectionId::IncomeDetails => "Income",
            SectionId::Documents => "Additional documents",
            SectionId::LocationPreferences => "Rental preferences",
        }
    }

    /// Only the documents section is optional.
    pub const fn required(self) -> bool {
        !matches!(self, SectionId::Documents)
    }
}

/// Result of evaluating a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub key: &'static str,
    pub description: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSection {
    pub id: SectionId,
    pub title: &'static str,
    pub completion_percentage: u8,
    pub required: bool,
    pub completed: bool,
    pub checks: Vec<CheckOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    RekroTrusted,
    ReadyToConnect,
    RentPassAcquired,
}

impl Badge {
    pub const fn label(self) -> &'static str {
        match self {
            Badge::RekroTrusted => "Rekro Trusted",
            Badge::ReadyToConnect => "Ready to Connect",
            Badge::RentPassAcquired => "Rent Pass Acquired",
        }
    }
}

/// Full completion report for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCompletion {
    pub sections: Vec<ProfileSection>,
    pub overall_percentage: u8,
    pub is_complete: bool,
    pub badges: Vec<Badge>,
}

impl ProfileCompletion {
    pub fn section(&self, id: SectionId) -> Option<&ProfileSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn percentage(&self, id: SectionId) -> u8 {
        self.section(id)
            .map(|section| section.completion_percentage)
            .unwrap_or(0)
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Signal for the "may apply" gate.
    pub fn may_apply(&self) -> bool {
        self.is_complete
    }

    /// Failing checks of the required sections, in section order.
    pub fn missing_items(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .filter(|section| section.required)
            .flat_map(|section| section.checks.iter())
            .filter(|check| !check.passed)
            .map(|check| check.description)
            .collect()
    }
}
