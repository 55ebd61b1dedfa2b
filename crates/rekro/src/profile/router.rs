use axum::{routing::post, Json, Router};
use serde::Deserialize;

use super::domain::{ProfileCompletion, ProfileDraft, UploadedDocuments, UserRecord};
use super::scorer::score_profile;

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionRequest {
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub draft: ProfileDraft,
    #[serde(default)]
    pub documents: UploadedDocuments,
}

/// Router builder exposing the profile completion scorer.
pub fn profile_router() -> Router {
    Router::new().route("/api/v1/profile/completion", post(completion_handler))
}

pub(crate) async fn completion_handler(
    Json(request): Json<CompletionRequest>,
) -> Json<ProfileCompletion> {
    Json(score_profile(
        request.user.as_ref(),
        &request.draft,
        &request.documents,
    ))
}
