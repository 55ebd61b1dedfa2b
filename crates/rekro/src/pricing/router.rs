use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::allocation::RoomAllocation;
use super::catalog::{InclusionOption, InclusionType};
use super::domain::{PricingContext, PricingResult, PropertyShape};
use super::engine::PricingEngine;
use super::money::Money;
use super::selection::InclusionSelection;

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    pub context: PricingContext,
    pub inclusion: InclusionType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    pub selection: InclusionSelection,
    pub pricing: PricingResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationResponse {
    pub allocations: Vec<RoomAllocation>,
    pub total_weekly_rent: Money,
}

/// Router builder exposing the pricing engine over HTTP.
pub fn pricing_router(engine: Arc<PricingEngine>) -> Router {
    Router::new()
        .route("/api/v1/pricing/quote", post(quote_handler))
        .route("/api/v1/pricing/toggle", post(toggle_handler))
        .route("/api/v1/pricing/allocation", post(allocation_handler))
        .route("/api/v1/pricing/catalog", post(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn quote_handler(
    State(engine): State<Arc<PricingEngine>>,
    Json(context): Json<PricingContext>,
) -> Json<PricingResult> {
    Json(engine.quote(&context))
}

pub(crate) async fn toggle_handler(
    State(engine): State<Arc<PricingEngine>>,
    Json(request): Json<ToggleRequest>,
) -> Json<ToggleResponse> {
    let ToggleRequest { context, inclusion } = request;
    let current = engine.reprice(&context.inclusions, &context);
    let selection = engine.toggle(&current, inclusion, &context);
    let pricing = engine.quote(&context.with_inclusions(selection));

    Json(ToggleResponse { selection, pricing })
}

pub(crate) async fn allocation_handler(
    State(engine): State<Arc<PricingEngine>>,
    Json(property): Json<PropertyShape>,
) -> Json<AllocationResponse> {
    let allocations = engine.allocate(&property);
    let total_weekly_rent = allocations
        .iter()
        .map(|allocation| allocation.weekly_rent)
        .sum();

    Json(AllocationResponse {
        allocations,
        total_weekly_rent,
    })
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<PricingEngine>>,
    Json(context): Json<PricingContext>,
) -> Json<Vec<InclusionOption>> {
    Json(engine.catalog(&context))
}
