//! Rental pricing and inclusion engine.
//!
//! Turns a property's base rent, its rooms and the tenant's selected add-ons
//! into a weekly rent and bond for one unit. All functions are pure.

pub mod allocation;
pub mod catalog;
pub mod constants;
pub mod costs;
pub mod domain;
pub mod engine;
pub mod entire_home;
pub mod money;
pub mod router;
pub mod selection;

#[cfg(test)]
mod tests;

pub use allocation::{allocate_room_rents, room_weights, RoomAllocation};
pub use catalog::{InclusionAvailability, InclusionOption, InclusionType, ListingShape};
pub use constants::{PricingConstants, PricingConstantsError};
pub use domain::{
    InclusionCosts, OccupancyType, PricingContext, PricingResult, PropertyShape, RoomShape,
    UnitSelection,
};
pub use engine::PricingEngine;
pub use entire_home::{entire_home_weekly_rent, EntireHomeRent};
pub use money::Money;
pub use router::pricing_router;
pub use selection::{reprice, toggle, InclusionSelection, InclusionState};
