//! Weekly cost of each inclusion.
//!
//! Every function here is total: invalid numeric input is treated as absent and
//! the result is always a finite amount of at least zero, rounded to cents.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::catalog::{availability, InclusionAvailability, InclusionType, ListingShape};
use super::constants::{PricingConstants, DEFAULT_RENTAL_DURATION_MONTHS};
use super::domain::{OccupancyType, PricingContext};
use super::money::{round_to_cents, Money};

/// Furniture hire for unfurnished whole homes, amortised over the lease.
pub fn furniture_weekly_cost(
    listing: &ListingShape,
    rental_duration_months: u32,
    constants: &PricingConstants,
) -> Money {
    match listing {
        ListingShape::EntireHome {
            furnished: false, ..
        } => {
            let months = if rental_duration_months == 0 {
                DEFAULT_RENTAL_DURATION_MONTHS
            } else {
                rental_duration_months
            };
            let weeks = f64::from(months) * constants.weeks_per_month;
            if !(weeks.is_finite() && weeks > 0.0) {
                return Decimal::ZERO;
            }
            round_to_cents(constants.furniture_total / weeks)
        }
        _ => Decimal::ZERO,
    }
}

/// Utilities for whole homes; rooms already include bills in rent.
pub fn bills_weekly_cost(listing: &ListingShape, constants: &PricingConstants) -> Money {
    match listing {
        ListingShape::EntireHome { bedrooms, .. } => round_to_cents(constants.bills_for(*bedrooms)),
        ListingShape::Room { .. } => Decimal::ZERO,
    }
}

pub fn cleaning_weekly_cost(
    listing: &ListingShape,
    occupancy: OccupancyType,
    constants: &PricingConstants,
) -> Money {
    match listing {
        ListingShape::EntireHome { rooms, .. } => {
            round_to_cents(constants.home_cleaning_for(*rooms))
        }
        // Dual rate only when the room actually sleeps two.
        ListingShape::Room { max_occupancy } => {
            if occupancy == OccupancyType::Dual && *max_occupancy == 2 {
                round_to_cents(constants.room_cleaning_dual)
            } else {
                round_to_cents(constants.room_cleaning_single)
            }
        }
    }
}

pub fn carpark_weekly_cost(
    listing: &ListingShape,
    amenities: &BTreeSet<String>,
    constants: &PricingConstants,
) -> Money {
    amenity_gated(
        InclusionType::Carpark,
        listing,
        amenities,
        constants.carpark_weekly,
    )
}

pub fn storage_weekly_cost(
    listing: &ListingShape,
    amenities: &BTreeSet<String>,
    constants: &PricingConstants,
) -> Money {
    amenity_gated(
        InclusionType::Storage,
        listing,
        amenities,
        constants.storage_weekly,
    )
}

fn amenity_gated(
    inclusion: InclusionType,
    listing: &ListingShape,
    amenities: &BTreeSet<String>,
    weekly: f64,
) -> Money {
    match availability(inclusion, listing, amenities) {
        InclusionAvailability::Optional => round_to_cents(weekly),
        InclusionAvailability::Included | InclusionAvailability::Unavailable => Decimal::ZERO,
    }
}

/// Dispatch to the cost function for `inclusion` against an already resolved listing.
pub fn listing_weekly_cost(
    inclusion: InclusionType,
    listing: &ListingShape,
    context: &PricingContext,
    constants: &PricingConstants,
) -> Money {
    match inclusion {
        InclusionType::Furniture => {
            furniture_weekly_cost(listing, context.effective_duration_months(), constants)
        }
        InclusionType::Bills => bills_weekly_cost(listing, constants),
        InclusionType::Cleaning => cleaning_weekly_cost(listing, context.occupancy, constants),
        InclusionType::Carpark => {
            carpark_weekly_cost(listing, &context.property.amenities, constants)
        }
        InclusionType::Storage => {
            storage_weekly_cost(listing, &context.property.amenities, constants)
        }
    }
}

/// Current weekly cost of `inclusion` for the unit in `context`; zero when no unit resolves.
pub fn weekly_cost(
    inclusion: InclusionType,
    context: &PricingContext,
    constants: &PricingConstants,
) -> Money {
    match ListingShape::of(&context.property, &context.unit) {
        Some(listing) => listing_weekly_cost(inclusion, &listing, context, constants),
        None => Decimal::ZERO,
    }
}
