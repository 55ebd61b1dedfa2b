use tracing::debug;

use super::allocation::{allocate_room_rents, RoomAllocation};
use super::catalog::{availability, InclusionAvailability, InclusionOption, InclusionType, ListingShape};
use super::constants::PricingConstants;
use super::costs::listing_weekly_cost;
use super::domain::{InclusionCosts, PricingContext, PricingResult, PropertyShape, UnitSelection};
use super::entire_home::entire_home_weekly_rent;
use super::money::{round_to_cents, Money};
use super::selection::{self, InclusionSelection};

/// Stateless pricing engine that applies the configured constants to a context.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    constants: PricingConstants,
}

impl PricingEngine {
    pub fn new(constants: PricingConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PricingConstants {
        &self.constants
    }

    /// Weekly total and bond for the selected unit.
    ///
    /// Selected inclusions are always re-priced; prices stored on the selection
    /// are ignored. A context that does not resolve to a unit prices at zero.
    pub fn quote(&self, context: &PricingContext) -> PricingResult {
        let Some(listing) = ListingShape::of(&context.property, &context.unit) else {
            debug!(unit = ?context.unit, "no unit resolved; returning zeroed pricing");
            return PricingResult::default();
        };

        let (base_rent, adjusted_base_rent) = self.unit_rent(context);

        let mut inclusion_costs = InclusionCosts::default();
        for inclusion in context.inclusions.selected_types() {
            let cost = listing_weekly_cost(inclusion, &listing, context, &self.constants);
            inclusion_costs.record(inclusion, cost);
        }

        let total_weekly_rent = adjusted_base_rent + inclusion_costs.total;

        PricingResult {
            base_rent,
            adjusted_base_rent,
            bond: total_weekly_rent * Money::from(self.constants.bond_multiplier),
            inclusion_costs,
            total_weekly_rent,
        }
    }

    /// Pre- and post-adjustment rent for a unit already resolved to a listing.
    fn unit_rent(&self, context: &PricingContext) -> (Money, Money) {
        let property = &context.property;
        match context.unit {
            UnitSelection::Unselected => (Money::ZERO, Money::ZERO),
            UnitSelection::EntireHome => {
                let derived = entire_home_weekly_rent(property.base_weekly_rent, &self.constants);
                (round_to_cents(property.base_weekly_rent), derived.weekly_rent)
            }
            UnitSelection::Room { index } => {
                let rent = self
                    .allocate(property)
                    .get(index)
                    .map(|allocation| allocation.weekly_rent)
                    .unwrap_or_default();
                (rent, rent)
            }
        }
    }

    /// Create-time rent and bond for every room of `property`.
    pub fn allocate(&self, property: &PropertyShape) -> Vec<RoomAllocation> {
        allocate_room_rents(property.base_weekly_rent, &property.rooms, &self.constants)
    }

    pub fn toggle(
        &self,
        selection: &InclusionSelection,
        inclusion: InclusionType,
        context: &PricingContext,
    ) -> InclusionSelection {
        selection::toggle(selection, inclusion, context, &self.constants)
    }

    pub fn reprice(
        &self,
        selection: &InclusionSelection,
        context: &PricingContext,
    ) -> InclusionSelection {
        selection::reprice(selection, context, &self.constants)
    }

    /// Inclusion rows for the unit in `context`; empty when no unit resolves.
    pub fn catalog(&self, context: &PricingContext) -> Vec<InclusionOption> {
        let Some(listing) = ListingShape::of(&context.property, &context.unit) else {
            return Vec::new();
        };

        InclusionType::ALL
            .into_iter()
            .map(|inclusion| {
                let availability =
                    availability(inclusion, &listing, &context.property.amenities);
                let weekly_price = match availability {
                    InclusionAvailability::Optional => {
                        listing_weekly_cost(inclusion, &listing, context, &self.constants)
                    }
                    InclusionAvailability::Included | InclusionAvailability::Unavailable => {
                        Money::ZERO
                    }
                };
                InclusionOption {
                    inclusion,
                    label: inclusion.label(),
                    availability,
                    weekly_price,
                }
            })
            .collect()
    }
}
