use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::InclusionType;
use super::constants::PricingConstants;
use super::costs::weekly_cost;
use super::domain::PricingContext;
use super::money::Money;

/// Selected flag and current weekly price for one inclusion.
///
/// The price is zero whenever the inclusion is not selected. Prices are only
/// set by [`toggle`] and [`reprice`], which always go through the cost
/// functions. Deserialized states keep the selected flag and carry a zero price
/// until repriced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "InclusionStateWire")]
pub struct InclusionState {
    selected: bool,
    weekly_price: Money,
}

impl InclusionState {
    pub const UNSELECTED: InclusionState = InclusionState {
        selected: false,
        weekly_price: Decimal::ZERO,
    };

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn weekly_price(&self) -> Money {
        self.weekly_price
    }
}

/// Incoming state; any `weekly_price` the caller sends is ignored.
#[derive(Deserialize)]
struct InclusionStateWire {
    #[serde(default)]
    selected: bool,
}

impl From<InclusionStateWire> for InclusionState {
    fn from(wire: InclusionStateWire) -> Self {
        Self {
            selected: wire.selected,
            weekly_price: Decimal::ZERO,
        }
    }
}

/// One state per inclusion type; unknown keys are rejected on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InclusionSelection {
    furniture: InclusionState,
    bills: InclusionState,
    cleaning: InclusionState,
    carpark: InclusionState,
    storage: InclusionState,
}

impl InclusionSelection {
    pub fn get(&self, inclusion: InclusionType) -> InclusionState {
        match inclusion {
            InclusionType::Furniture => self.furniture,
            InclusionType::Bills => self.bills,
            InclusionType::Cleaning => self.cleaning,
            InclusionType::Carpark => self.carpark,
            InclusionType::Storage => self.storage,
        }
    }

    pub fn is_selected(&self, inclusion: InclusionType) -> bool {
        self.get(inclusion).selected
    }

    pub fn iter(&self) -> impl Iterator<Item = (InclusionType, InclusionState)> + '_ {
        InclusionType::ALL
            .into_iter()
            .map(move |inclusion| (inclusion, self.get(inclusion)))
    }

    pub fn selected_types(&self) -> impl Iterator<Item = InclusionType> + '_ {
        self.iter()
            .filter(|(_, state)| state.selected)
            .map(|(inclusion, _)| inclusion)
    }

    fn with_state(&self, inclusion: InclusionType, state: InclusionState) -> Self {
        let mut next = *self;
        match inclusion {
            InclusionType::Furniture => next.furniture = state,
            InclusionType::Bills => next.bills = state,
            InclusionType::Cleaning => next.cleaning = state,
            InclusionType::Carpark => next.carpark = state,
            InclusionType::Storage => next.storage = state,
        }
        next
    }
}

fn priced_state(
    selected: bool,
    inclusion: InclusionType,
    context: &PricingContext,
    constants: &PricingConstants,
) -> InclusionState {
    if selected {
        InclusionState {
            selected: true,
            weekly_price: weekly_cost(inclusion, context, constants),
        }
    } else {
        InclusionState::UNSELECTED
    }
}

/// Flip `inclusion` and price the new state against `context`.
pub fn toggle(
    selection: &InclusionSelection,
    inclusion: InclusionType,
    context: &PricingContext,
    constants: &PricingConstants,
) -> InclusionSelection {
    let selected = !selection.get(inclusion).selected;
    selection.with_state(
        inclusion,
        priced_state(selected, inclusion, context, constants),
    )
}

/// Re-price every selected inclusion after the context changed.
pub fn reprice(
    selection: &InclusionSelection,
    context: &PricingContext,
    constants: &PricingConstants,
) -> InclusionSelection {
    InclusionType::ALL
        .into_iter()
        .fold(*selection, |next, inclusion| {
            let selected = selection.get(inclusion).selected;
            next.with_state(
                inclusion,
                priced_state(selected, inclusion, context, constants),
            )
        })
}
