use std::collections::BTreeSet;
use std::str::FromStr;

use crate::pricing::{
    InclusionSelection, InclusionType, Money, PricingConstants, PricingContext, PricingEngine,
    PropertyShape, RoomShape, UnitSelection,
};

pub(super) fn constants() -> PricingConstants {
    PricingConstants::default()
}

pub(super) fn engine() -> PricingEngine {
    PricingEngine::new(constants())
}

pub(super) fn money(raw: &str) -> Money {
    Money::from_str(raw).expect("valid money literal")
}

pub(super) fn amenities(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

/// Three-room share house with a carpark and storage cage on site.
pub(super) fn share_house() -> PropertyShape {
    PropertyShape {
        bedroom_count: 3,
        furnished: true,
        base_weekly_rent: 900.0,
        amenities: amenities(&["Undercover Carpark", "Storage Cage", "Laundry"]),
        rooms: vec![
            RoomShape::new(2, Some(16.0)),
            RoomShape::new(1, Some(10.0)),
            RoomShape::new(1, None),
        ],
    }
}

/// Unfurnished three bedroom house whose whole-home rent derives to 700 a week.
pub(super) fn unfurnished_home() -> PropertyShape {
    PropertyShape {
        bedroom_count: 3,
        furnished: false,
        base_weekly_rent: 625.0,
        amenities: amenities(&["carpark"]),
        rooms: Vec::new(),
    }
}

pub(super) fn room_context(index: usize) -> PricingContext {
    PricingContext::new(share_house(), UnitSelection::Room { index })
}

pub(super) fn home_context() -> PricingContext {
    PricingContext::new(unfurnished_home(), UnitSelection::EntireHome)
}

/// Build a selection through the reducer, the only way callers obtain one.
pub(super) fn select(context: &PricingContext, inclusions: &[InclusionType]) -> InclusionSelection {
    inclusions
        .iter()
        .fold(InclusionSelection::default(), |selection, inclusion| {
            crate::pricing::toggle(&selection, *inclusion, context, &constants())
        })
}
