use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{PropertyShape, UnitSelection};
use super::money::Money;

/// Add-ons a tenant can attach to a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionType {
    Furniture,
    Bills,
    Cleaning,
    Carpark,
    Storage,
}

impl InclusionType {
    pub const ALL: [InclusionType; 5] = [
        InclusionType::Furniture,
        InclusionType::Bills,
        InclusionType::Cleaning,
        InclusionType::Carpark,
        InclusionType::Storage,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            InclusionType::Furniture => "Furniture",
            InclusionType::Bills => "Bills",
            InclusionType::Cleaning => "Cleaning",
            InclusionType::Carpark => "Carpark",
            InclusionType::Storage => "Storage",
        }
    }

    /// Amenity tag a property must advertise before the add-on can be offered.
    pub const fn amenity_keyword(self) -> Option<&'static str> {
        match self {
            InclusionType::Carpark => Some("carpark"),
            InclusionType::Storage => Some("storage cage"),
            _ => None,
        }
    }
}

/// How the listing is being rented, with the attributes the cost tables key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    EntireHome {
        furnished: bool,
        bedrooms: u32,
        rooms: usize,
    },
    Room {
        max_occupancy: u32,
    },
}

impl ListingShape {
    /// Resolve the listing shape, or `None` when the unit selection is empty or dangling.
    pub fn of(property: &PropertyShape, unit: &UnitSelection) -> Option<Self> {
        match unit {
            UnitSelection::Unselected => None,
            UnitSelection::EntireHome => Some(ListingShape::EntireHome {
                furnished: property.furnished,
                bedrooms: property.bedroom_count,
                rooms: property.room_count(),
            }),
            UnitSelection::Room { index } => {
                property
                    .rooms
                    .get(*index)
                    .map(|room| ListingShape::Room {
                        max_occupancy: room.effective_occupancy(),
                    })
            }
        }
    }

    pub fn is_entire_home(&self) -> bool {
        matches!(self, ListingShape::EntireHome { .. })
    }
}

/// Whether an inclusion is bundled, offered as a toggle, or not on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionAvailability {
    Included,
    Optional,
    Unavailable,
}

/// Case-insensitive substring match against the amenity tags.
pub fn has_amenity(amenities: &BTreeSet<String>, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    amenities
        .iter()
        .any(|amenity| amenity.to_lowercase().contains(&needle))
}

pub fn availability(
    inclusion: InclusionType,
    listing: &ListingShape,
    amenities: &BTreeSet<String>,
) -> InclusionAvailability {
    match (listing, inclusion) {
        (ListingShape::Room { .. }, InclusionType::Furniture | InclusionType::Bills) => {
            InclusionAvailability::Included
        }
        (ListingShape::Room { .. }, InclusionType::Cleaning) => InclusionAvailability::Optional,
        (ListingShape::Room { .. }, InclusionType::Carpark | InclusionType::Storage) => {
            match inclusion.amenity_keyword() {
                Some(keyword) if has_amenity(amenities, keyword) => InclusionAvailability::Optional,
                _ => InclusionAvailability::Unavailable,
            }
        }
        (ListingShape::EntireHome { furnished, .. }, InclusionType::Furniture) => {
            if *furnished {
                InclusionAvailability::Included
            } else {
                InclusionAvailability::Optional
            }
        }
        (ListingShape::EntireHome { .. }, InclusionType::Bills | InclusionType::Cleaning) => {
            InclusionAvailability::Optional
        }
        (ListingShape::EntireHome { .. }, InclusionType::Carpark | InclusionType::Storage) => {
            InclusionAvailability::Unavailable
        }
    }
}

/// Catalog row rendered next to the inclusion toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InclusionOption {
    pub inclusion: InclusionType,
    pub label: &'static str,
    pub availability: InclusionAvailability,
    pub weekly_price: Money,
}
