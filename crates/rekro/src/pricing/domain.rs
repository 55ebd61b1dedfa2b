use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::InclusionType;
use super::constants::DEFAULT_RENTAL_DURATION_MONTHS;
use super::money::Money;
use super::selection::InclusionSelection;

/// A room unit inside a shared property, used only as an allocation weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomShape {
    pub max_occupancy: u32,
    #[serde(default)]
    pub size_sqm: Option<f64>,
}

impl RoomShape {
    pub fn new(max_occupancy: u32, size_sqm: Option<f64>) -> Self {
        Self {
            max_occupancy,
            size_sqm,
        }
    }

    /// Occupancy floored at one so no room carries a zero weight.
    pub fn effective_occupancy(&self) -> u32 {
        self.max_occupancy.max(1)
    }

    /// Size in square metres, if it is a usable positive number.
    pub fn effective_size(&self) -> Option<f64> {
        self.size_sqm.filter(|size| size.is_finite() && *size > 0.0)
    }
}

/// Read-only snapshot of a property as supplied by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyShape {
    #[serde(default)]
    pub bedroom_count: u32,
    #[serde(default)]
    pub furnished: bool,
    pub base_weekly_rent: f64,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub rooms: Vec<RoomShape>,
}

impl PropertyShape {
    /// Number of rooms used for whole-home tables, falling back to bedrooms.
    pub fn room_count(&self) -> usize {
        if self.rooms.is_empty() {
            self.bedroom_count as usize
        } else {
            self.rooms.len()
        }
    }
}

/// Which unit of the property the caller is pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitSelection {
    /// Nothing picked yet; prices render as zero.
    #[default]
    Unselected,
    EntireHome,
    Room { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyType {
    #[default]
    Single,
    Dual,
}

fn default_duration() -> u32 {
    DEFAULT_RENTAL_DURATION_MONTHS
}

/// Everything a pricing call needs, rebuilt by the caller on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    pub property: PropertyShape,
    #[serde(default)]
    pub unit: UnitSelection,
    #[serde(default)]
    pub occupancy: OccupancyType,
    #[serde(default = "default_duration")]
    pub rental_duration_months: u32,
    #[serde(default)]
    pub inclusions: InclusionSelection,
}

impl PricingContext {
    pub fn new(property: PropertyShape, unit: UnitSelection) -> Self {
        Self {
            property,
            unit,
            occupancy: OccupancyType::Single,
            rental_duration_months: DEFAULT_RENTAL_DURATION_MONTHS,
            inclusions: InclusionSelection::default(),
        }
    }

    pub fn with_occupancy(mut self, occupancy: OccupancyType) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn with_duration(mut self, months: u32) -> Self {
        self.rental_duration_months = months;
        self
    }

    pub fn with_inclusions(mut self, inclusions: InclusionSelection) -> Self {
        self.inclusions = inclusions;
        self
    }

    pub fn is_entire_home(&self) -> bool {
        matches!(self.unit, UnitSelection::EntireHome)
    }

    /// The selected room, if the selection points at one that exists.
    pub fn selected_room(&self) -> Option<&RoomShape> {
        match self.unit {
            UnitSelection::Room { index } => self.property.rooms.get(index),
            _ => None,
        }
    }

    /// Lease length in months with a zero duration defaulted to a year.
    pub fn effective_duration_months(&self) -> u32 {
        if self.rental_duration_months == 0 {
            DEFAULT_RENTAL_DURATION_MONTHS
        } else {
            self.rental_duration_months
        }
    }
}

/// Per-inclusion breakdown of the weekly add-on charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InclusionCosts {
    pub furniture: Money,
    pub bills: Money,
    pub cleaning: Money,
    pub carpark: Money,
    pub storage: Money,
    pub total: Money,
}

impl InclusionCosts {
    pub fn get(&self, inclusion: InclusionType) -> Money {
        match inclusion {
            InclusionType::Furniture => self.furniture,
            InclusionType::Bills => self.bills,
            InclusionType::Cleaning => self.cleaning,
            InclusionType::Carpark => self.carpark,
            InclusionType::Storage => self.storage,
        }
    }

    pub(crate) fn record(&mut self, inclusion: InclusionType, amount: Money) {
        let slot = match inclusion {
            InclusionType::Furniture => &mut self.furniture,
            InclusionType::Bills => &mut self.bills,
            InclusionType::Cleaning => &mut self.cleaning,
            InclusionType::Carpark => &mut self.carpark,
            InclusionType::Storage => &mut self.storage,
        };
        *slot = amount;
        self.total = self.furniture + self.bills + self.cleaning + self.carpark + self.storage;
    }
}

/// Weekly rent and bond rendered for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PricingResult {
    /// Property-level rent share before the whole-home markup.
    pub base_rent: Money,
    /// Rent the unit charges before inclusions.
    pub adjusted_base_rent: Money,
    pub bond: Money,
    pub inclusion_costs: InclusionCosts,
    pub total_weekly_rent: Money,
}
