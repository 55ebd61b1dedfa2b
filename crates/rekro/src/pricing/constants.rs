use serde::{Deserialize, Serialize};

pub const DEFAULT_ENTIRE_HOME_MARKUP: f64 = 0.12;
pub const DEFAULT_FURNITURE_TOTAL: f64 = 2000.0;
pub const DEFAULT_WEEKS_PER_MONTH: f64 = 4.33;
pub const DEFAULT_BOND_MULTIPLIER: u32 = 4;
pub const DEFAULT_OCCUPANCY_BLEND: f64 = 0.7;
pub const DEFAULT_RENTAL_DURATION_MONTHS: u32 = 12;
pub const DEFAULT_ROOM_CLEANING_SINGLE: f64 = 35.0;
pub const DEFAULT_ROOM_CLEANING_DUAL: f64 = 60.0;
pub const DEFAULT_CARPARK_WEEKLY: f64 = 40.0;
pub const DEFAULT_STORAGE_WEEKLY: f64 = 20.0;

/// Weekly bills indexed by bedroom count; counts past the end use the last step.
pub const DEFAULT_BILLS_BY_BEDROOMS: [f64; 6] = [30.0, 30.0, 40.0, 50.0, 60.0, 70.0];

/// Weekly whole-home cleaning indexed by room count; counts past the end use the last step.
pub const DEFAULT_HOME_CLEANING_BY_ROOMS: [f64; 6] = [70.0, 70.0, 90.0, 110.0, 130.0, 150.0];

/// Named pricing dials consumed by the cost functions, allocator and deriver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConstants {
    pub entire_home_markup: f64,
    pub furniture_total: f64,
    pub weeks_per_month: f64,
    pub bond_multiplier: u32,
    /// Share of a room's weight that comes from occupancy when sizes are known.
    pub occupancy_blend: f64,
    pub room_cleaning_single: f64,
    pub room_cleaning_dual: f64,
    pub carpark_weekly: f64,
    pub storage_weekly: f64,
    pub bills_by_bedrooms: Vec<f64>,
    pub home_cleaning_by_rooms: Vec<f64>,
}

impl Default for PricingConstants {
    fn default() -> Self {
        Self {
            entire_home_markup: DEFAULT_ENTIRE_HOME_MARKUP,
            furniture_total: DEFAULT_FURNITURE_TOTAL,
            weeks_per_month: DEFAULT_WEEKS_PER_MONTH,
            bond_multiplier: DEFAULT_BOND_MULTIPLIER,
            occupancy_blend: DEFAULT_OCCUPANCY_BLEND,
            room_cleaning_single: DEFAULT_ROOM_CLEANING_SINGLE,
            room_cleaning_dual: DEFAULT_ROOM_CLEANING_DUAL,
            carpark_weekly: DEFAULT_CARPARK_WEEKLY,
            storage_weekly: DEFAULT_STORAGE_WEEKLY,
            bills_by_bedrooms: DEFAULT_BILLS_BY_BEDROOMS.to_vec(),
            home_cleaning_by_rooms: DEFAULT_HOME_CLEANING_BY_ROOMS.to_vec(),
        }
    }
}

/// Rejected override for one of the pricing dials.
#[derive(Debug, thiserror::Error)]
pub enum PricingConstantsError {
    #[error("{key} must be a finite, non-negative number (found '{value}')")]
    InvalidAmount { key: &'static str, value: String },
    #[error("{key} must be between 0 and 1 (found '{value}')")]
    InvalidFraction { key: &'static str, value: String },
    #[error("{key} must be a positive whole number (found '{value}')")]
    InvalidMultiplier { key: &'static str, value: String },
    #[error("{key} must be a comma separated list of amounts (found '{value}')")]
    InvalidTable { key: &'static str, value: String },
}

impl PricingConstants {
    /// Apply `PRICING_*` environment overrides on top of the defaults.
    pub fn from_env() -> Result<Self, PricingConstantsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides resolved through `lookup`; keys that resolve to `None` keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PricingConstantsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut constants = Self::default();

        if let Some(value) = amount(&lookup, "PRICING_ENTIRE_HOME_MARKUP")? {
            constants.entire_home_markup = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_FURNITURE_TOTAL")? {
            constants.furniture_total = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_WEEKS_PER_MONTH")? {
            if value <= 0.0 {
                return Err(PricingConstantsError::InvalidAmount {
                    key: "PRICING_WEEKS_PER_MONTH",
                    value: value.to_string(),
                });
            }
            constants.weeks_per_month = value;
        }
        if let Some(raw) = lookup("PRICING_BOND_MULTIPLIER") {
            constants.bond_multiplier = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|multiplier| *multiplier > 0)
                .ok_or(PricingConstantsError::InvalidMultiplier {
                    key: "PRICING_BOND_MULTIPLIER",
                    value: raw,
                })?;
        }
        if let Some(value) = amount(&lookup, "PRICING_OCCUPANCY_BLEND")? {
            if value > 1.0 {
                return Err(PricingConstantsError::InvalidFraction {
                    key: "PRICING_OCCUPANCY_BLEND",
                    value: value.to_string(),
                });
            }
            constants.occupancy_blend = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_ROOM_CLEANING_SINGLE")? {
            constants.room_cleaning_single = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_ROOM_CLEANING_DUAL")? {
            constants.room_cleaning_dual = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_CARPARK_WEEKLY")? {
            constants.carpark_weekly = value;
        }
        if let Some(value) = amount(&lookup, "PRICING_STORAGE_WEEKLY")? {
            constants.storage_weekly = value;
        }
        if let Some(table) = table(&lookup, "PRICING_BILLS_BY_BEDROOMS")? {
            constants.bills_by_bedrooms = table;
        }
        if let Some(table) = table(&lookup, "PRICING_HOME_CLEANING_BY_ROOMS")? {
            constants.home_cleaning_by_rooms = table;
        }

        Ok(constants)
    }

    /// Bills step for a bedroom count.
    pub fn bills_for(&self, bedrooms: u32) -> f64 {
        step_lookup(&self.bills_by_bedrooms, bedrooms as usize)
    }

    /// Whole-home cleaning step for a room count.
    pub fn home_cleaning_for(&self, rooms: usize) -> f64 {
        step_lookup(&self.home_cleaning_by_rooms, rooms)
    }

    pub(crate) fn sanitized_blend(&self) -> f64 {
        if self.occupancy_blend.is_finite() && (0.0..=1.0).contains(&self.occupancy_blend) {
            self.occupancy_blend
        } else {
            DEFAULT_OCCUPANCY_BLEND
        }
    }
}

fn step_lookup(table: &[f64], key: usize) -> f64 {
    match table.get(key).or_else(|| table.last()) {
        Some(value) if value.is_finite() && *value > 0.0 => *value,
        _ => 0.0,
    }
}

fn amount<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, PricingConstantsError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(PricingConstantsError::InvalidAmount { key, value: raw }),
    }
}

fn table<F>(lookup: &F, key: &'static str) -> Result<Option<Vec<f64>>, PricingConstantsError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let parsed: Option<Vec<f64>> = raw
        .split(',')
        .map(|step| {
            step.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
        })
        .collect();

    match parsed {
        Some(steps) if !steps.is_empty() => Ok(Some(steps)),
        _ => Err(PricingConstantsError::InvalidTable { key, value: raw }),
    }
}
