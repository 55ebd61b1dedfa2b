use serde::Serialize;

use super::constants::PricingConstants;
use super::money::{round_to_cents, sanitize, Money};

/// Whole-property rent derived from the listed base rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntireHomeRent {
    pub weekly_rent: Money,
    pub bond: Money,
}

pub fn entire_home_weekly_rent(
    base_weekly_rent: f64,
    constants: &PricingConstants,
) -> EntireHomeRent {
    let markup = sanitize(constants.entire_home_markup);
    let weekly_rent = round_to_cents(sanitize(base_weekly_rent) * (1.0 + markup));

    EntireHomeRent {
        weekly_rent,
        bond: weekly_rent * Money::from(constants.bond_multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_twelve_percent_markup() {
        let rent = entire_home_weekly_rent(700.0, &PricingConstants::default());
        assert_eq!(rent.weekly_rent, Money::new(78400, 2));
        assert_eq!(rent.bond, Money::new(313600, 2));
    }

    #[test]
    fn non_finite_base_yields_zero() {
        let rent = entire_home_weekly_rent(f64::NAN, &PricingConstants::default());
        assert_eq!(rent.weekly_rent, Money::ZERO);
        assert_eq!(rent.bond, Money::ZERO);
    }
}
