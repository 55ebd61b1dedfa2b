use serde::Serialize;

use super::constants::PricingConstants;
use super::domain::RoomShape;
use super::money::{from_cents, to_cents, Money};

/// Rent and bond assigned to one room of a shared property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAllocation {
    pub index: usize,
    pub weight: f64,
    pub weekly_rent: Money,
    pub bond: Money,
}

/// Normalised allocation weight per room, in input order.
///
/// Occupancy share always contributes `blend` of the weight. The remainder is
/// a size share: rooms with a known size split the occupancy share of the sized
/// rooms in proportion to area, and rooms without a size keep their occupancy
/// share. The weights sum to one.
pub fn room_weights(rooms: &[RoomShape], blend: f64) -> Vec<f64> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let occupancies: Vec<f64> = rooms
        .iter()
        .map(|room| f64::from(room.effective_occupancy()))
        .collect();
    let occupancy_total: f64 = occupancies.iter().sum();
    let occupancy_shares: Vec<f64> = occupancies
        .iter()
        .map(|occupancy| occupancy / occupancy_total)
        .collect();

    let sized_area: f64 = rooms.iter().filter_map(RoomShape::effective_size).sum();
    let sized_pool: f64 = rooms
        .iter()
        .zip(&occupancy_shares)
        .filter(|(room, _)| room.effective_size().is_some())
        .map(|(_, share)| share)
        .sum();

    let raw: Vec<f64> = rooms
        .iter()
        .zip(&occupancy_shares)
        .map(|(room, occupancy_share)| {
            let size_share = match room.effective_size() {
                Some(size) if sized_area > 0.0 => size / sized_area * sized_pool,
                _ => *occupancy_share,
            };
            blend * occupancy_share + (1.0 - blend) * size_share
        })
        .collect();

    normalize(raw)
}

fn normalize(raw: Vec<f64>) -> Vec<f64> {
    let total: f64 = raw.iter().sum();
    if total.is_finite() && total > 0.0 && raw.iter().all(|weight| weight.is_finite()) {
        raw.into_iter().map(|weight| weight / total).collect()
    } else {
        let even = 1.0 / raw.len() as f64;
        vec![even; raw.len()]
    }
}

/// Split `total_cents` by `weights`, then push the rounding residual onto the
/// heaviest entry (first on ties) so the parts always sum to `total_cents`.
/// A negative residual larger than the heaviest part spills over to the next
/// heaviest so no part drops below zero.
///
/// This is the only place rounding drift is corrected; every allocation path
/// goes through it.
pub(crate) fn allocate_cents(total_cents: i64, weights: &[f64]) -> Vec<i64> {
    let mut parts: Vec<i64> = weights
        .iter()
        .map(|weight| (total_cents as f64 * weight).round() as i64)
        .collect();

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|left, right| weights[*right].total_cmp(&weights[*left]));

    let mut residual = total_cents - parts.iter().sum::<i64>();
    for index in order {
        if residual == 0 {
            break;
        }
        let adjusted = (parts[index] + residual).max(0);
        residual -= adjusted - parts[index];
        parts[index] = adjusted;
    }

    parts
}

/// Distribute the property's base weekly rent across its rooms.
pub fn allocate_room_rents(
    base_weekly_rent: f64,
    rooms: &[RoomShape],
    constants: &PricingConstants,
) -> Vec<RoomAllocation> {
    let weights = room_weights(rooms, constants.sanitized_blend());
    let parts = allocate_cents(to_cents(base_weekly_rent), &weights);
    let multiplier = Money::from(constants.bond_multiplier);

    weights
        .into_iter()
        .zip(parts)
        .enumerate()
        .map(|(index, (weight, cents))| {
            let weekly_rent = from_cents(cents);
            RoomAllocation {
                index,
                weight,
                weekly_rent,
                bond: weekly_rent * multiplier,
            }
        })
        .collect()
}
