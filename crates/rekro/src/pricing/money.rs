use rust_decimal::Decimal;

/// Weekly currency amount, always held to two decimal places.
pub type Money = Decimal;

/// Upper bound for converted amounts so `f64 -> i64` never saturates silently.
const MAX_CENTS: f64 = 1.0e15;

/// Collapse non-finite and negative inputs to zero.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub(crate) fn to_cents(value: f64) -> i64 {
    let cents = (sanitize(value) * 100.0).round();
    if cents.is_finite() {
        cents.min(MAX_CENTS) as i64
    } else {
        0
    }
}

pub(crate) fn from_cents(cents: i64) -> Money {
    Decimal::new(cents, 2)
}

/// Round a raw amount to the nearest cent, treating invalid input as zero.
pub fn round_to_cents(value: f64) -> Money {
    from_cents(to_cents(value))
}
