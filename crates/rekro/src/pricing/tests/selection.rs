use super::common::*;
use crate::pricing::{
    reprice, toggle, InclusionSelection, InclusionState, InclusionType, Money, PricingContext,
};

#[test]
fn toggle_prices_newly_selected_inclusions() {
    let context = home_context();
    let selection = toggle(
        &InclusionSelection::default(),
        InclusionType::Bills,
        &context,
        &constants(),
    );

    let bills = selection.get(InclusionType::Bills);
    assert!(bills.selected());
    assert_eq!(bills.weekly_price(), money("50"));
    assert_eq!(
        selection.get(InclusionType::Cleaning),
        InclusionState::UNSELECTED
    );
}

#[test]
fn double_toggle_restores_the_original_state() {
    let context = home_context();
    let original = select(&context, &[InclusionType::Cleaning]);

    let once = toggle(&original, InclusionType::Bills, &context, &constants());
    let twice = toggle(&once, InclusionType::Bills, &context, &constants());
    assert_eq!(twice, original);

    let once = toggle(&original, InclusionType::Cleaning, &context, &constants());
    assert_eq!(once.get(InclusionType::Cleaning), InclusionState::UNSELECTED);
    let twice = toggle(&once, InclusionType::Cleaning, &context, &constants());
    assert_eq!(twice, original);
}

#[test]
fn toggle_leaves_the_input_untouched() {
    let context = home_context();
    let original = InclusionSelection::default();
    let _ = toggle(&original, InclusionType::Furniture, &context, &constants());
    assert_eq!(original, InclusionSelection::default());
}

#[test]
fn reprice_follows_a_changed_duration() {
    let context = home_context();
    let selection = select(&context, &[InclusionType::Furniture]);
    assert_eq!(
        selection.get(InclusionType::Furniture).weekly_price(),
        money("38.49")
    );

    let shorter = context.with_duration(6);
    let repriced = reprice(&selection, &shorter, &constants());
    assert_eq!(
        repriced.get(InclusionType::Furniture).weekly_price(),
        money("76.98")
    );
    assert!(!repriced.is_selected(InclusionType::Bills));
}

#[test]
fn selected_types_follow_catalog_order() {
    let context = room_context(0);
    let selection = select(
        &context,
        &[InclusionType::Storage, InclusionType::Cleaning],
    );
    let selected: Vec<_> = selection.selected_types().collect();
    assert_eq!(selected, vec![InclusionType::Cleaning, InclusionType::Storage]);
}

#[test]
fn unknown_inclusion_keys_are_rejected() {
    let payload = serde_json::json!({
        "pool": { "selected": true, "weekly_price": "10" }
    });
    let parsed = serde_json::from_value::<InclusionSelection>(payload);
    assert!(parsed.is_err());
}

#[test]
fn unselected_wire_state_drops_its_price() {
    let payload = serde_json::json!({
        "bills": { "selected": false, "weekly_price": "45.00" }
    });
    let selection: InclusionSelection = serde_json::from_value(payload).expect("parses");
    assert_eq!(selection.get(InclusionType::Bills).weekly_price(), Money::ZERO);
}

#[test]
fn context_defaults_fill_missing_fields() {
    let payload = serde_json::json!({
        "property": { "base_weekly_rent": 500.0 },
        "unit": { "kind": "entire_home" }
    });
    let context: PricingContext = serde_json::from_value(payload).expect("parses");
    assert_eq!(context.rental_duration_months, 12);
    assert!(context.is_entire_home());
    assert_eq!(context.inclusions, InclusionSelection::default());
}

#[test]
fn caller_supplied_prices_are_not_kept() {
    let selection: InclusionSelection = serde_json::from_str(
        r#"{"bills":{"selected":true,"weekly_price":"-999.00"}}"#,
    )
    .expect("parses");

    let bills = selection.get(InclusionType::Bills);
    assert!(bills.selected());
    assert_eq!(bills.weekly_price(), Money::ZERO);

    let repriced = reprice(&selection, &home_context(), &constants());
    assert_eq!(
        repriced.get(InclusionType::Bills).weekly_price(),
        money("50")
    );
}
