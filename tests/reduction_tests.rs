use freight_quote_engine::{
    calculate_shipment_co2, estimate_offset_cost, simulate_reduction, ShipmentRecord,
    TransportMode,
};

fn record(mode: TransportMode, origin: &str, destination: &str, weight: &str) -> ShipmentRecord {
    ShipmentRecord {
        id: "SHP-2025-001".into(),
        origin: origin.into(),
        destination: destination.into(),
        weight: weight.into(),
        mode,
        departure_date: "2025-04-02".into(),
    }
}

#[test]
fn sea_shipment_is_already_optimal() {
    let co2 = calculate_shipment_co2(&record(TransportMode::Sea, "Busan", "Los Angeles", "1,000 kg"));
    let scenario = simulate_reduction(&co2);
    assert_eq!(scenario.current_mode, TransportMode::Sea);
    assert_eq!(scenario.alternative_mode, TransportMode::Sea);
    assert_eq!(scenario.saved_co2, 0.0);
    assert_eq!(scenario.saved_percent, 0.0);
    assert_eq!(scenario.alternative_co2, scenario.current_co2);
}

#[test]
fn air_shipment_shows_sea_savings() {
    let co2 = calculate_shipment_co2(&record(TransportMode::Air, "Busan", "Los Angeles", "1,000 kg"));
    assert!((co2.co2_kg - 602.0).abs() < 1e-9);

    let scenario = simulate_reduction(&co2);
    assert_eq!(scenario.shipment_id, "SHP-2025-001");
    assert_eq!(scenario.alternative_mode, TransportMode::Sea);
    assert!((scenario.alternative_co2 - 16.0).abs() < 1e-9);
    assert!((scenario.saved_co2 - 586.0).abs() < 1e-9);
    assert!((scenario.saved_percent - 97.3).abs() < 1e-9);
    assert_eq!(scenario.additional_transit_display, "25-30일 (항공 3-5일 대비)");
    // Sea 1000 kg * $45/CBM / 1000 vs air 1000 kg * $4.8.
    assert_eq!(scenario.cost_difference_display, "약 -$4,755");
    assert!(!scenario.is_fallback);
}

#[test]
fn unknown_lane_still_simulates_with_defaults() {
    let co2 = calculate_shipment_co2(&record(TransportMode::Air, "Busan", "Seoul", "200 kg"));
    let scenario = simulate_reduction(&co2);
    // 200 * 0.58 vs 200 * 0.015
    assert!((scenario.current_co2 - 116.0).abs() < 1e-9);
    assert!((scenario.alternative_co2 - 3.0).abs() < 1e-9);
    assert!(scenario.saved_co2 > 0.0);
    assert!(scenario.is_fallback);
    // No KR-KR tariff, so no borrowed transit or price figures.
    assert_eq!(scenario.additional_transit_display, "-");
    assert_eq!(scenario.cost_difference_display, "-");
}

#[test]
fn unknown_city_on_a_priced_lane_is_flagged() {
    let co2 = calculate_shipment_co2(&record(TransportMode::Air, "Atlantis", "Los Angeles", "1,000 kg"));
    let scenario = simulate_reduction(&co2);
    assert!(scenario.is_fallback);
    assert_eq!(scenario.additional_transit_display, "25-30일 (항공 3-5일 대비)");
    assert_eq!(scenario.cost_difference_display, "약 -$4,755");
}

#[test]
fn transport_mode_parses_from_shipment_feeds() {
    let mode: TransportMode = " Ocean ".parse().unwrap();
    assert_eq!(mode, TransportMode::Sea);
    assert_eq!("AIR".parse::<TransportMode>().unwrap(), TransportMode::Air);
    assert!("rail".parse::<TransportMode>().is_err());
}

#[test]
fn zero_weight_air_shipment_saves_nothing() {
    let co2 = calculate_shipment_co2(&record(TransportMode::Air, "Busan", "Los Angeles", "pending"));
    let scenario = simulate_reduction(&co2);
    assert_eq!(scenario.saved_co2, 0.0);
    assert_eq!(scenario.saved_percent, 0.0);
}

#[test]
fn offset_cost_spans_ten_to_fifty_dollars_per_tonne() {
    let estimate = estimate_offset_cost(2500.0);
    assert_eq!(estimate.tonnes, 2.5);
    assert_eq!(estimate.estimated_cost, (25.0, 125.0));
    assert_eq!(estimate.programs.len(), 3);
    assert!(estimate
        .programs
        .iter()
        .all(|program| !program.price_range_display.is_empty()));
}

#[test]
fn negative_emissions_offset_to_zero() {
    let estimate = estimate_offset_cost(-40.0);
    assert_eq!(estimate.total_co2_kg, 0.0);
    assert_eq!(estimate.estimated_cost, (0.0, 0.0));
}
