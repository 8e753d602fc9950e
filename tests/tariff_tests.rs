use freight_quote_engine::{
    calculate_air_tariff, calculate_quote, calculate_sea_tariff, cbm_breakdown, chargeable_preview,
    resolve_route, sum_breakdown, CargoSpec, ContainerType, Incoterms, QuoteRequest,
    TransportMode,
};

fn request(origin: &str, destination: &str, weight_kg: f64, cbm: f64, incoterms: &str) -> QuoteRequest {
    QuoteRequest {
        origin: origin.into(),
        destination: destination.into(),
        weight_kg,
        cbm,
        incoterms: Incoterms::from(incoterms),
        container_type: Some(ContainerType::Ft20),
    }
}

#[test]
fn busan_to_los_angeles_sea_quote() {
    let result = calculate_quote(&request("KRPUS", "USLAX", 1000.0, 5.0, "FOB"));
    let sea = result.sea.expect("Busan and Los Angeles both serve sea freight");

    assert_eq!(sea.breakdown.base_freight, 1800.0);
    assert_eq!(sea.breakdown.fuel_surcharge, 270.0);
    assert_eq!(sea.breakdown.terminal_handling, 250.0);
    assert_eq!(sea.breakdown.documentation_fee, 65.0);
    assert_eq!(sea.total_price, 2385.0);
    assert_eq!(sea.currency, "USD");
    assert_eq!(sea.co2_kg, 16.0);
    assert_eq!(sea.chargeable_weight_kg, 5000.0);
    assert_eq!(sea.transit_days, "25-30");
    assert_eq!(sea.container_type, Some(ContainerType::Ft20));
    assert!(!sea.is_fallback);

    // Los Angeles is a sea-only port.
    assert!(result.air.is_none());
    assert_eq!(result.recommended_mode, Some(TransportMode::Sea));
}

#[test]
fn sea_switches_to_volumetric_pricing_for_large_volumes() {
    let mut req = request("KRPUS", "USLAX", 8000.0, 50.0, "FOB");
    req.container_type = Some(ContainerType::Ft40);
    let sea = calculate_quote(&req).sea.unwrap();
    // 50 * 45 = 2250 < 3200 flat for a 40ft box.
    assert_eq!(sea.breakdown.base_freight, 3200.0);

    req.cbm = 80.0;
    let sea = calculate_quote(&req).sea.unwrap();
    assert_eq!(sea.breakdown.base_freight, 3600.0);
    assert_eq!(sea.breakdown.fuel_surcharge, 540.0);
}

#[test]
fn missing_container_type_prices_as_twenty_foot() {
    let mut req = request("KRPUS", "USLAX", 1000.0, 5.0, "FOB");
    req.container_type = None;
    let sea = calculate_quote(&req).sea.unwrap();
    assert_eq!(sea.container_type, Some(ContainerType::Ft20));
    assert_eq!(sea.breakdown.base_freight, 1800.0);
}

#[test]
fn both_modes_priced_when_ports_allow() {
    let result = calculate_quote(&request("KRPUS", "USSEA", 1000.0, 5.0, "FOB"));
    let sea = result.sea.unwrap();
    let air = result.air.unwrap();

    assert_eq!(sea.total_price, 2385.0);
    assert_eq!(air.chargeable_weight_kg, 1000.0);
    assert_eq!(air.breakdown.base_freight, 4800.0);
    assert_eq!(air.breakdown.fuel_surcharge, 1056.0);
    assert_eq!(air.total_price, 4800.0 + 1056.0 + 120.0 + 45.0);
    assert_eq!(air.container_type, None);
    assert_eq!(result.recommended_mode, Some(TransportMode::Sea));
    assert!(result.recommend_reason.contains("cheaper"));
}

#[test]
fn air_co2_follows_chargeable_weight_and_sea_follows_actual() {
    let route = resolve_route("KRPUS", "USSEA");
    let fob = Incoterms::Fob;
    let cargo = CargoSpec {
        weight_kg: 100.0,
        cbm: 2.0,
        incoterms: &fob,
    };

    let air = calculate_air_tariff(route, &cargo);
    assert_eq!(air.chargeable_weight_kg, 334.0);
    assert!((air.co2_kg - 201.1).abs() < 1e-9);

    let sea = calculate_sea_tariff(route, &cargo, ContainerType::Ft20);
    assert!((sea.co2_kg - 1.6).abs() < 1e-9);
    assert_eq!(sea.chargeable_weight_kg, 2000.0);
}

#[test]
fn air_minimum_charge_applies_to_small_parcels() {
    let result = calculate_quote(&request("KRICN", "JPNRT", 10.0, 0.01, "FOB"));
    let air = result.air.unwrap();
    assert_eq!(air.breakdown.base_freight, 75.0);
    // Narita is air-only.
    assert!(result.sea.is_none());
    assert_eq!(result.recommended_mode, Some(TransportMode::Air));
}

#[test]
fn totals_match_breakdown_and_chargeable_never_below_actual() {
    let lanes = [
        ("KRPUS", "USSEA"),
        ("CNSHA", "KRPUS"),
        ("SGSIN", "KRICN"),
        ("KRPUS", "BRSSZ"),
    ];
    let terms = ["EXW", "FOB", "CIF", "DDP", "FCA"];
    let cargo = [(1.0, 0.001), (250.0, 3.0), (12_000.0, 18.5), (40.0, 9.0)];

    for (origin, destination) in lanes {
        for term in terms {
            for (weight, cbm) in cargo {
                let result = calculate_quote(&request(origin, destination, weight, cbm, term));
                for priced in [result.sea, result.air].into_iter().flatten() {
                    assert_eq!(priced.total_price, sum_breakdown(&priced.breakdown));
                    assert!(priced.chargeable_weight_kg >= weight);
                    assert!(priced.co2_kg >= 0.0);
                    assert!(priced.total_price >= 0.0);
                }
            }
        }
    }
}

#[test]
fn unknown_ports_still_get_a_flagged_quote() {
    let result = calculate_quote(&request("BRSSZ", "ZADUR", 500.0, 2.0, "FOB"));
    let sea = result.sea.expect("unregistered ports are assumed to serve sea");
    let air = result.air.expect("unregistered ports are assumed to serve air");
    assert!(sea.is_fallback);
    assert!(air.is_fallback);
    // Default KR-US tariff.
    assert_eq!(sea.breakdown.terminal_handling, 250.0);
}

#[test]
fn made_up_codes_on_a_real_lane_are_flagged() {
    let result = calculate_quote(&request("KRXXX", "USXXX", 1000.0, 5.0, "FOB"));
    let sea = result.sea.expect("unregistered ports are assumed to serve sea");
    let air = result.air.expect("unregistered ports are assumed to serve air");
    // Priced on the real KR-US lane, but neither code is a known port.
    assert_eq!(sea.total_price, 2385.0);
    assert!(sea.is_fallback);
    assert!(air.is_fallback);

    let known = calculate_quote(&request("KRPUS", "USXXX", 1000.0, 5.0, "FOB"));
    assert!(known.sea.expect("sea quote").is_fallback);

    let registered = calculate_quote(&request("KRPUS", "USLAX", 1000.0, 5.0, "FOB"));
    assert!(!registered.sea.expect("sea quote").is_fallback);
}

#[test]
fn cbm_calculator_matches_tariff_chargeable_weights() {
    // 3 one-metre cubes at 300 kg: air bills 501 kg, sea 3000 kg.
    let calc = cbm_breakdown(100.0, 100.0, 100.0, 3, 300.0);
    assert_eq!(calc.cbm, 3.0);
    assert_eq!(calc.air_volumetric_weight_kg, 501.0);

    let route = resolve_route("KRPUS", "USLAX");
    let fob = Incoterms::Fob;
    let cargo = CargoSpec {
        weight_kg: 300.0,
        cbm: calc.cbm,
        incoterms: &fob,
    };
    let air = calculate_air_tariff(route, &cargo);
    let sea = calculate_sea_tariff(route, &cargo, ContainerType::Ft20);
    assert_eq!(calc.air_chargeable_weight_kg, air.chargeable_weight_kg);
    assert_eq!(calc.sea_chargeable_weight_kg, sea.chargeable_weight_kg);

    // Calculator figures are rounded to 0.1 kg; pricing keeps full precision.
    let calc = cbm_breakdown(120.0, 80.0, 150.0, 4, 300.0);
    let cargo = CargoSpec {
        cbm: calc.cbm,
        ..cargo
    };
    let air = calculate_air_tariff(route, &cargo);
    assert_eq!(calc.air_volumetric_weight_kg, 961.9);
    assert!((calc.air_chargeable_weight_kg - air.chargeable_weight_kg).abs() < 0.05);
    let sea = calculate_sea_tariff(route, &cargo, ContainerType::Ft20);
    assert!((calc.sea_chargeable_weight_kg - sea.chargeable_weight_kg).abs() < 0.05);
}

#[test]
fn preview_uses_the_same_divisor_as_air_pricing() {
    let route = resolve_route("KRICN", "USJFK");
    let fob = Incoterms::Fob;
    let cargo = CargoSpec {
        weight_kg: 300.0,
        cbm: 4.2,
        incoterms: &fob,
    };
    let preview = chargeable_preview(cargo.weight_kg, cargo.cbm);
    let air = calculate_air_tariff(route, &cargo);
    assert_eq!(preview.air_kg, air.chargeable_weight_kg);
    let sea = calculate_sea_tariff(route, &cargo, ContainerType::Ft20);
    assert_eq!(preview.sea_kg, sea.chargeable_weight_kg);
}
