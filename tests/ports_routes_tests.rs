use freight_quote_engine::domain::routes::{default_route, lookup_country_pair};
use freight_quote_engine::{
    find_port, find_route, resolve_route, search_ports, PortCapability, Resolution,
};

#[test]
fn empty_query_returns_nothing() {
    assert!(search_ports("", None).is_empty());
    assert!(search_ports("   ", Some(PortCapability::Sea)).is_empty());
}

#[test]
fn search_matches_code_names_and_country() {
    let codes = |query: &str| -> Vec<String> {
        search_ports(query, None)
            .into_iter()
            .map(|port| port.code)
            .collect()
    };
    assert!(codes("busan").contains(&"KRPUS".to_string()));
    assert!(codes("BUSAN").contains(&"KRPUS".to_string()));
    assert!(codes("부산").contains(&"KRPUS".to_string()));
    assert!(codes("uslax").contains(&"USLAX".to_string()));
    assert!(codes("NL").contains(&"NLRTM".to_string()));
}

#[test]
fn mode_filter_keeps_matching_and_dual_ports() {
    let air = search_ports("us", Some(PortCapability::Air));
    assert!(air.iter().any(|port| port.code == "USJFK"));
    assert!(air.iter().any(|port| port.code == "USSEA"));
    assert!(!air.iter().any(|port| port.code == "USLAX"));
    assert!(air
        .iter()
        .all(|port| port.capability != PortCapability::Sea));

    let both: Vec<_> = search_ports("kr", Some(PortCapability::Both))
        .into_iter()
        .map(|port| port.code)
        .collect();
    assert_eq!(both, vec!["KRPUS".to_string(), "KRICN".to_string()]);
}

#[test]
fn find_port_is_case_insensitive() {
    let port = find_port("krpus").unwrap();
    assert_eq!(port.country_code, "KR");
    assert_eq!(port.capability, PortCapability::Both);
    assert!(find_port("XXXXX").is_none());
}

#[test]
fn route_lookup_is_symmetric() {
    let forward = resolve_route("KRPUS", "USLAX");
    let backward = resolve_route("USLAX", "KRPUS");
    assert!(std::ptr::eq(forward, backward));
    assert_eq!(forward.key(), "KR-US");

    assert_eq!(find_route("KRPUS", "USLAX").resolution, Resolution::Direct);
    assert_eq!(find_route("USLAX", "KRPUS").resolution, Resolution::Swapped);
}

#[test]
fn unmatched_pair_falls_back_to_default_route() {
    let lookup = find_route("BRSSZ", "ZADUR");
    assert!(std::ptr::eq(lookup.tariff, default_route()));
    assert!(lookup.resolution.is_fallback());
    match lookup.resolution {
        Resolution::DefaultedFrom(reason) => assert!(reason.contains("BR-ZA")),
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(lookup_country_pair("BR", "ZA").is_none());
}

#[test]
fn same_country_has_no_tariff_but_still_answers() {
    let lookup = find_route("KRPUS", "KRICN");
    assert!(lookup.resolution.is_fallback());
    assert_eq!(lookup.tariff.sea.per_cbm_rate, 45.0);
}
