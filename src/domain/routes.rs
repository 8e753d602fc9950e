//! Static per-country-pair rate parameters and route resolution.
//!
//! Lookups never fail: an unmatched pair degrades to [`default_route`], and
//! the returned [`Resolution`] records whether that happened.

use serde::Serialize;
use tracing::debug;

use super::entities::{ContainerType, Resolution, TransportMode};
use super::ports::country_prefix;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRates {
    pub ft20: f64,
    pub ft40: f64,
    pub ft40_high_cube: f64,
}

impl ContainerRates {
    pub fn flat_rate(&self, container: ContainerType) -> f64 {
        match container {
            ContainerType::Ft20 => self.ft20,
            ContainerType::Ft40 => self.ft40,
            ContainerType::Ft40HighCube => self.ft40_high_cube,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaTariff {
    pub per_cbm_rate: f64,
    pub container_rates: ContainerRates,
    pub baf_percent: f64,
    pub terminal_handling: f64,
    pub documentation_fee: f64,
    pub transit_days: &'static str,
    pub co2_per_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirTariff {
    pub per_kg_rate: f64,
    pub minimum_charge: f64,
    pub fsc_percent: f64,
    pub terminal_handling: f64,
    pub documentation_fee: f64,
    pub transit_days: &'static str,
    pub co2_per_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTariff {
    pub origin_country: &'static str,
    pub dest_country: &'static str,
    pub sea: SeaTariff,
    pub air: AirTariff,
}

impl RouteTariff {
    pub fn key(&self) -> String {
        format!("{}-{}", self.origin_country, self.dest_country)
    }

    pub fn co2_per_kg(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Sea => self.sea.co2_per_kg,
            TransportMode::Air => self.air.co2_per_kg,
        }
    }

    pub fn transit_days(&self, mode: TransportMode) -> &'static str {
        match mode {
            TransportMode::Sea => self.sea.transit_days,
            TransportMode::Air => self.air.transit_days,
        }
    }

    fn connects(&self, a: &str, b: &str) -> bool {
        self.origin_country == a && self.dest_country == b
    }
}

/// A route together with how it was found.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLookup {
    pub tariff: &'static RouteTariff,
    pub resolution: Resolution,
}

const fn route(
    origin_country: &'static str,
    dest_country: &'static str,
    sea: SeaTariff,
    air: AirTariff,
) -> RouteTariff {
    RouteTariff {
        origin_country,
        dest_country,
        sea,
        air,
    }
}

const fn containers(ft20: f64, ft40: f64, ft40_high_cube: f64) -> ContainerRates {
    ContainerRates {
        ft20,
        ft40,
        ft40_high_cube,
    }
}

const fn sea(
    per_cbm_rate: f64,
    container_rates: ContainerRates,
    baf_percent: f64,
    terminal_handling: f64,
    documentation_fee: f64,
    transit_days: &'static str,
    co2_per_kg: f64,
) -> SeaTariff {
    SeaTariff {
        per_cbm_rate,
        container_rates,
        baf_percent,
        terminal_handling,
        documentation_fee,
        transit_days,
        co2_per_kg,
    }
}

const fn air(
    per_kg_rate: f64,
    minimum_charge: f64,
    fsc_percent: f64,
    terminal_handling: f64,
    documentation_fee: f64,
    transit_days: &'static str,
    co2_per_kg: f64,
) -> AirTariff {
    AirTariff {
        per_kg_rate,
        minimum_charge,
        fsc_percent,
        terminal_handling,
        documentation_fee,
        transit_days,
        co2_per_kg,
    }
}

/// Index of the fallback route inside [`ROUTE_TABLE`] (KR-US).
const DEFAULT_ROUTE_INDEX: usize = 0;

pub static ROUTE_TABLE: [RouteTariff; 8] = [
    route(
        "KR",
        "US",
        sea(45.0, containers(1800.0, 3200.0, 3400.0), 0.15, 250.0, 65.0, "25-30", 0.016),
        air(4.8, 150.0, 0.22, 120.0, 45.0, "3-5", 0.602),
    ),
    route(
        "KR",
        "CN",
        sea(18.0, containers(450.0, 800.0, 850.0), 0.12, 180.0, 50.0, "3-5", 0.012),
        air(2.1, 80.0, 0.18, 90.0, 40.0, "1-2", 0.55),
    ),
    route(
        "KR",
        "JP",
        sea(15.0, containers(400.0, 720.0, 760.0), 0.10, 170.0, 50.0, "2-4", 0.011),
        air(1.9, 75.0, 0.18, 90.0, 40.0, "1-2", 0.52),
    ),
    route(
        "KR",
        "SG",
        sea(28.0, containers(900.0, 1600.0, 1700.0), 0.14, 200.0, 55.0, "7-10", 0.014),
        air(3.2, 110.0, 0.20, 100.0, 45.0, "1-3", 0.58),
    ),
    route(
        "KR",
        "VN",
        sea(24.0, containers(700.0, 1250.0, 1320.0), 0.13, 190.0, 55.0, "5-7", 0.013),
        air(2.6, 95.0, 0.19, 95.0, 40.0, "1-2", 0.56),
    ),
    route(
        "KR",
        "NL",
        sea(52.0, containers(2100.0, 3800.0, 4000.0), 0.17, 280.0, 75.0, "30-35", 0.018),
        air(5.4, 170.0, 0.24, 130.0, 50.0, "3-5", 0.64),
    ),
    route(
        "KR",
        "DE",
        sea(55.0, containers(2200.0, 3950.0, 4150.0), 0.17, 290.0, 75.0, "32-38", 0.019),
        air(5.6, 175.0, 0.24, 130.0, 50.0, "3-5", 0.65),
    ),
    route(
        "CN",
        "US",
        sea(40.0, containers(1650.0, 2950.0, 3150.0), 0.15, 240.0, 65.0, "22-28", 0.017),
        air(4.5, 140.0, 0.22, 115.0, 45.0, "3-5", 0.61),
    ),
];

/// The route every unmatched lookup degrades to.
pub fn default_route() -> &'static RouteTariff {
    &ROUTE_TABLE[DEFAULT_ROUTE_INDEX]
}

/// Direction-insensitive table lookup by country pair, without fallback.
pub fn lookup_country_pair(origin_country: &str, dest_country: &str) -> Option<RouteLookup> {
    let origin = origin_country.to_ascii_uppercase();
    let dest = dest_country.to_ascii_uppercase();

    if let Some(tariff) = ROUTE_TABLE.iter().find(|r| r.connects(&origin, &dest)) {
        return Some(RouteLookup {
            tariff,
            resolution: Resolution::Direct,
        });
    }

    ROUTE_TABLE
        .iter()
        .find(|r| r.connects(&dest, &origin))
        .map(|tariff| RouteLookup {
            tariff,
            resolution: Resolution::Swapped,
        })
}

/// Resolves two port codes to a route: direct, then swapped, then default.
pub fn find_route(origin_code: &str, dest_code: &str) -> RouteLookup {
    let origin_country = country_prefix(origin_code);
    let dest_country = country_prefix(dest_code);

    lookup_country_pair(&origin_country, &dest_country).unwrap_or_else(|| {
        let reason = format!("no tariff for {origin_country}-{dest_country}");
        let tariff = default_route();
        debug!("[routes] {reason}; using default route {}", tariff.key());
        RouteLookup {
            tariff,
            resolution: Resolution::DefaultedFrom(reason),
        }
    })
}

/// Route for two port codes. Always succeeds.
pub fn resolve_route(origin_code: &str, dest_code: &str) -> &'static RouteTariff {
    find_route(origin_code, dest_code).tariff
}

/// Country assumed for city names missing from [`CITY_COUNTRIES`].
pub const DEFAULT_COUNTRY: &str = "KR";

/// Static city → country lookup for shipment display strings (English and
/// Korean spellings, lowercase).
const CITY_COUNTRIES: &[(&str, &str)] = &[
    ("busan", "KR"),
    ("부산", "KR"),
    ("incheon", "KR"),
    ("인천", "KR"),
    ("seoul", "KR"),
    ("서울", "KR"),
    ("gwangyang", "KR"),
    ("광양", "KR"),
    ("los angeles", "US"),
    ("la", "US"),
    ("로스앤젤레스", "US"),
    ("long beach", "US"),
    ("롱비치", "US"),
    ("new york", "US"),
    ("뉴욕", "US"),
    ("chicago", "US"),
    ("시카고", "US"),
    ("seattle", "US"),
    ("시애틀", "US"),
    ("shanghai", "CN"),
    ("상하이", "CN"),
    ("ningbo", "CN"),
    ("닝보", "CN"),
    ("shenzhen", "CN"),
    ("선전", "CN"),
    ("tokyo", "JP"),
    ("도쿄", "JP"),
    ("osaka", "JP"),
    ("오사카", "JP"),
    ("singapore", "SG"),
    ("싱가포르", "SG"),
    ("ho chi minh", "VN"),
    ("ho chi minh city", "VN"),
    ("호찌민", "VN"),
    ("rotterdam", "NL"),
    ("로테르담", "NL"),
    ("amsterdam", "NL"),
    ("암스테르담", "NL"),
    ("hamburg", "DE"),
    ("함부르크", "DE"),
    ("frankfurt", "DE"),
    ("프랑크푸르트", "DE"),
];

/// Maps a display string such as `"Busan, KR"` or `"부산"` to a country code.
pub fn city_country(display: &str) -> (&'static str, Resolution) {
    let city = display
        .split([',', '('])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    match CITY_COUNTRIES.iter().find(|(name, _)| *name == city) {
        Some((_, country)) => (*country, Resolution::Direct),
        None => {
            let reason = format!("unknown city '{}'", display.trim());
            debug!("[routes] {reason}; assuming {DEFAULT_COUNTRY}");
            (DEFAULT_COUNTRY, Resolution::DefaultedFrom(reason))
        }
    }
}

/// A shipment lane resolved from city display strings.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    pub origin_country: &'static str,
    pub dest_country: &'static str,
    /// `None` when no tariff covers the country pair.
    pub route: Option<RouteLookup>,
    /// Set when either city or the route itself was not found.
    pub is_fallback: bool,
}

impl Lane {
    pub fn key(&self) -> String {
        format!("{}-{}", self.origin_country, self.dest_country)
    }

    pub fn tariff(&self) -> Option<&'static RouteTariff> {
        self.route.as_ref().map(|lookup| lookup.tariff)
    }
}

/// Resolves both cities and the country pair in one pass. Unlike
/// [`find_route`] this does not substitute the default route.
pub fn resolve_lane(origin: &str, destination: &str) -> Lane {
    let (origin_country, origin_res) = city_country(origin);
    let (dest_country, dest_res) = city_country(destination);
    let route = lookup_country_pair(origin_country, dest_country);
    let is_fallback = origin_res.is_fallback() || dest_res.is_fallback() || route.is_none();

    Lane {
        origin_country,
        dest_country,
        route,
        is_fallback,
    }
}
