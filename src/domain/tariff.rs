//! Sea and air pricing plus the two-mode quote comparison.

use tracing::debug;

use super::entities::{
    ContainerType, Incoterms, PortCapability, QuoteComparisonResult, QuoteRequest, TariffBreakdown,
    TariffResult, TransportMode,
};
use super::incoterms::{apply_incoterms, sum_breakdown};
use super::ports::find_port;
use super::recommendation::recommend_mode;
use super::routes::{find_route, RouteTariff};
use super::volumetric::{air_chargeable_weight, sea_chargeable_weight};
use crate::util::round_to;

pub const QUOTE_CURRENCY: &str = "USD";

/// Cargo and terms shared by both pricing functions.
#[derive(Clone, Debug, PartialEq)]
pub struct CargoSpec<'a> {
    pub weight_kg: f64,
    pub cbm: f64,
    pub incoterms: &'a Incoterms,
}

fn finish(breakdown: TariffBreakdown, incoterms: &Incoterms) -> (TariffBreakdown, f64) {
    let subtotal = sum_breakdown(&breakdown);
    let adjusted = apply_incoterms(breakdown, incoterms, subtotal);
    let total = sum_breakdown(&adjusted);
    (adjusted, total)
}

/// Prices a sea shipment: at least the full-container flat rate, switching
/// to per-CBM pricing once that is larger.
pub fn calculate_sea_tariff(
    route: &RouteTariff,
    cargo: &CargoSpec<'_>,
    container: ContainerType,
) -> TariffResult {
    let sea = &route.sea;
    let base_freight = sea
        .container_rates
        .flat_rate(container)
        .max(cargo.cbm * sea.per_cbm_rate);
    let breakdown = TariffBreakdown {
        base_freight,
        fuel_surcharge: (base_freight * sea.baf_percent).round(),
        terminal_handling: sea.terminal_handling,
        documentation_fee: sea.documentation_fee,
        ..TariffBreakdown::default()
    };
    let (breakdown, total_price) = finish(breakdown, cargo.incoterms);

    TariffResult {
        mode: TransportMode::Sea,
        total_price,
        currency: QUOTE_CURRENCY.to_string(),
        breakdown,
        transit_days: sea.transit_days.to_string(),
        // Sea emissions follow actual weight.
        co2_kg: round_to(cargo.weight_kg * sea.co2_per_kg, 1),
        chargeable_weight_kg: sea_chargeable_weight(cargo.weight_kg, cargo.cbm),
        container_type: Some(container),
        is_fallback: false,
    }
}

/// Prices an air shipment on chargeable weight with a minimum charge.
pub fn calculate_air_tariff(route: &RouteTariff, cargo: &CargoSpec<'_>) -> TariffResult {
    let air = &route.air;
    let chargeable_weight = air_chargeable_weight(cargo.weight_kg, cargo.cbm);
    let base_freight = (chargeable_weight * air.per_kg_rate).max(air.minimum_charge);
    let breakdown = TariffBreakdown {
        base_freight,
        fuel_surcharge: (base_freight * air.fsc_percent).round(),
        terminal_handling: air.terminal_handling,
        documentation_fee: air.documentation_fee,
        ..TariffBreakdown::default()
    };
    let (breakdown, total_price) = finish(breakdown, cargo.incoterms);

    TariffResult {
        mode: TransportMode::Air,
        total_price,
        currency: QUOTE_CURRENCY.to_string(),
        breakdown,
        transit_days: air.transit_days.to_string(),
        // Air emissions follow chargeable weight.
        co2_kg: round_to(chargeable_weight * air.co2_per_kg, 1),
        chargeable_weight_kg: chargeable_weight,
        container_type: None,
        is_fallback: false,
    }
}

/// Unregistered ports are assumed to serve both modes; the flag reports
/// whether the code was found.
fn capability_of(code: &str) -> (PortCapability, bool) {
    match find_port(code) {
        Some(port) => (port.capability, true),
        None => {
            debug!("[tariff] port '{code}' not in registry; assuming sea and air service");
            (PortCapability::Both, false)
        }
    }
}

/// Resolves the route, prices every mode both ports support and picks one.
/// Results are flagged as fallbacks when the route defaulted or either port
/// code is unregistered.
pub fn calculate_quote(request: &QuoteRequest) -> QuoteComparisonResult {
    let lookup = find_route(&request.origin, &request.destination);
    let (origin, origin_known) = capability_of(&request.origin);
    let (destination, destination_known) = capability_of(&request.destination);
    let is_fallback = lookup.resolution.is_fallback() || !origin_known || !destination_known;
    let serves = |mode| origin.supports(mode) && destination.supports(mode);

    let cargo = CargoSpec {
        weight_kg: request.weight_kg,
        cbm: request.cbm,
        incoterms: &request.incoterms,
    };

    let sea = serves(TransportMode::Sea).then(|| TariffResult {
        is_fallback,
        ..calculate_sea_tariff(
            lookup.tariff,
            &cargo,
            request.container_type.unwrap_or_default(),
        )
    });
    let air = serves(TransportMode::Air).then(|| TariffResult {
        is_fallback,
        ..calculate_air_tariff(lookup.tariff, &cargo)
    });

    let recommendation = recommend_mode(sea.as_ref(), air.as_ref());
    debug!(
        "[tariff] {} -> {} via {} ({:?}): sea={:?} air={:?} recommend={:?}",
        request.origin,
        request.destination,
        lookup.tariff.key(),
        lookup.resolution,
        sea.as_ref().map(|r| r.total_price),
        air.as_ref().map(|r| r.total_price),
        recommendation.mode
    );

    QuoteComparisonResult {
        sea,
        air,
        recommended_mode: recommendation.mode,
        recommend_reason: recommendation.reason.label().to_string(),
    }
}
