//! Air→sea what-if analysis and carbon-offset cost estimates.

use tracing::debug;

use super::emissions::lane_co2_per_kg;
use super::entities::{
    CarbonOffsetEstimate, OffsetProgram, ReductionScenario, ShipmentCO2, TransportMode,
};
use super::routes::resolve_lane;
use super::volumetric::SEA_KG_PER_CBM;
use crate::util::{format::format_approx_delta, round_to};

/// USD per tonne CO₂, low and high end of the voluntary market.
pub const OFFSET_PRICE_LOW_PER_TONNE: f64 = 10.0;
pub const OFFSET_PRICE_HIGH_PER_TONNE: f64 = 50.0;

/// Shown when a shipment already travels by sea or the lane has no tariff.
const NOT_APPLICABLE: &str = "-";

/// What moving `shipment` from air to sea would save. Sea shipments come
/// back unchanged with zero savings.
///
/// CO₂, transit and cost all come from one lane resolution. Lanes without
/// a tariff use the default emission factors and show no transit or cost.
pub fn simulate_reduction(shipment: &ShipmentCO2) -> ReductionScenario {
    if shipment.mode == TransportMode::Sea {
        return ReductionScenario {
            shipment_id: shipment.shipment_id.clone(),
            current_mode: TransportMode::Sea,
            current_co2: shipment.co2_kg,
            alternative_mode: TransportMode::Sea,
            alternative_co2: shipment.co2_kg,
            saved_co2: 0.0,
            saved_percent: 0.0,
            additional_transit_display: NOT_APPLICABLE.to_string(),
            cost_difference_display: NOT_APPLICABLE.to_string(),
            is_fallback: shipment.is_fallback,
        };
    }

    let lane = resolve_lane(&shipment.origin, &shipment.destination);
    let sea_factor = lane_co2_per_kg(&lane, TransportMode::Sea);
    let alternative_co2 = round_to(shipment.weight_kg * sea_factor.co2_per_kg, 1);
    let saved_co2 = round_to((shipment.co2_kg - alternative_co2).max(0.0), 1);
    let saved_percent = if shipment.co2_kg > 0.0 {
        round_to(saved_co2 / shipment.co2_kg * 100.0, 1)
    } else {
        0.0
    };

    let (additional_transit_display, cost_difference_display) = match lane.tariff() {
        Some(tariff) => {
            let sea_cost = shipment.weight_kg * tariff.sea.per_cbm_rate / SEA_KG_PER_CBM;
            let air_cost = shipment.weight_kg * tariff.air.per_kg_rate;
            (
                format!(
                    "{}일 (항공 {}일 대비)",
                    tariff.transit_days(TransportMode::Sea),
                    tariff.transit_days(TransportMode::Air)
                ),
                format_approx_delta(sea_cost - air_cost),
            )
        }
        None => {
            debug!("[reduction] no tariff for {}; transit and cost unavailable", lane.key());
            (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string())
        }
    };

    ReductionScenario {
        shipment_id: shipment.shipment_id.clone(),
        current_mode: TransportMode::Air,
        current_co2: shipment.co2_kg,
        alternative_mode: TransportMode::Sea,
        alternative_co2,
        saved_co2,
        saved_percent,
        additional_transit_display,
        cost_difference_display,
        is_fallback: lane.is_fallback,
    }
}

fn offset_programs() -> Vec<OffsetProgram> {
    [
        (
            "Gold Standard Cookstoves",
            "Community energy",
            "$10-20/t",
            "Gold Standard",
        ),
        (
            "Verified Reforestation",
            "Nature-based removal",
            "$15-35/t",
            "Verra VCS",
        ),
        (
            "Ocean Blue Carbon",
            "Mangrove restoration",
            "$30-50/t",
            "Plan Vivo",
        ),
    ]
    .into_iter()
    .map(|(name, kind, price, certification)| OffsetProgram {
        name: name.to_string(),
        kind: kind.to_string(),
        price_range_display: price.to_string(),
        certification: certification.to_string(),
    })
    .collect()
}

/// Cost range for offsetting `total_co2_kg`, with the fixed program list.
pub fn estimate_offset_cost(total_co2_kg: f64) -> CarbonOffsetEstimate {
    let total_co2_kg = total_co2_kg.max(0.0);
    let tonnes = total_co2_kg / 1000.0;
    CarbonOffsetEstimate {
        total_co2_kg,
        tonnes: round_to(tonnes, 3),
        estimated_cost: (
            round_to(tonnes * OFFSET_PRICE_LOW_PER_TONNE, 2),
            round_to(tonnes * OFFSET_PRICE_HIGH_PER_TONNE, 2),
        ),
        programs: offset_programs(),
    }
}
