//! Quotation and emissions logic lives here. Everything is synchronous and
//! deterministic apart from history ids and timestamps.

pub mod emissions;
pub mod entities;
pub mod history;
pub mod incoterms;
pub mod ports;
pub mod recommendation;
pub mod reduction;
pub mod routes;
pub mod tariff;
pub mod volumetric;

pub use emissions::{
    aggregate_mode_co2, aggregate_monthly_co2, calculate_esg_score, calculate_shipment_co2,
    co2_per_kg, esg_grade, lane_co2_per_kg, total_co2, EmissionFactor,
};
pub use entities::{
    CarbonOffsetEstimate, ContainerType, EsgGrade, EsgScore, Incoterms, ModeCO2, MonthlyCO2,
    OffsetProgram, Port, PortCapability, QuoteComparisonResult, QuoteRequest, ReductionScenario,
    Resolution, ShipmentCO2, ShipmentRecord, TariffBreakdown, TariffResult, TransportMode,
};
pub use history::{QuoteHistoryEntry, HISTORY_LIMIT};
pub use incoterms::{apply_incoterms, sum_breakdown};
pub use ports::{find_port, search_ports};
pub use recommendation::{recommend_mode, RecommendReason, Recommendation};
pub use reduction::{estimate_offset_cost, simulate_reduction};
pub use routes::{find_route, resolve_lane, resolve_route, Lane, RouteLookup, RouteTariff};
pub use tariff::{calculate_air_tariff, calculate_quote, calculate_sea_tariff, CargoSpec};
pub use volumetric::{
    cbm_breakdown, cbm_from_dimensions, chargeable_preview, AIR_KG_PER_CBM, SEA_KG_PER_CBM,
};
