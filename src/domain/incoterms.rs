//! Redistribution of quoted charges according to the trade terms.
//!
//! All Incoterms policy lives here so pricing math never special-cases it.

use tracing::debug;

use super::entities::{Incoterms, TariffBreakdown};
use crate::util::round_to;

/// Cargo insurance as a share of the pre-adjustment subtotal (CIF, DDP).
pub const INSURANCE_RATE: f64 = 0.003;
/// Import duties and taxes as a share of the subtotal (DDP).
pub const CUSTOMS_RATE: f64 = 0.08;
/// Flat destination delivery fee in USD (DDP).
pub const DDP_INLAND_FEE: f64 = 150.0;

/// Rewrites `breakdown` for the party the quote is addressed to.
///
/// EXW zeroes every seller-quoted line: the buyer arranges the whole
/// carriage, so the quote total is 0. Unrecognized terms pass through like FOB.
pub fn apply_incoterms(breakdown: TariffBreakdown, incoterms: &Incoterms, subtotal: f64) -> TariffBreakdown {
    match incoterms {
        Incoterms::Exw => TariffBreakdown {
            base_freight: 0.0,
            fuel_surcharge: 0.0,
            terminal_handling: 0.0,
            documentation_fee: 0.0,
            insurance: None,
            customs_fee: None,
            inland_fee: None,
        },
        Incoterms::Fob => breakdown,
        Incoterms::Cif => TariffBreakdown {
            insurance: Some(round_to(subtotal * INSURANCE_RATE, 2)),
            ..breakdown
        },
        Incoterms::Ddp => TariffBreakdown {
            insurance: Some(round_to(subtotal * INSURANCE_RATE, 2)),
            customs_fee: Some(round_to(subtotal * CUSTOMS_RATE, 2)),
            inland_fee: Some(DDP_INLAND_FEE),
            ..breakdown
        },
        Incoterms::Other(code) => {
            debug!("[incoterms] '{code}' has no special handling; pricing as FOB");
            breakdown
        }
    }
}

/// Sum of all present lines; absent optional lines count as 0.
pub fn sum_breakdown(breakdown: &TariffBreakdown) -> f64 {
    breakdown.base_freight
        + breakdown.fuel_surcharge
        + breakdown.terminal_handling
        + breakdown.documentation_fee
        + breakdown.insurance.unwrap_or(0.0)
        + breakdown.customs_fee.unwrap_or(0.0)
        + breakdown.inland_fee.unwrap_or(0.0)
}
