//! Volume and chargeable-weight math shared by the tariff engine, the CBM
//! calculator and the quote-form preview.

use serde::Serialize;

use crate::util::round_to;

/// Air volumetric divisor: one cubic metre bills as 167 kg.
pub const AIR_KG_PER_CBM: f64 = 167.0;
/// Sea weight/measure ratio: one cubic metre bills as 1000 kg.
pub const SEA_KG_PER_CBM: f64 = 1000.0;

pub fn air_volumetric_weight(cbm: f64) -> f64 {
    cbm.max(0.0) * AIR_KG_PER_CBM
}

pub fn sea_volumetric_weight(cbm: f64) -> f64 {
    cbm.max(0.0) * SEA_KG_PER_CBM
}

pub fn air_chargeable_weight(weight_kg: f64, cbm: f64) -> f64 {
    weight_kg.max(air_volumetric_weight(cbm))
}

pub fn sea_chargeable_weight(weight_kg: f64, cbm: f64) -> f64 {
    weight_kg.max(sea_volumetric_weight(cbm))
}

/// Volume in m³ of `quantity` identical boxes measured in centimetres,
/// rounded to 3 decimals.
pub fn cbm_from_dimensions(length_cm: f64, width_cm: f64, height_cm: f64, quantity: u32) -> f64 {
    if length_cm <= 0.0 || width_cm <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    round_to(
        length_cm * width_cm * height_cm / 1_000_000.0 * quantity as f64,
        3,
    )
}

/// Which figure a chargeable weight was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBasis {
    Actual,
    Volumetric,
}

fn basis(weight_kg: f64, volumetric_kg: f64) -> WeightBasis {
    if volumetric_kg > weight_kg {
        WeightBasis::Volumetric
    } else {
        WeightBasis::Actual
    }
}

/// Result of the stand-alone CBM calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CbmBreakdown {
    pub cbm: f64,
    pub air_volumetric_weight_kg: f64,
    pub air_chargeable_weight_kg: f64,
    pub sea_chargeable_weight_kg: f64,
}

pub fn cbm_breakdown(
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    quantity: u32,
    gross_weight_kg: f64,
) -> CbmBreakdown {
    let cbm = cbm_from_dimensions(length_cm, width_cm, height_cm, quantity);
    CbmBreakdown {
        cbm,
        air_volumetric_weight_kg: round_to(air_volumetric_weight(cbm), 1),
        air_chargeable_weight_kg: round_to(air_chargeable_weight(gross_weight_kg, cbm), 1),
        sea_chargeable_weight_kg: round_to(sea_chargeable_weight(gross_weight_kg, cbm), 1),
    }
}

/// Live preview shown under the quote form's weight and volume inputs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeablePreview {
    pub sea_kg: f64,
    pub sea_basis: WeightBasis,
    pub air_kg: f64,
    pub air_basis: WeightBasis,
}

pub fn chargeable_preview(weight_kg: f64, cbm: f64) -> ChargeablePreview {
    ChargeablePreview {
        sea_kg: sea_chargeable_weight(weight_kg, cbm),
        sea_basis: basis(weight_kg, sea_volumetric_weight(cbm)),
        air_kg: air_chargeable_weight(weight_kg, cbm),
        air_basis: basis(weight_kg, air_volumetric_weight(cbm)),
    }
}
