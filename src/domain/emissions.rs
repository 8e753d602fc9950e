//! Per-shipment CO₂ estimates, fleet aggregation and the ESG composite.

use time::{macros::format_description, Date};
use tracing::debug;

use super::entities::{
    EsgGrade, EsgScore, ModeCO2, MonthlyCO2, ShipmentCO2, ShipmentRecord, TransportMode,
};
use super::routes::{resolve_lane, Lane};
use crate::util::round_to;

/// kg CO₂ per kg of cargo when no route matches.
pub const DEFAULT_SEA_CO2_PER_KG: f64 = 0.015;
pub const DEFAULT_AIR_CO2_PER_KG: f64 = 0.58;

/// Reporting window: calendar months 1 through 6.
pub const MONTHLY_WINDOW: [u8; 6] = [1, 2, 3, 4, 5, 6];
pub const MONTHLY_TARGET_START_KG: f64 = 5000.0;
pub const MONTHLY_TARGET_DECAY: f64 = 0.05;

/// Placeholder pillar scores; no input feeds them yet.
pub const SOCIAL_SCORE: f64 = 88.0;
pub const GOVERNANCE_SCORE: f64 = 82.0;

pub const ENVIRONMENTAL_WEIGHT: f64 = 0.4;
pub const SOCIAL_WEIGHT: f64 = 0.3;
pub const GOVERNANCE_WEIGHT: f64 = 0.3;

/// Emission factor for one lane and mode.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionFactor {
    pub co2_per_kg: f64,
    pub route_key: String,
    /// True when a city or the route itself was not found.
    pub is_fallback: bool,
}

/// Resolves the lane through the static city table, falling back to the
/// mode's default factor when no route matches.
pub fn co2_per_kg(origin: &str, destination: &str, mode: TransportMode) -> EmissionFactor {
    lane_co2_per_kg(&resolve_lane(origin, destination), mode)
}

/// Emission factor for an already resolved lane.
pub fn lane_co2_per_kg(lane: &Lane, mode: TransportMode) -> EmissionFactor {
    let route_key = lane.key();
    let co2_per_kg = match lane.tariff() {
        Some(tariff) => tariff.co2_per_kg(mode),
        None => {
            debug!("[emissions] no route for {route_key}; default {mode} factor");
            match mode {
                TransportMode::Sea => DEFAULT_SEA_CO2_PER_KG,
                TransportMode::Air => DEFAULT_AIR_CO2_PER_KG,
            }
        }
    };

    EmissionFactor {
        co2_per_kg,
        route_key,
        is_fallback: lane.is_fallback,
    }
}

/// Parses weights written as `<number> kg`, e.g. `"12,500 kg"` or
/// `"850.5kg"`. Spaces, thousands commas and a `kg` suffix are accepted.
/// Anything else is read leniently from the first number in the string;
/// negative or unreadable weights are 0 kg.
pub fn parse_weight_kg(input: &str) -> f64 {
    let compact: String = input
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .collect::<String>()
        .to_ascii_lowercase();
    let number = compact.strip_suffix("kg").unwrap_or(&compact);
    if let Some(value) = non_negative(number) {
        return value;
    }
    if number.starts_with('-') {
        debug!("[emissions] negative weight '{}'; read as 0 kg", input);
        return 0.0;
    }

    let value = input
        .find(|ch: char| ch.is_ascii_digit())
        .and_then(|start| {
            let run: String = input[start..]
                .chars()
                .take_while(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == ',')
                .filter(|ch| *ch != ',')
                .collect();
            non_negative(&run)
        })
        .unwrap_or(0.0);
    debug!("[emissions] weight '{}' is not '<number> kg'; read as {} kg", input, value);
    value
}

fn non_negative(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

pub fn departure_month(record: &ShipmentRecord) -> Option<u8> {
    let format = format_description!("[year]-[month]-[day]");
    let raw = record.departure_date.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    Date::parse(date_part, &format)
        .map(|date| u8::from(date.month()))
        .ok()
}

pub fn calculate_shipment_co2(record: &ShipmentRecord) -> ShipmentCO2 {
    let weight_kg = parse_weight_kg(&record.weight);
    let factor = co2_per_kg(&record.origin, &record.destination, record.mode);

    ShipmentCO2 {
        shipment_id: record.id.clone(),
        origin: record.origin.clone(),
        destination: record.destination.clone(),
        mode: record.mode,
        weight_kg,
        co2_kg: round_to(weight_kg * factor.co2_per_kg, 1),
        co2_per_kg: factor.co2_per_kg,
        route_key: factor.route_key,
        is_fallback: factor.is_fallback,
    }
}

pub fn total_co2(shipments: &[ShipmentCO2]) -> f64 {
    round_to(shipments.iter().map(|s| s.co2_kg).sum(), 1)
}

/// Buckets emissions into [`MONTHLY_WINDOW`] by departure month, alongside
/// a target that shrinks 5% per month from 5000 kg regardless of the data.
pub fn aggregate_monthly_co2(records: &[ShipmentRecord]) -> Vec<MonthlyCO2> {
    let mut buckets: Vec<MonthlyCO2> = MONTHLY_WINDOW
        .iter()
        .enumerate()
        .map(|(idx, month)| MonthlyCO2 {
            month: *month,
            label: format!("{month}월"),
            co2_kg: 0.0,
            shipments: 0,
            target_kg: (MONTHLY_TARGET_START_KG * (1.0 - MONTHLY_TARGET_DECAY).powi(idx as i32))
                .round(),
        })
        .collect();

    for record in records {
        let Some(month) = departure_month(record) else {
            debug!(
                "[emissions] shipment {} has unreadable departure date '{}'",
                record.id, record.departure_date
            );
            continue;
        };
        if let Some(bucket) = buckets.iter_mut().find(|b| b.month == month) {
            bucket.co2_kg += calculate_shipment_co2(record).co2_kg;
            bucket.shipments += 1;
        }
    }

    for bucket in &mut buckets {
        bucket.co2_kg = round_to(bucket.co2_kg, 1);
    }
    buckets
}

/// Sea and air totals with the mean per-kg intensity of each mode.
pub fn aggregate_mode_co2(records: &[ShipmentRecord]) -> Vec<ModeCO2> {
    [TransportMode::Sea, TransportMode::Air]
        .into_iter()
        .map(|mode| {
            let (total, intensity, count) = records
                .iter()
                .filter(|record| record.mode == mode)
                .map(calculate_shipment_co2)
                .fold((0.0, 0.0, 0_u32), |(total, intensity, count), s| {
                    (total + s.co2_kg, intensity + s.co2_per_kg, count + 1)
                });
            ModeCO2 {
                mode,
                total_co2_kg: round_to(total, 1),
                shipments: count,
                avg_co2_per_kg: if count == 0 {
                    0.0
                } else {
                    round_to(intensity / count as f64, 4)
                },
            }
        })
        .collect()
}

pub fn esg_grade(overall: f64) -> EsgGrade {
    if overall >= 90.0 {
        EsgGrade::APlus
    } else if overall >= 80.0 {
        EsgGrade::A
    } else if overall >= 70.0 {
        EsgGrade::BPlus
    } else if overall >= 60.0 {
        EsgGrade::B
    } else if overall >= 50.0 {
        EsgGrade::C
    } else {
        EsgGrade::D
    }
}

/// Composite score from the sea share of `records` and the fixed pillars.
pub fn calculate_esg_score(records: &[ShipmentRecord]) -> EsgScore {
    let sea_share = if records.is_empty() {
        0.0
    } else {
        let sea = records
            .iter()
            .filter(|record| record.mode == TransportMode::Sea)
            .count();
        sea as f64 / records.len() as f64
    };
    let environmental = (sea_share * 120.0 + 20.0).min(100.0);
    let overall = (environmental * ENVIRONMENTAL_WEIGHT
        + SOCIAL_SCORE * SOCIAL_WEIGHT
        + GOVERNANCE_SCORE * GOVERNANCE_WEIGHT)
        .round();

    EsgScore {
        environmental,
        social: SOCIAL_SCORE,
        governance: GOVERNANCE_SCORE,
        overall,
        grade: esg_grade(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> ShipmentRecord {
        ShipmentRecord {
            id: "S-1".into(),
            origin: "Busan".into(),
            destination: "Los Angeles".into(),
            weight: "1,000 kg".into(),
            mode: TransportMode::Sea,
            departure_date: date.into(),
        }
    }

    #[test]
    fn weight_strings_are_lenient() {
        assert_eq!(parse_weight_kg("12,500 kg"), 12_500.0);
        assert_eq!(parse_weight_kg("850.5kg"), 850.5);
        assert_eq!(parse_weight_kg("n/a"), 0.0);
        assert_eq!(parse_weight_kg("1 200 KG"), 1_200.0);
        assert_eq!(parse_weight_kg("approx. 300 kg"), 300.0);
    }

    #[test]
    fn negative_weights_read_as_zero() {
        assert_eq!(parse_weight_kg("-500 kg"), 0.0);
        assert_eq!(parse_weight_kg("- 500"), 0.0);
    }

    #[test]
    fn departure_month_accepts_timestamps() {
        assert_eq!(departure_month(&record("2025-03-14")), Some(3));
        assert_eq!(departure_month(&record("2025-11-02T09:00:00Z")), Some(11));
        assert_eq!(departure_month(&record("next week")), None);
    }
}
