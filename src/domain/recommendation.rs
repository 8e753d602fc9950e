use serde::Serialize;

use super::entities::{TariffResult, TransportMode};

/// Sea wins outright when it costs less than this share of the air price.
pub const SEA_PREFERENCE_RATIO: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendReason {
    OnlySeaAvailable,
    OnlyAirAvailable,
    SeaMuchCheaper,
    AirCheaper,
    SeaCostEfficiency,
    NoServiceAvailable,
}

impl RecommendReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnlySeaAvailable => "Only sea freight is available between these ports",
            Self::OnlyAirAvailable => "Only air freight is available between these ports",
            Self::SeaMuchCheaper => "Sea freight is significantly cheaper than air",
            Self::AirCheaper => "Air freight is cheaper for this cargo and arrives faster",
            Self::SeaCostEfficiency => "Sea freight offers better cost efficiency",
            Self::NoServiceAvailable => "No transport mode serves both ports",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub mode: Option<TransportMode>,
    pub reason: RecommendReason,
}

/// Fixed three-branch heuristic, biased toward sea on ties.
pub fn recommend_by_price(sea_price: f64, air_price: f64) -> Recommendation {
    let (mode, reason) = if sea_price < air_price * SEA_PREFERENCE_RATIO {
        (TransportMode::Sea, RecommendReason::SeaMuchCheaper)
    } else if air_price < sea_price {
        (TransportMode::Air, RecommendReason::AirCheaper)
    } else {
        (TransportMode::Sea, RecommendReason::SeaCostEfficiency)
    };
    Recommendation {
        mode: Some(mode),
        reason,
    }
}

pub fn recommend_mode(sea: Option<&TariffResult>, air: Option<&TariffResult>) -> Recommendation {
    match (sea, air) {
        (Some(sea), Some(air)) => recommend_by_price(sea.total_price, air.total_price),
        (Some(_), None) => Recommendation {
            mode: Some(TransportMode::Sea),
            reason: RecommendReason::OnlySeaAvailable,
        },
        (None, Some(_)) => Recommendation {
            mode: Some(TransportMode::Air),
            reason: RecommendReason::OnlyAirAvailable,
        },
        (None, None) => Recommendation {
            mode: None,
            reason: RecommendReason::NoServiceAvailable,
        },
    }
}
