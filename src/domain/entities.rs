use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which transport legs a port or airport can serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortCapability {
    Sea,
    Air,
    Both,
}

impl PortCapability {
    pub fn supports(&self, mode: TransportMode) -> bool {
        match self {
            PortCapability::Both => true,
            PortCapability::Sea => mode == TransportMode::Sea,
            PortCapability::Air => mode == TransportMode::Air,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Sea,
    Air,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sea" | "ocean" => Ok(TransportMode::Sea),
            "air" => Ok(TransportMode::Air),
            other => Err(format!("unknown transport mode: {other}")),
        }
    }
}

/// A port or airport from the static registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub code: String,
    pub name: String,
    pub short_name_localized: String,
    pub name_english: String,
    pub country_code: String,
    pub capability: PortCapability,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    #[default]
    #[serde(rename = "20ft")]
    Ft20,
    #[serde(rename = "40ft")]
    Ft40,
    #[serde(rename = "40ft-highcube")]
    Ft40HighCube,
}

impl ContainerType {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerType::Ft20 => "20ft",
            ContainerType::Ft40 => "40ft",
            ContainerType::Ft40HighCube => "40ft-highcube",
        }
    }
}

impl FromStr for ContainerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "20ft" | "20" => Ok(ContainerType::Ft20),
            "40ft" | "40" => Ok(ContainerType::Ft40),
            "40ft-highcube" | "40hc" | "40ft-hc" => Ok(ContainerType::Ft40HighCube),
            other => Err(format!("unknown container type: {other}")),
        }
    }
}

/// Trade terms. Only EXW, FOB, CIF and DDP change the quote; anything else
/// is carried verbatim and priced like FOB.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Incoterms {
    Exw,
    #[default]
    Fob,
    Cif,
    Ddp,
    Other(String),
}

impl Incoterms {
    pub fn code(&self) -> &str {
        match self {
            Incoterms::Exw => "EXW",
            Incoterms::Fob => "FOB",
            Incoterms::Cif => "CIF",
            Incoterms::Ddp => "DDP",
            Incoterms::Other(code) => code,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Incoterms::Other(_))
    }
}

impl From<&str> for Incoterms {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "EXW" => Incoterms::Exw,
            "FOB" => Incoterms::Fob,
            "CIF" => Incoterms::Cif,
            "DDP" => Incoterms::Ddp,
            other => Incoterms::Other(other.to_string()),
        }
    }
}

impl From<String> for Incoterms {
    fn from(value: String) -> Self {
        Incoterms::from(value.as_str())
    }
}

impl From<Incoterms> for String {
    fn from(value: Incoterms) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Incoterms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Itemized charges in USD. Optional lines only appear for the Incoterms
/// that add them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffBreakdown {
    pub base_freight: f64,
    pub fuel_surcharge: f64,
    pub terminal_handling: f64,
    pub documentation_fee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customs_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inland_fee: Option<f64>,
}

/// How a lookup against a static table was satisfied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "camelCase")]
pub enum Resolution {
    #[default]
    Direct,
    Swapped,
    DefaultedFrom(String),
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::DefaultedFrom(_))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffResult {
    pub mode: TransportMode,
    pub total_price: f64,
    pub currency: String,
    pub breakdown: TariffBreakdown,
    pub transit_days: String,
    pub co2_kg: f64,
    pub chargeable_weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,
    /// Set when the route came from the default fallback rather than the table.
    #[serde(default)]
    pub is_fallback: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteComparisonResult {
    pub sea: Option<TariffResult>,
    pub air: Option<TariffResult>,
    pub recommended_mode: Option<TransportMode>,
    pub recommend_reason: String,
}

/// Parameters for a single quote, as supplied by the quote form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub cbm: f64,
    #[serde(default)]
    pub incoterms: Incoterms,
    #[serde(default)]
    pub container_type: Option<ContainerType>,
}

/// A shipment as listed by the surrounding data layer. Origin, destination
/// and weight are display strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub mode: TransportMode,
    pub departure_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCO2 {
    pub shipment_id: String,
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub weight_kg: f64,
    pub co2_kg: f64,
    pub co2_per_kg: f64,
    pub route_key: String,
    #[serde(default)]
    pub is_fallback: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EsgGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
}

impl EsgGrade {
    pub fn label(&self) -> &'static str {
        match self {
            EsgGrade::APlus => "A+",
            EsgGrade::A => "A",
            EsgGrade::BPlus => "B+",
            EsgGrade::B => "B",
            EsgGrade::C => "C",
            EsgGrade::D => "D",
        }
    }
}

impl fmt::Display for EsgGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgScore {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub overall: f64,
    pub grade: EsgGrade,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCO2 {
    pub month: u8,
    pub label: String,
    pub co2_kg: f64,
    pub shipments: u32,
    pub target_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeCO2 {
    pub mode: TransportMode,
    pub total_co2_kg: f64,
    pub shipments: u32,
    pub avg_co2_per_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionScenario {
    pub shipment_id: String,
    pub current_mode: TransportMode,
    pub current_co2: f64,
    pub alternative_mode: TransportMode,
    pub alternative_co2: f64,
    pub saved_co2: f64,
    pub saved_percent: f64,
    pub additional_transit_display: String,
    pub cost_difference_display: String,
    /// Set when the lane did not resolve; the displays are then `"-"`.
    #[serde(default)]
    pub is_fallback: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetProgram {
    pub name: String,
    pub kind: String,
    pub price_range_display: String,
    pub certification: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonOffsetEstimate {
    pub total_co2_kg: f64,
    pub tonnes: f64,
    /// Low and high estimate in USD.
    pub estimated_cost: (f64, f64),
    pub programs: Vec<OffsetProgram>,
}
