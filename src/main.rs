use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use freight_quote_engine::{
    calculate_quote, calculate_shipment_co2, cbm_breakdown, estimate_offset_cost, load_config,
    search_ports, simulate_reduction,
    util::{
        generate_id,
        version::{current_version, version_label, APP_NAME},
    },
    ContainerType, Incoterms, PortCapability, QuoteHistoryEntry, QuoteHistoryStore, QuoteRequest,
    ShipmentRecord, TransportMode,
};

const USAGE: &str = "usage:
  freight-quote quote <origin> <destination> <weightKg> <cbm> [incoterms] [container]
  freight-quote ports <query> [sea|air|both]
  freight-quote cbm <lengthCm> <widthCm> <heightCm> <quantity> <grossWeightKg>
  freight-quote reduce <originCity> <destinationCity> <weight> <sea|air>
  freight-quote offset <co2Kg>
  freight-quote history
  freight-quote --version";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        return Err("missing command".to_string());
    };

    match command.as_str() {
        "quote" => quote(&args[1..]),
        "ports" => {
            let query = args.get(1).ok_or("missing search query")?;
            let filter = args.get(2).map(|raw| parse_capability(raw)).transpose()?;
            print_json(&search_ports(query, filter))
        }
        "cbm" => {
            let quantity = args
                .get(4)
                .ok_or("missing quantity")?
                .parse::<u32>()
                .map_err(|_| "quantity must be a whole number".to_string())?;
            print_json(&cbm_breakdown(
                parse_number(args.get(1), "lengthCm")?,
                parse_number(args.get(2), "widthCm")?,
                parse_number(args.get(3), "heightCm")?,
                quantity,
                parse_number(args.get(5), "grossWeightKg")?,
            ))
        }
        "reduce" => reduce(&args[1..]),
        "offset" => {
            let co2 = parse_number(args.get(1), "co2Kg")?;
            print_json(&estimate_offset_cost(co2))
        }
        "history" => {
            let config = load_config();
            let store = config.history_store().map_err(|err| err.to_string())?;
            tracing::debug!("[history] reading from {}", store.dir().display());
            print_json(&QuoteHistoryStore::new(store).get_history())
        }
        "--version" | "-V" => {
            let semver = current_version()
                .map(|v| v.to_string())
                .unwrap_or_else(|err| err.to_string());
            println!("{APP_NAME} {} ({semver})", version_label());
            Ok(())
        }
        other => Err(format!("unknown command: {other}")),
    }
}

fn quote(args: &[String]) -> Result<(), String> {
    let origin = args.first().ok_or("missing origin")?;
    let destination = args.get(1).ok_or("missing destination")?;
    let request = QuoteRequest {
        origin: origin.clone(),
        destination: destination.clone(),
        weight_kg: parse_number(args.get(2), "weightKg")?,
        cbm: parse_number(args.get(3), "cbm")?,
        incoterms: args
            .get(4)
            .map(|raw| Incoterms::from(raw.as_str()))
            .unwrap_or_default(),
        container_type: args
            .get(5)
            .map(|raw| raw.parse::<ContainerType>())
            .transpose()?,
    };

    let result = calculate_quote(&request);
    let config = load_config();
    for priced in [&result.sea, &result.air].into_iter().flatten() {
        eprintln!("{}: {}", priced.mode, config.format_amount(priced.total_price));
    }

    match config.history_store() {
        Ok(store) => {
            let entry = QuoteHistoryEntry::new(&request, result.clone());
            if let Err(err) = QuoteHistoryStore::new(store).save_history_entry(entry) {
                tracing::warn!("[history] quote not recorded: {err}");
            }
        }
        Err(err) => tracing::warn!("[history] quote not recorded: {err}"),
    }

    print_json(&result)
}

fn reduce(args: &[String]) -> Result<(), String> {
    let origin = args.first().ok_or("missing origin city")?;
    let destination = args.get(1).ok_or("missing destination city")?;
    let weight = args.get(2).ok_or("missing weight")?;
    let mode = args.get(3).ok_or("missing mode")?.parse::<TransportMode>()?;

    let record = ShipmentRecord {
        id: generate_id("shipment"),
        origin: origin.clone(),
        destination: destination.clone(),
        weight: weight.clone(),
        mode,
        departure_date: String::new(),
    };
    print_json(&simulate_reduction(&calculate_shipment_co2(&record)))
}

fn parse_number(raw: Option<&String>, name: &str) -> Result<f64, String> {
    let raw = raw.ok_or_else(|| format!("missing {name}"))?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("{name} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be a non-negative number"));
    }
    Ok(value)
}

fn parse_capability(raw: &str) -> Result<PortCapability, String> {
    match raw.to_ascii_lowercase().as_str() {
        "sea" => Ok(PortCapability::Sea),
        "air" => Ok(PortCapability::Air),
        "both" => Ok(PortCapability::Both),
        other => Err(format!("unknown mode filter: {other}")),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}
