use std::process::ExitCode;

use subway_planner::fare::Discount;
use subway_planner::network::Network;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: subway-planner <network.json> <source> <target> [discount]

  source, target  station id or name
  discount        rider discount fraction between 0 and 1 (e.g. 0.2)

Set RUST_LOG=debug to trace graph building and fare calculation.";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, source, target, rest @ ..] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let discount = match rest.first().map(|s| s.parse::<f64>()) {
        None => None,
        Some(Ok(fraction)) => match Discount::new(fraction) {
            Ok(discount) => Some(discount),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        },
        Some(Err(e)) => {
            eprintln!("Error: invalid discount: {e}");
            return ExitCode::from(2);
        }
    };

    let network = match Network::load(path) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(source) = network.find_station(source) else {
        eprintln!("Error: unknown station {source}");
        return ExitCode::FAILURE;
    };
    let Some(target) = network.find_station(target) else {
        eprintln!("Error: unknown station {target}");
        return ExitCode::FAILURE;
    };

    let route = match network.route(source.id, target.id, discount) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&route) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
