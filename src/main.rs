use ChemKin::Examples::demo_data::{gri_nasa_library, h2_o2_reversible};
use ChemKin::Examples::kinetics_examples::kin_examples;
use ChemKin::Kinetics::kinetics_engine::KineticsEngine;
use ChemKin::Kinetics::kinetics_output::{RatesSummary, sweep_table};
use ChemKin::Utils::load_from_file::{load_mechanism, load_nasa_library};
use ChemKin::settings::{CONFIG_FILE, KineticsConfig};
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::error::Error;
use std::sync::Arc;

fn run(config: &KineticsConfig) -> Result<(), Box<dyn Error>> {
    let mechanism = match &config.mechanism_file {
        Some(file) => load_mechanism(file)?,
        None => {
            info!("no mechanism file given, using the hydrogen-oxygen demo mechanism");
            h2_o2_reversible()?
        }
    };
    let thermo = match &config.thermo_file {
        Some(file) => load_nasa_library(file)?,
        None => gri_nasa_library(),
    };
    let engine = KineticsEngine::new(mechanism).with_thermo(Arc::new(thermo));

    let summary = RatesSummary::compute(&engine, &config.concentrations, config.temperature)?;
    summary.print();

    if let Some(sweep) = &config.sweep {
        let points = engine.rates_for_T_range(&config.concentrations, sweep.T0, sweep.Tend, sweep.n)?;
        println!("species rates from {} K to {} K", sweep.T0, sweep.Tend);
        sweep_table(engine.species(), &points).printstd();
    }
    Ok(())
}

pub fn main() {
    let config = KineticsConfig::load(CONFIG_FILE);
    if let Err(e) = TermLogger::init(
        config.log_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger is not initialized: {}", e);
    }

    // ChemKin --example N runs one of the example tasks instead of the configured run
    let args: Vec<String> = std::env::args().collect();
    let result: Result<(), Box<dyn Error>> = match args.iter().position(|a| a == "--example") {
        Some(i) => {
            let task: usize = args.get(i + 1).and_then(|n| n.parse().ok()).unwrap_or(0);
            kin_examples(task).map_err(Box::from)
        }
        None => run(&config),
    };
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
