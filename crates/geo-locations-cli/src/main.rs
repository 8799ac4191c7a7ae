//! geo-locations — Command-line interface for geo-locations-core
//!
//! This binary provides a simple way to inspect a geo-locations dataset
//! from your terminal: countries, currencies, flags, states and cities.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geo-locations stats
//!
//! - Lookup a country by code or by name
//!   $ geo-locations country US
//!   $ geo-locations country-by-name "united arab emirates"
//!
//! - Currency and flag lookups
//!   $ geo-locations currency USD
//!   $ geo-locations currency-for FR
//!   $ geo-locations flag JP
//!
//! - States and cities
//!   $ geo-locations states US
//!   $ geo-locations cities US CA
//!
//! - Everything about one country, as JSON
//!   $ geo-locations --json complete IN
//!
//! Data source
//! -----------
//!
//! By default, the CLI reads the small dataset bundled with `geo-locations-core`.
//! Use `--data-dir <DIR>` (or `GEO_LOCATIONS_DATA_DIR`) to point it at a
//! full dataset. Lookups that find nothing print a note on stderr and exit
//! successfully; a dataset that cannot be loaded is an error.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geo_locations_core::{GeoConfig, GeoLocations};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = match args.data_dir {
        Some(dir) => GeoConfig::new(dir),
        None => GeoConfig::new(GeoConfig::bundled_data_dir()),
    };
    debug!(data_dir = %config.data_dir.display(), "using dataset");
    let geo = GeoLocations::from_config(&config);
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = geo.stats().context("loading dataset")?;
            if json {
                print_json(&stats)?;
            } else {
                println!("Dataset statistics ({}):", config.data_dir.display());
                println!("  Countries: {}", stats.countries);
                println!("  Currencies: {}", stats.currencies);
                println!("  Flags: {}", stats.flags);
            }
        }

        Commands::Countries => {
            let countries = geo.countries().context("loading countries")?;
            if json {
                print_json(&countries)?;
            } else {
                for c in countries {
                    println!("{} ({})", c.name(), c.code());
                }
            }
        }

        Commands::Country { code } => match geo.country_by_code(&code)? {
            Some(c) if json => print_json(c)?,
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Code: {}", c.code());
                for (key, value) in &c.extra {
                    println!("{key}: {}", display_value(value));
                }
            }
            None => eprintln!("No country found for code: {code}"),
        },

        Commands::CountryByName { name } => match geo.country_by_name(&name)? {
            Some(c) if json => print_json(c)?,
            Some(c) => println!("{} ({})", c.name(), c.code()),
            None => eprintln!("No country found named: {name}"),
        },

        Commands::Currencies => {
            let currencies = geo.currencies().context("loading currencies")?;
            if json {
                print_json(&currencies)?;
            } else {
                for c in currencies {
                    println!("{} {} ({})", c.country_code, c.currency_code, c.currency_name);
                }
            }
        }

        Commands::Currency { code } => match geo.currency_by_code(&code)? {
            Some(c) if json => print_json(c)?,
            Some(c) => println!(
                "{}: {} (first listed for {})",
                c.currency_code, c.currency_name, c.country_code
            ),
            None => eprintln!("No currency found for code: {code}"),
        },

        Commands::CurrencyFor { country_code } => {
            match geo.currency_by_country_code(&country_code)? {
                Some(c) if json => print_json(c)?,
                Some(c) => println!("{}: {} ({})", country_code, c.currency_name, c.currency_code),
                None => eprintln!("No currency found for country: {country_code}"),
            }
        }

        Commands::Flag { country_code } => match geo.flag_by_country_code(&country_code)? {
            Some(f) if json => print_json(f)?,
            Some(f) => {
                println!("Flag: {} {}", f.emoji, f.name);
                println!("Code: {}", f.code);
                println!("SVG: {}", f.svg_url);
            }
            None => eprintln!("No flag found for country: {country_code}"),
        },

        Commands::States { country_code } => match geo.states_by_country_code(&country_code)? {
            Some(states) if json => print_json(&*states)?,
            Some(states) => {
                println!("States in {country_code}: {}", states.len());
                for s in states.values() {
                    println!("- {} ({})", s.name(), s.code());
                }
            }
            None => eprintln!("No states found for country: {country_code}"),
        },

        Commands::Cities {
            country_code,
            state_code,
        } => match geo.cities_by_state(&country_code, &state_code)? {
            Some(cities) if json => print_json(&*cities)?,
            Some(cities) => {
                println!("Cities in {country_code}/{state_code}: {}", cities.len());
                for (id, name) in cities.iter() {
                    println!("{id}: {name}");
                }
            }
            None => eprintln!("No cities found for state: {country_code}/{state_code}"),
        },

        Commands::Complete { country_code } => match geo.complete_country_data(&country_code)? {
            Some(data) if json => print_json(&data)?,
            Some(data) => {
                println!("Country: {} ({})", data.country.name(), data.country.code());
                match data.currency {
                    Some(c) => println!("Currency: {} ({})", c.currency_name, c.currency_code),
                    None => println!("Currency: -"),
                }
                match data.flag {
                    Some(f) => println!("Flag: {}", f.emoji),
                    None => println!("Flag: -"),
                }
                match &data.locations {
                    Some(doc) => println!(
                        "Locations: {} states, {} cities",
                        doc.state_count(),
                        doc.city_count()
                    ),
                    None => println!("Locations: -"),
                }
            }
            None => eprintln!("No country found for code: {country_code}"),
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(())
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
