use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geo-locations-cli
#[derive(Debug, Parser)]
#[command(
    name = "geo-locations",
    version,
    about = "CLI for querying the geo-locations reference dataset"
)]
pub struct CliArgs {
    /// Data directory containing countries.json, currencies.json, flags.json and locations/
    #[arg(short = 'd', long = "data-dir", env = "GEO_LOCATIONS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all countries
    Countries,

    /// Lookup a country by code (exact, case-sensitive)
    Country {
        /// Country code (e.g. US)
        code: String,
    },

    /// Lookup a country by name (case-insensitive)
    CountryByName {
        /// Full country name (e.g. "united arab emirates")
        name: String,
    },

    /// List all currencies
    Currencies,

    /// Lookup a currency by currency code
    Currency {
        /// Currency code (e.g. USD)
        code: String,
    },

    /// Lookup the currency of a country
    CurrencyFor {
        /// Country code (e.g. FR)
        country_code: String,
    },

    /// Show the flag of a country
    Flag {
        /// Country code (e.g. JP)
        country_code: String,
    },

    /// List all states for a given country
    States {
        /// Country code (e.g. US)
        country_code: String,
    },

    /// List the cities of a state
    Cities {
        /// Country code (e.g. US)
        country_code: String,
        /// State code (e.g. CA)
        state_code: String,
    },

    /// Show country, currency, flag and location summary together
    Complete {
        /// Country code (e.g. IN)
        country_code: String,
    },
}
