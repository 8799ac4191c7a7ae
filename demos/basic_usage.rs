//! Basic usage example for geo-locations-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset lazily
//! - Look up countries, currencies and flags
//! - Walk states and cities of a country
//! - Fetch everything about one country at once

use geo_locations_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Geo-Locations Basic Usage Example ===\n");

    let geo = GeoLocations::bundled();

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = geo.countries()?;
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.code());
    }
    println!();

    // Example 2: Find a country by code and by name
    println!("--- Example 2: Find country by code / name ---");
    if let Some(us) = geo.country_by_code("US")? {
        println!("By code: {} ({})", us.name(), us.code());
    }
    if let Some(uae) = geo.country_by_name("united arab emirates")? {
        println!("By name: {} ({})", uae.name(), uae.code());
    }
    println!();

    // Example 3: Currencies
    println!("--- Example 3: Currencies ---");
    if let Some(eur) = geo.currency_by_country_code("FR")? {
        println!("France pays in {} ({})", eur.currency_name, eur.currency_code);
    }
    if let Some(usd) = geo.currency_by_code("USD")? {
        println!("USD is listed first for {}", usd.country_code);
    }
    println!();

    // Example 4: Flags
    println!("--- Example 4: Flag for Japan ---");
    if let Some(flag) = geo.flag_by_country_code("JP")? {
        println!("{} {} -> {}", flag.emoji, flag.name, flag.svg_url);
    }
    println!();

    // Example 5: States and cities
    println!("--- Example 5: States and cities ---");
    if let Some(states) = geo.states_by_country_code("US")? {
        println!("States in US: {}", states.len());
        for state in states.values().take(3) {
            println!("- {} ({})", state.name(), state.code());
        }
    }
    if let Some(cities) = geo.cities_by_state("US", "CA")? {
        println!("Cities in California:");
        for (id, name) in cities.iter().take(5) {
            println!("  {id}: {name}");
        }
    }
    println!();

    // Example 6: Everything about one country
    println!("--- Example 6: Complete data for India ---");
    if let Some(india) = geo.complete_country_data("IN")? {
        println!("Country: {}", india.country.name());
        if let Some(currency) = india.currency {
            println!("Currency: {}", currency.currency_name);
        }
        if let Some(flag) = india.flag {
            println!("Flag: {}", flag.emoji);
        }
        if let Some(locations) = &india.locations {
            println!("Number of states: {}", locations.state_count());
        }
    }
    println!();

    // Example 7: What has been loaded so far
    println!("--- Example 7: Statistics ---");
    let stats = geo.stats()?;
    println!("Countries: {}", stats.countries);
    println!("Currencies: {}", stats.currencies);
    println!("Flags: {}", stats.flags);
    println!("Location documents cached: {:?}", geo.cached_location_codes());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
