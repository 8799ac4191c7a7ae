//! Error handling example for geo-locations-rs
//!
//! Shows the difference between "no such data" (`Ok(None)`) and
//! "the dataset could not be loaded" (`Err(GeoError)`).

use geo_locations_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Geo-Locations Error Handling Example ===\n");

    // Example 1: Loading with error handling
    println!("--- Example 1: Loading a dataset ---");
    let geo = GeoLocations::bundled();
    match geo.countries() {
        Ok(countries) => println!("✓ Loaded {} countries", countries.len()),
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: Missing entries are not errors
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "us", "", "ABCD"] {
        match geo.country_by_code(code)? {
            Some(country) => println!("  Found: {} ({})", country.name(), country.code()),
            None => println!("  Not found: {code:?}"),
        }
    }
    match geo.cities_by_state("US", "ZZ")? {
        Some(cities) => println!("  US/ZZ has {} cities", cities.len()),
        None => println!("  Not found: US/ZZ"),
    }
    println!();

    // Example 3: A broken data source is an error
    println!("--- Example 3: Broken data source ---");
    let broken = GeoLocations::with_source(MemorySource::new().with("countries", "[{"));
    match broken.country_by_code("US") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e} (category: {})", e.category()),
    }

    let empty = GeoLocations::with_source(MemorySource::new());
    if let Err(e) = empty.flags() {
        println!("  ✗ {e}");
    }

    Ok(())
}
