//! Sanity checks for the dataset shipped in `data/`.

use geo_locations_core::prelude::*;

#[test]
fn test_bundled_dataset_loads() {
    let geo = GeoLocations::bundled();
    let stats = geo.stats().unwrap();
    assert!(stats.countries > 0);
    assert!(stats.currencies > 0);
    assert!(stats.flags > 0);
    assert_eq!(stats.cached_locations, 0);
}

#[test]
fn test_every_country_code_resolves_to_itself() {
    let geo = GeoLocations::bundled();
    for country in geo.countries().unwrap() {
        let found = geo.country_by_code(country.code()).unwrap().unwrap();
        assert_eq!(found.code(), country.code());

        let by_name = geo
            .country_by_name(&country.name().to_uppercase())
            .unwrap()
            .unwrap();
        assert_eq!(by_name.name(), country.name());
    }
}

#[test]
fn test_complete_data_matches_country_lookup() {
    let geo = GeoLocations::bundled();
    for country in geo.countries().unwrap() {
        let data = geo.complete_country_data(country.code()).unwrap().unwrap();
        assert_eq!(data.country, country);
    }
}

#[test]
fn test_bundled_hierarchy() {
    let geo = GeoLocations::bundled();

    let california = geo.cities_by_state("US", "CA").unwrap().unwrap();
    assert!(california.values().any(|c| c == "Los Angeles"));

    let india = geo.complete_country_data("IN").unwrap().unwrap();
    assert_eq!(india.currency.unwrap().currency_name, "Indian Rupee");
    assert!(india.locations.unwrap().state_count() > 0);

    assert_eq!(geo.cached_location_codes(), vec!["IN", "US"]);
}

#[test]
fn test_states_expose_names() {
    let geo = GeoLocations::bundled();
    let doc = geo.location_document("AE").unwrap().unwrap();
    let dubai = doc.state_by_name("DUBAI").unwrap();
    assert_eq!(dubai.code(), "DU");
    assert!(doc.city_count() >= doc.state_count());
}
