//! Cost-of-living catalog
//!
//! Static lookup service for supported study destinations. Each
//! (country, city) pair maps to a [`CostEntry`]: monthly rents for the
//! three housing types, the monthly living cost, the local currency, and
//! the citations the figures came from.
//!
//! The data is embedded in the binary and immutable; listings come back
//! sorted, lookups are exact string matches. The projection engine talks
//! to the catalog through the [`CostSource`] trait so tests and alternate
//! data sets can stand in for the built-in table.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::RentType;

mod data;

/// Cost figures for one city
///
/// All amounts are monthly, in the city's local currency.
///
/// # Example
/// ```
/// use study_cost_core_rs::{Catalog, RentType};
///
/// let entry = Catalog::global().entry("Portugal", "Lisbon").unwrap();
/// assert_eq!(entry.rent(RentType::Shared), 250.0);
/// assert_eq!(entry.living_cost(), 350.0);
/// assert_eq!(entry.currency(), "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Monthly rent, private single room or studio
    rent_single: f64,

    /// Monthly rent, room in a shared flat
    rent_shared: f64,

    /// Monthly rent, university dormitory place
    rent_dorm: f64,

    /// Monthly non-rent living cost (food, transit, misc)
    living_cost: f64,

    /// ISO 4217 currency code
    currency: String,

    /// Citations for the figures (survey, statistics office, university)
    sources: Vec<String>,
}

impl CostEntry {
    /// Create a cost entry
    pub fn new(
        rent_single: f64,
        rent_shared: f64,
        rent_dorm: f64,
        living_cost: f64,
        currency: String,
        sources: Vec<String>,
    ) -> Self {
        Self {
            rent_single,
            rent_shared,
            rent_dorm,
            living_cost,
            currency,
            sources,
        }
    }

    /// Monthly rent for a housing type
    pub fn rent(&self, rent_type: RentType) -> f64 {
        match rent_type {
            RentType::Single => self.rent_single,
            RentType::Shared => self.rent_shared,
            RentType::Dorm => self.rent_dorm,
        }
    }

    /// Monthly rent, single room
    pub fn rent_single(&self) -> f64 {
        self.rent_single
    }

    /// Monthly rent, shared flat
    pub fn rent_shared(&self) -> f64 {
        self.rent_shared
    }

    /// Monthly rent, dormitory
    pub fn rent_dorm(&self) -> f64 {
        self.rent_dorm
    }

    /// Monthly non-rent living cost
    pub fn living_cost(&self) -> f64 {
        self.living_cost
    }

    /// ISO 4217 currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Citations for the figures
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

/// Lookup capability the projection engine depends on
///
/// Implemented by the built-in [`Catalog`]; tests and hosts with their own
/// data implement it to swap the table without touching engine code.
pub trait CostSource {
    /// Supported countries, ascending order
    fn countries(&self) -> Vec<&str>;

    /// Cities for a country, ascending order; empty when the country is
    /// unknown
    fn cities(&self, country: &str) -> Vec<&str>;

    /// Exact-match lookup of a city's cost entry
    fn entry(&self, country: &str, city: &str) -> Option<&CostEntry>;
}

/// The built-in destination table
///
/// # Example
/// ```
/// use study_cost_core_rs::Catalog;
///
/// let catalog = Catalog::global();
/// assert!(catalog.countries().contains(&"Portugal"));
/// assert_eq!(catalog.cities("Portugal"), vec!["Aveiro", "Coimbra", "Lisbon", "Porto"]);
/// assert!(catalog.cities("Atlantis").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    // country -> city -> entry; BTreeMap keys give the sorted listings
    entries: BTreeMap<String, BTreeMap<String, CostEntry>>,
}

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::new);

impl Catalog {
    /// Build an owned copy of the built-in table
    pub fn new() -> Self {
        Self {
            entries: data::builtin(),
        }
    }

    /// Shared instance of the built-in table
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Supported countries, ascending order
    pub fn countries(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Cities for a country, ascending order; empty for an unknown country
    pub fn cities(&self, country: &str) -> Vec<&str> {
        match self.entries.get(country) {
            Some(cities) => cities.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Exact-match lookup of a city's cost entry
    pub fn entry(&self, country: &str, city: &str) -> Option<&CostEntry> {
        self.entries.get(country)?.get(city)
    }

    /// Monthly rent for a housing type in a city
    pub fn rent_for(&self, country: &str, city: &str, rent_type: RentType) -> Option<f64> {
        self.entry(country, city).map(|e| e.rent(rent_type))
    }

    /// Number of listed cities across all countries
    pub fn city_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CostSource for Catalog {
    fn countries(&self) -> Vec<&str> {
        Catalog::countries(self)
    }

    fn cities(&self, country: &str) -> Vec<&str> {
        Catalog::cities(self, country)
    }

    fn entry(&self, country: &str, city: &str) -> Option<&CostEntry> {
        Catalog::entry(self, country, city)
    }
}

/// Display symbol for an ISO 4217 currency code
///
/// Unknown codes come back unchanged, so rendering always has something
/// to print.
///
/// # Example
/// ```
/// use study_cost_core_rs::currency_symbol;
///
/// assert_eq!(currency_symbol("EUR"), "€");
/// assert_eq!(currency_symbol("SEK"), "kr");
/// assert_eq!(currency_symbol("XYZ"), "XYZ");
/// ```
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "USD" => "$",
        "CAD" => "C$",
        "AUD" => "A$",
        "JPY" => "¥",
        "KRW" => "₩",
        "SGD" => "S$",
        "NZD" => "NZ$",
        "CHF" => "CHF",
        "SEK" | "DKK" | "NOK" => "kr",
        other => other,
    }
}
