//! Geolocation record types.
//!
//! Output value types for the per-category lookups. Records are newly
//! constructed per call and hold no reference back to the reader.

use serde::{Deserialize, Serialize};

/// Resolved country for an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// English country name. Falls back to the registered country's name
    /// when the located country has none; empty when both are missing.
    pub name: String,
    /// ISO 3166-1 country code, resolved with the same fallback as `name`.
    pub iso_code: String,
    /// Whether the address belongs to the European Union.
    ///
    /// `Some` after any successful query against a configured country
    /// source (the OR of the located and registered countries' EU flags);
    /// `None` when no country source is configured.
    pub is_in_european_union: Option<bool>,
}

/// Resolved city-level location for an address.
///
/// All fields default to empty/zero when the source has no value. Latitude
/// and longitude use `0.0` both for "no value" and for a genuine zero
/// coordinate; consumers depending on the zero default should keep that
/// ambiguity in mind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// English city name.
    pub name: String,
    /// English name of the first subdivision (region/state).
    pub region_name: String,
    /// ISO 3166-2 code of the first subdivision.
    pub region_code: String,
    /// Postal code.
    pub postal_code: String,
    /// IANA time zone name, e.g. "America/New_York".
    pub timezone: String,
    /// Approximate latitude. Never NaN.
    pub latitude: f64,
    /// Approximate longitude. Never NaN.
    pub longitude: f64,
}

/// Resolved autonomous system for an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asn {
    /// Autonomous system number. Zero when unavailable; the source's zero
    /// value is reserved and treated as absent.
    pub number: u32,
    /// Organization operating the autonomous system.
    pub organization: String,
}
