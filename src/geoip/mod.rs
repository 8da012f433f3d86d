//! GeoIP lookup using MaxMind databases.
//!
//! This module provides per-address geolocation lookups over up to three
//! independently-optional data sources (country, city, ASN). Raw source
//! records are normalized into stable output shapes with a deterministic
//! fallback-merge policy; any subset of sources may be absent.

mod reader;
mod source;
mod types;

// Re-export public API
pub use reader::GeoReader;
pub use types::{Asn, City, Country};
