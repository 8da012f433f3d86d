//! ip_enrich library: IP address enrichment and diagnostics
//!
//! This library resolves geographic and network-ownership metadata for a
//! parsed IP address from offline MaxMind databases, and performs live
//! network probes (reverse DNS, TCP port reachability) plus numeric address
//! conversion.
//!
//! The core is [`GeoReader`]: a uniform abstraction over up to three
//! independently-optional geolocation data sources (country, city, ASN).
//! Each source is enabled by supplying its database path at construction
//! time; lookups against unconfigured categories return default records
//! rather than errors.
//!
//! # Example
//!
//! ```no_run
//! use ip_enrich::{init_resolver, reverse_dns, to_decimal, GeoReader};
//! use std::net::IpAddr;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = GeoReader::open(
//!     Some(Path::new("GeoLite2-Country.mmdb")),
//!     None,
//!     None,
//! )?;
//!
//! let addr: IpAddr = "8.8.8.8".parse()?;
//! let country = reader.country(addr)?;
//! println!("{} ({})", country.name, country.iso_code);
//!
//! let resolver = init_resolver()?;
//! if let Some(hostname) = reverse_dns(addr, &resolver).await? {
//!     println!("PTR: {hostname}");
//! }
//! println!("decimal: {}", to_decimal(addr));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The probe functions are async and require a Tokio runtime. Geo lookups
//! and address conversion are synchronous and runtime-free.

#![warn(missing_docs)]

pub mod config;
mod convert;
mod error_handling;
mod geoip;
mod initialization;
mod probe;

// Re-export public API
pub use convert::to_decimal;
pub use error_handling::{GeoError, InitializationError, ProbeError};
pub use geoip::{Asn, City, Country, GeoReader};
pub use initialization::init_resolver;
pub use probe::{probe_port, reverse_dns};
