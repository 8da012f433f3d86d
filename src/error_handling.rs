//! Error type definitions.
//!
//! One error enum per concern: geolocation database operations, network
//! probes, and resolver initialization. All errors are returned to the
//! caller; nothing is logged and swallowed.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use hickory_resolver::error::ResolveError;
use maxminddb::MaxMindDbError;
use thiserror::Error;

/// Error types for geolocation database operations.
#[derive(Error, Debug)]
pub enum GeoError {
    /// A configured database file could not be opened.
    ///
    /// Construction of the whole reader aborts on the first such failure;
    /// there is no partial-success construction.
    #[error("failed to open geolocation database {}: {source}", path.display())]
    Open {
        /// Path of the database that failed to open.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: MaxMindDbError,
    },

    /// A per-address query against an opened database failed.
    ///
    /// Scoped to the failing call; other categories and future calls are
    /// unaffected.
    #[error("geolocation lookup failed: {0}")]
    Lookup(#[from] MaxMindDbError),
}

/// Error types for network probes.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The reverse DNS lookup failed at the resolver.
    ///
    /// An address without a PTR record is not an error; see
    /// [`reverse_dns`](crate::reverse_dns).
    #[error("reverse DNS lookup failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The TCP connection attempt failed before the timeout elapsed.
    #[error("failed to connect to {target}: {source}")]
    Connect {
        /// Probed address and port.
        target: SocketAddr,
        /// Underlying I/O error from the connect attempt.
        #[source]
        source: std::io::Error,
    },

    /// The TCP connection attempt did not complete within the timeout.
    #[error("connection to {target} timed out after {timeout:?}")]
    Timeout {
        /// Probed address and port.
        target: SocketAddr,
        /// Timeout that was exceeded.
        timeout: Duration,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}
