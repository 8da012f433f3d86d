//! Configuration constants.
//!
//! This module defines the timeout defaults used by the probe layer and the
//! DNS resolver.

use std::time::Duration;

// Network operation timeouts
/// DNS query timeout in seconds
/// Most queries complete in well under 1s; 3s provides buffer while failing
/// fast on slow or unresponsive DNS servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of DNS query attempts before giving up
pub const DNS_ATTEMPTS: usize = 2;

/// Default timeout for the TCP port reachability probe.
///
/// [`probe_port`](crate::probe_port) takes the timeout as a parameter; this
/// is the documented default callers should pass unless they have a reason
/// to deviate.
pub const DEFAULT_PORT_TIMEOUT: Duration = Duration::from_secs(2);
