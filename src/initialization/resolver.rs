//! DNS resolver initialization.
//!
//! This module provides the resolver used by the probe layer, configured
//! with bounded timeouts.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for reverse (PTR) lookups.
///
/// Creates a resolver with the default configuration and aggressive
/// timeouts so probes fail fast on slow or unresponsive DNS servers.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// tasks, or an error if initialization fails.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = crate::config::DNS_ATTEMPTS;
    // ndots = 0 prevents search-domain appending on reverse names
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
