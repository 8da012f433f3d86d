//! Reverse DNS lookup.

use std::net::IpAddr;

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ProbeError;

/// Performs a reverse DNS (PTR) lookup for an address.
///
/// Returns the first name the resolver reports, in unrooted form (a single
/// trailing root-label dot is stripped). `Ok(None)` means the address has
/// no PTR record; `Err` means the resolver itself failed.
pub async fn reverse_dns(
    addr: IpAddr,
    resolver: &TokioAsyncResolver,
) -> Result<Option<String>, ProbeError> {
    match resolver.reverse_lookup(addr).await {
        Ok(response) => Ok(response.iter().next().map(|name| unroot(&name.to_utf8()))),
        // No PTR record is an empty result, not a resolver failure
        Err(err) if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(None),
        Err(err) => Err(ProbeError::Resolve(err)),
    }
}

/// Strips a single trailing root-label separator, if present.
fn unroot(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_owned()
}
