//! TCP port reachability probe.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpStream;

use crate::error_handling::ProbeError;

/// Attempts a TCP connection to `addr:port` within `timeout`.
///
/// A successful connect is released immediately; the call reports
/// reachability at this point in time, nothing more. Callers without
/// special timing requirements should pass
/// [`DEFAULT_PORT_TIMEOUT`](crate::config::DEFAULT_PORT_TIMEOUT).
pub async fn probe_port(addr: IpAddr, port: u16, timeout: Duration) -> Result<(), ProbeError> {
    let target = SocketAddr::new(addr, port);
    match tokio::time::timeout(timeout, TcpStream::connect(target)).await {
        // The stream drops here, releasing the connection
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(source)) => Err(ProbeError::Connect { target, source }),
        Err(_) => Err(ProbeError::Timeout { target, timeout }),
    }
}
