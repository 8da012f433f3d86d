//! Numeric conversion of IP addresses.

use std::net::IpAddr;

/// Returns the decimal value of an IP address.
///
/// The address's raw bytes are interpreted as a big-endian unsigned integer:
/// 4 bytes for IPv4, 16 for IPv6. `0.0.0.1` and `::1` both map to 1;
/// `255.255.255.255` maps to 4294967295. The conversion is pure and total.
pub fn to_decimal(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}
