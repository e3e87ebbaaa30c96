use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// First private (RFC 1918) or link-local (RFC 3927) IPv4 address the host
/// would route from.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
pub fn private_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect((Ipv4Addr::new(10, 254, 254, 254), 1)).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if is_private(ip) => Some(ip),
        _ => None,
    }
}

fn is_private(ip: Ipv4Addr) -> bool {
    !ip.is_loopback() && (ip.is_private() || ip.is_link_local())
}

/// Low 8 bits of [`private_ipv4`], or 0 when there is none or it does not
/// fit `node_bits`.
pub fn default_node(node_bits: u32) -> u64 {
    let node = private_ipv4().map_or(0, |ip| u64::from(ip.octets()[3]));
    if node >> node_bits.min(63) == 0 {
        node
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_ranges() {
        assert!(is_private(Ipv4Addr::new(10, 1, 2, 3)));
        assert!(is_private(Ipv4Addr::new(172, 16, 0, 1)));
        assert!(is_private(Ipv4Addr::new(192, 168, 1, 1)));
        assert!(is_private(Ipv4Addr::new(169, 254, 7, 7)));
        assert!(!is_private(Ipv4Addr::new(172, 32, 0, 1)));
        assert!(!is_private(Ipv4Addr::LOCALHOST));
        assert!(!is_private(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[test]
    fn default_node_fits() {
        assert!(default_node(8) < 256);
        assert!(default_node(1) < 2);
    }
}
