//! Flow 5-tuple and its fixed 13-byte wire layout.

use core::net::Ipv4Addr;

/// Serialized width of a [`FlowKey`] in bytes.
pub const FLOW_KEY_LEN: usize = 13;

/// A network flow identified by its 5-tuple.
///
/// Both hash families consume the key through [`FlowKey::to_bytes`], never
/// through the in-memory layout of this struct, so digests are identical on
/// little- and big-endian hosts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlowKey {
    pub src_addr: u32,
    pub dst_addr: u32,
    pub src_port: u16,
    pub dst_port: u16,
    pub protocol: u8,
}

impl FlowKey {
    #[inline]
    pub const fn new(
        src_addr: u32,
        dst_addr: u32,
        src_port: u16,
        dst_port: u16,
        protocol: u8,
    ) -> Self {
        FlowKey {
            src_addr,
            dst_addr,
            src_port,
            dst_port,
            protocol,
        }
    }

    /// Build a key from IPv4 addresses. Each address is taken by its numeric
    /// value, so `192.168.1.1` becomes `0xC0A80101`.
    ///
    /// ```rust
    /// use core::net::Ipv4Addr;
    /// use flowhash::FlowKey;
    ///
    /// let (src, dst) = (Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(8, 8, 8, 8));
    /// let key = FlowKey::from_ipv4(src, dst, 12345, 80, 6);
    /// assert_eq!(key.src_addr, 0xC0A80101);
    /// assert_eq!(key.dst_addr, 0x08080808);
    /// ```
    #[inline]
    pub fn from_ipv4(
        src: Ipv4Addr,
        dst: Ipv4Addr,
        src_port: u16,
        dst_port: u16,
        protocol: u8,
    ) -> Self {
        FlowKey::new(u32::from(src), u32::from(dst), src_port, dst_port, protocol)
    }

    /// Pack the key as `src_addr | dst_addr | src_port | dst_port | protocol`,
    /// each field little-endian, no padding.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; FLOW_KEY_LEN] {
        let s = self.src_addr.to_le_bytes();
        let d = self.dst_addr.to_le_bytes();
        let sp = self.src_port.to_le_bytes();
        let dp = self.dst_port.to_le_bytes();
        [
            s[0], s[1], s[2], s[3],
            d[0], d[1], d[2], d[3],
            sp[0], sp[1],
            dp[0], dp[1],
            self.protocol,
        ]
    }

    /// Inverse of [`FlowKey::to_bytes`].
    #[inline]
    pub const fn from_bytes(b: &[u8; FLOW_KEY_LEN]) -> Self {
        FlowKey {
            src_addr: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            dst_addr: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            src_port: u16::from_le_bytes([b[8], b[9]]),
            dst_port: u16::from_le_bytes([b[10], b[11]]),
            protocol: b[12],
        }
    }
}

impl From<[u8; FLOW_KEY_LEN]> for FlowKey {
    #[inline]
    fn from(bytes: [u8; FLOW_KEY_LEN]) -> Self {
        FlowKey::from_bytes(&bytes)
    }
}
