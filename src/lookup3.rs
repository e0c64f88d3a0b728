//! Bob Jenkins' lookup3 (Variant B).
//!
//! Three 32-bit words are mixed reversibly per 12-byte block and forced to
//! avalanche at the end. The digest is the third word.

use crate::key::{FlowKey, FLOW_KEY_LEN};

const INIT: u32 = 0xdeadbeef;

/// Reversibly mix three words. Run between blocks, never after the last one.
#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);

    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

/// Final avalanche of (a, b, c), returning c.
#[inline(always)]
fn final_mix(mut a: u32, mut b: u32, mut c: u32) -> u32 {
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c.wrapping_sub(b.rotate_left(24))
}

/// Read little-endian u32
#[inline(always)]
fn read32(p: &[u8]) -> u32 {
    u32::from_le_bytes([p[0], p[1], p[2], p[3]])
}

/// Compute lookup3 (`hashlittle`) of arbitrary data.
///
/// Bytes are decoded little-endian one at a time, so the result is the same
/// on every host.
///
/// # Example
///
/// ```rust
/// use flowhash::lookup3;
///
/// assert_eq!(lookup3(b"", 0), 0xdeadbeef);
/// assert_eq!(lookup3(b"Four score and seven years ago", 0), 0x17770551);
/// ```
pub fn lookup3(data: &[u8], seed: u32) -> u32 {
    let init = INIT.wrapping_add(data.len() as u32).wrapping_add(seed);
    let (mut a, mut b, mut c) = (init, init, init);

    let mut p = data;
    while p.len() > 12 {
        a = a.wrapping_add(read32(p));
        b = b.wrapping_add(read32(&p[4..]));
        c = c.wrapping_add(read32(&p[8..]));
        mix(&mut a, &mut b, &mut c);
        p = &p[12..];
    }

    if p.is_empty() {
        return c;
    }

    // Missing tail bytes add zero.
    let mut tail = [0u8; 12];
    tail[..p.len()].copy_from_slice(p);
    a = a.wrapping_add(read32(&tail));
    b = b.wrapping_add(read32(&tail[4..]));
    c = c.wrapping_add(read32(&tail[8..]));
    final_mix(a, b, c)
}

/// lookup3 of a flow 5-tuple.
///
/// The 13-byte key is one full block plus a one-byte remainder that lands in
/// `a`. With a single block there is nothing to `mix` between blocks, so the
/// state goes straight to finalization. This differs from [`lookup3`] over
/// the same bytes, which treats the 13th byte as a second block.
///
/// # Example
///
/// ```rust
/// use flowhash::lookup3_flow;
///
/// let hash = lookup3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0x12345678);
/// assert_eq!(hash, 0xb196650b);
/// ```
#[inline]
pub fn lookup3_flow(
    src_addr: u32,
    dst_addr: u32,
    src_port: u16,
    dst_port: u16,
    protocol: u8,
    seed: u32,
) -> u32 {
    lookup3_key(&FlowKey::new(src_addr, dst_addr, src_port, dst_port, protocol), seed)
}

pub(crate) fn lookup3_key(key: &FlowKey, seed: u32) -> u32 {
    let k = key.to_bytes();
    let init = INIT.wrapping_add(FLOW_KEY_LEN as u32).wrapping_add(seed);

    let a = init.wrapping_add(read32(&k)).wrapping_add(k[12] as u32);
    let b = init.wrapping_add(read32(&k[4..]));
    let c = init.wrapping_add(read32(&k[8..]));
    final_mix(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: FlowKey = FlowKey::new(0xC0A80101, 0x08080808, 12345, 80, 6);

    #[test]
    fn test_reference_vectors() {
        assert_eq!(lookup3(b"", 0), 0xdeadbeef);
        assert_eq!(lookup3(b"Four score and seven years ago", 0), 0x17770551);
        assert_eq!(lookup3(b"Four score and seven years ago", 1), 0xcd628161);
    }

    #[test]
    fn test_flow_known_answers() {
        assert_eq!(lookup3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0x12345678), 0xb196650b);
        assert_eq!(lookup3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0), 0x7979573e);
        assert_eq!(lookup3_flow(0, 0, 0, 0, 0, 0), 0x5f1d7d04);
    }

    #[test]
    fn test_flow_skips_block_mix() {
        let bytes = SAMPLE.to_bytes();
        assert_eq!(lookup3(&bytes, 0x12345678), 0xda69f72b);
        assert_ne!(lookup3_key(&SAMPLE, 0x12345678), 0xda69f72b);
    }

    #[test]
    fn test_tail_byte_is_hashed() {
        // Zero-padded to two full blocks.
        let mut padded = [0u8; 24];
        padded[..FLOW_KEY_LEN].copy_from_slice(&SAMPLE.to_bytes());
        assert_eq!(lookup3(&padded, 0x12345678), 0x0f5c5ab6);
        assert_ne!(lookup3_key(&SAMPLE, 0x12345678), 0x0f5c5ab6);

        let no_proto = FlowKey { protocol: 0, ..SAMPLE };
        assert_ne!(lookup3_key(&no_proto, 0x12345678), lookup3_key(&SAMPLE, 0x12345678));
    }

    #[test]
    fn test_mix_is_reversible() {
        // Undo each step of `mix` in reverse order.
        let (a0, b0, c0) = (0x01234567u32, 0x89abcdefu32, 0xdeadbeefu32);
        let (mut a, mut b, mut c) = (a0, b0, c0);
        mix(&mut a, &mut b, &mut c);
        assert_ne!((a, b, c), (a0, b0, c0));

        let steps = [(2, 0, 1, 4), (1, 2, 0, 19), (0, 1, 2, 16), (2, 0, 1, 8), (1, 2, 0, 6), (0, 1, 2, 4)];
        for (x, y, z, r) in steps {
            let mut s = [a, b, c];
            // step was: s[x] -= s[z]; s[x] ^= rot(s[z], r); s[z] += s[y]
            s[z] = s[z].wrapping_sub(s[y]);
            s[x] ^= s[z].rotate_left(r);
            s[x] = s[x].wrapping_add(s[z]);
            [a, b, c] = s;
        }
        assert_eq!((a, b, c), (a0, b0, c0));
    }
}
