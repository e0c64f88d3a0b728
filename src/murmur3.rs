//! MurmurHash3 x86_32 (Variant A).
//!
//! Blocks are always decoded little-endian, so results match the reference
//! implementation on a little-endian machine regardless of the host.

use crate::key::{FlowKey, FLOW_KEY_LEN};

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// Multiply-rotate-multiply applied to every block and to the tail word.
#[inline(always)]
fn scramble(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final avalanche: every input bit affects every output bit.
#[inline(always)]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Compute MurmurHash3 x86_32 of arbitrary data.
///
/// # Example
///
/// ```rust
/// use flowhash::murmur3_32;
///
/// assert_eq!(murmur3_32(b"", 0), 0);
/// assert_eq!(murmur3_32(b"Hello, world!", 1234), 0xfaf6cdb3);
/// ```
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for b in &mut blocks {
        h ^= scramble(u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe6546b64);
    }

    // A single leftover byte still goes through the scramble.
    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .enumerate()
            .fold(0u32, |k, (i, &byte)| k | ((byte as u32) << (8 * i)));
        h ^= scramble(k);
    }

    // Lengths past u32::MAX wrap, as in the reference.
    fmix32(h ^ data.len() as u32)
}

/// MurmurHash3 of a flow 5-tuple.
///
/// The tuple is packed with [`FlowKey::to_bytes`] (13 bytes: three blocks and
/// a one-byte tail) before hashing.
///
/// # Example
///
/// ```rust
/// use flowhash::murmur3_flow;
///
/// let hash = murmur3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0x12345678);
/// assert_eq!(hash, 0x549ded1b);
/// ```
#[inline]
pub fn murmur3_flow(
    src_addr: u32,
    dst_addr: u32,
    src_port: u16,
    dst_port: u16,
    protocol: u8,
    seed: u32,
) -> u32 {
    murmur3_key(&FlowKey::new(src_addr, dst_addr, src_port, dst_port, protocol), seed)
}

#[inline]
pub(crate) fn murmur3_key(key: &FlowKey, seed: u32) -> u32 {
    let bytes: [u8; FLOW_KEY_LEN] = key.to_bytes();
    murmur3_32(&bytes, seed)
}
