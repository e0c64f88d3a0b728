//! # flowhash
//!
//! Seeded 32-bit hashes over network flow 5-tuples, for flow tables,
//! load balancing and multi-way flow distribution.
//!
//! ## Features
//!
//! - **Two families**: MurmurHash3 x86_32 and Jenkins lookup3
//! - **Portable**: keys are packed little-endian byte by byte, never read
//!   from native memory layout, so digests match on every host
//! - **Stateless**: every call is a pure function of (5-tuple, seed)
//! - **`no_std` compatible**: no allocation, no dependencies
//!
//! Neither family is cryptographic. Do not rely on them against an adversary
//! who can choose flows.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowhash::{lookup3_flow, murmur3_flow};
//!
//! // 192.168.1.1:12345 -> 8.8.8.8:80, TCP
//! let a = murmur3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0x12345678);
//! let b = lookup3_flow(0xC0A80101, 0x08080808, 12345, 80, 6, 0x12345678);
//! assert_eq!(a, 0x549ded1b);
//! assert_eq!(b, 0xb196650b);
//! ```
//!
//! ## Selecting a family at runtime
//!
//! ```rust
//! use flowhash::{FlowHasher, FlowKey, HashFamily};
//!
//! let family: HashFamily = "jenkins".parse().unwrap();
//! let hasher = FlowHasher::new(family, 0x12345678);
//! let key = FlowKey::new(0xC0A80101, 0x08080808, 12345, 80, 6);
//! assert_eq!(hasher.hash(&key), 0xb196650b);
//!
//! // A second seed gives an independent hash over the same keys.
//! let other = hasher.with_seed(0x9e3779b9);
//! assert_ne!(hasher.hash(&key), other.hash(&key));
//! ```
//!
//! ## Key layout
//!
//! | bytes | field              |
//! |-------|--------------------|
//! | 0..4  | source address     |
//! | 4..8  | destination address|
//! | 8..10 | source port        |
//! | 10..12| destination port   |
//! | 12    | protocol           |
//!
//! Every multi-byte field is little-endian.
//!
//! ## License
//!
//! MIT License

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod family;
mod key;
mod lookup3;
mod murmur3;

pub use family::{HashFamily, ParseHashFamilyError};
pub use key::{FlowKey, FLOW_KEY_LEN};
pub use lookup3::{lookup3, lookup3_flow};
pub use murmur3::{murmur3_32, murmur3_flow};

/// A configured flow hash: one family plus one seed.
///
/// `FlowHasher` is `Copy` and holds no mutable state, so it can be shared
/// freely between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlowHasher {
    family: HashFamily,
    seed: u32,
}

impl FlowHasher {
    #[inline]
    pub const fn new(family: HashFamily, seed: u32) -> Self {
        FlowHasher { family, seed }
    }

    /// Same family, different seed.
    #[inline]
    pub const fn with_seed(self, seed: u32) -> Self {
        FlowHasher { seed, ..self }
    }

    #[inline]
    pub const fn family(&self) -> HashFamily {
        self.family
    }

    #[inline]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Hash a flow key with the configured family and seed.
    #[inline]
    pub fn hash(&self, key: &FlowKey) -> u32 {
        match self.family {
            HashFamily::Murmur3 => murmur3::murmur3_key(key, self.seed),
            HashFamily::Lookup3 => lookup3::lookup3_key(key, self.seed),
        }
    }

    /// Hash a 5-tuple given field by field.
    #[inline]
    pub fn hash_tuple(
        &self,
        src_addr: u32,
        dst_addr: u32,
        src_port: u16,
        dst_port: u16,
        protocol: u8,
    ) -> u32 {
        self.hash(&FlowKey::new(src_addr, dst_addr, src_port, dst_port, protocol))
    }
}
