//! Print flow hashes for the sample 5-tuple 192.168.1.1:12345 -> 8.8.8.8:80 (TCP).
//!
//! Usage: flowhash [FAMILY] [SEED]
//!
//! FAMILY is murmur3 or lookup3 (both when omitted). SEED is decimal or
//! 0x-prefixed hex and defaults to 0x12345678.

use std::net::Ipv4Addr;
use std::process::ExitCode;

use flowhash::{FlowHasher, FlowKey, HashFamily};

const DEFAULT_SEED: u32 = 0x12345678;

fn parse_seed(s: &str) -> Option<u32> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn usage() -> ExitCode {
    eprintln!("usage: flowhash [murmur3|lookup3] [seed]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        return usage();
    }

    let families = match args.first() {
        Some(name) => match name.parse::<HashFamily>() {
            Ok(family) => vec![family],
            Err(e) => {
                eprintln!("error: {e}");
                return usage();
            }
        },
        None => HashFamily::ALL.to_vec(),
    };

    let seed = match args.get(1) {
        Some(s) => match parse_seed(s) {
            Some(seed) => seed,
            None => {
                eprintln!("error: invalid seed {s:?}");
                return usage();
            }
        },
        None => DEFAULT_SEED,
    };

    let (src, dst) = (Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(8, 8, 8, 8));
    let key = FlowKey::from_ipv4(src, dst, 12345, 80, 6);
    for family in families {
        let hash = FlowHasher::new(family, seed).hash(&key);
        println!("{family} (5-tuple) = 0x{hash:08X}");
    }
    ExitCode::SUCCESS
}
