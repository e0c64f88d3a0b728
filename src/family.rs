use core::fmt;
use core::str::FromStr;

/// Which hash function a [`FlowHasher`](crate::FlowHasher) runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashFamily {
    /// MurmurHash3 x86_32 over 4-byte blocks.
    #[default]
    Murmur3,
    /// Jenkins lookup3 over a three-word state.
    Lookup3,
}

impl HashFamily {
    pub const ALL: [HashFamily; 2] = [HashFamily::Murmur3, HashFamily::Lookup3];

    pub const fn name(self) -> &'static str {
        match self {
            HashFamily::Murmur3 => "murmur3",
            HashFamily::Lookup3 => "lookup3",
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFamily {
    type Err = ParseHashFamilyError;

    /// Accepts `murmur3`/`murmur` and `lookup3`/`jenkins`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("murmur3") || s.eq_ignore_ascii_case("murmur") {
            Ok(HashFamily::Murmur3)
        } else if s.eq_ignore_ascii_case("lookup3") || s.eq_ignore_ascii_case("jenkins") {
            Ok(HashFamily::Lookup3)
        } else {
            Err(ParseHashFamilyError)
        }
    }
}

/// Returned when a string names no known [`HashFamily`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseHashFamilyError;

impl fmt::Display for ParseHashFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown hash family, expected one of: murmur3, murmur, lookup3, jenkins")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseHashFamilyError {}
