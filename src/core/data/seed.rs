use std::fmt;

/// An opaque, caller-defined identifier for one generative run.
///
/// The view only ever displays seeds and hands their text back on selection,
/// so the text form is the seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// FNV-1a over the seed text, for callers that need a number to derive
    /// a run from.
    #[must_use]
    pub fn hash64(&self) -> u64 {
        self.0.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
