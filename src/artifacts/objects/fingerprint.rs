//! Content fingerprint
//!
//! A fingerprint is a weak, non-cryptographic checksum of a file's path and
//! content, used only to notice that a tracked file changed since the last
//! commit. It is a pure function of its inputs:
//!
//! ```text
//! ((sum of path bytes) mod 1000 + sum of content bytes) mod 2_000_000_000
//! ```
//!
//! Bytes are summed as unsigned values.

/// Path bytes are folded into this range before content is added
const PATH_MODULUS: u64 = 1000;

/// Upper bound (exclusive) of every fingerprint value
const FINGERPRINT_MODULUS: u64 = 2_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(i32);

impl Fingerprint {
    /// Sentinel recorded for deleted entries and returned for unreachable files
    pub const ABSENT: Fingerprint = Fingerprint(-2);

    pub fn compute(path: &str, content: &[u8]) -> Self {
        let path_sum = path.bytes().map(u64::from).sum::<u64>() % PATH_MODULUS;
        let content_sum = content
            .iter()
            .fold(path_sum, |acc, byte| (acc + u64::from(*byte)) % FINGERPRINT_MODULUS);

        // always below 2e9, so it fits an i32
        Fingerprint(content_sum as i32)
    }

    pub fn from_raw(value: i32) -> Self {
        Fingerprint(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // honour width/alignment flags so callers can right-align columns
        std::fmt::Display::fmt(&self.0, f)
    }
}
