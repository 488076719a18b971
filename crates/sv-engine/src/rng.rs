//! Seeded random source
//!
//! Outcome randomness comes from a keyed-hash stream: each draw is
//! HMAC-SHA256(key = seed, msg = 64-bit draw counter), reduced to a float in
//! `[0,1)`. The construction is fixed by contract: without the seed the
//! stream is computationally unpredictable, and with it every draw is
//! replayable bit-for-bit, which is what the audit trail depends on. A
//! general-purpose PRNG must not be substituted here.
//!
//! The seed itself is the only non-deterministic input to a spin. Fresh
//! seeds are drawn from the OS-backed secure generator, used once, and
//! persisted verbatim next to the spin record.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Seed length in bytes (256 bits).
pub const SEED_LEN: usize = 32;

/// Opaque high-entropy spin seed.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed([u8; SEED_LEN]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedParseError {
    #[error("seed is not valid hex: {0}")]
    InvalidHex(String),
    #[error("seed must be {SEED_LEN} bytes, got {0}")]
    InvalidLength(usize),
}

impl Seed {
    /// Draw a fresh seed from the OS-backed secure generator.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SEED_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Hex rendering, the persistence format.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

impl FromStr for Seed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| SeedParseError::InvalidHex(e.to_string()))?;
        let bytes: [u8; SEED_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| SeedParseError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Seed {
    type Error = SeedParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_hex()
    }
}

/// Deterministic draw stream keyed by a [`Seed`].
pub struct SeededRng {
    seed: Seed,
    counter: u64,
}

impl SeededRng {
    pub fn new(seed: &Seed) -> Self {
        Self {
            seed: *seed,
            counter: 0,
        }
    }

    /// Next uniform draw in `[0,1)`.
    ///
    /// Takes the first 8 digest bytes and keeps the top 53 bits so the
    /// result is an exactly representable f64. The counter is 64-bit; a
    /// spin draws rows x columns values, so wraparound is unreachable.
    pub fn next_f64(&mut self) -> f64 {
        let digest = self.digest_for(self.counter);
        self.counter += 1;

        let raw = u64::from_be_bytes([
            digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
        ]);
        (raw >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draws consumed so far.
    pub fn draws(&self) -> u64 {
        self.counter
    }

    fn digest_for(&self, counter: u64) -> [u8; 32] {
        // HMAC-SHA256 accepts any key length, so this cannot fail.
        let mut mac = HmacSha256::new_from_slice(self.seed.as_bytes()).expect("HMAC key");
        mac.update(&counter.to_be_bytes());
        let result = mac.finalize().into_bytes();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        out
    }
}
