//! Random secret generation.

use rand::rngs::{OsRng, StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Characters drawn for generated passwords: upper, lower, digits, 8 symbols.
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub const DEFAULT_PASSWORD_LENGTH: usize = 24;
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Password generator over a pluggable random source.
///
/// Draws are independent and uniform over [`PASSWORD_ALPHABET`]. Generated
/// passwords are not checked against the composition rules.
pub struct SecretGenerator<R: RngCore = ThreadRng> {
    rng: R,
}

impl SecretGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for SecretGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator<StdRng> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: RngCore> SecretGenerator<R> {
    pub fn generate_password(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| {
                let idx = self.rng.gen_range(0..PASSWORD_ALPHABET.len());
                PASSWORD_ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Lowercase hex rendering of `byte_length` bytes from the OS CSPRNG.
pub fn generate_hex_token(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
