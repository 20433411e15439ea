//! Secret code generation
//!
//! Defines the `SecretGenerator` trait and concrete implementations.

use super::code::Code;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A source of secret codes
pub trait SecretGenerator {
    /// Produce the next secret
    fn generate(&mut self) -> Code;
}

/// Uniformly random secrets, four independent digits 0-9
pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Create a generator seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible generator from a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator for RandomSecret {
    fn generate(&mut self) -> Code {
        Code::random(&mut self.rng)
    }
}

/// Always yields the same secret
///
/// Useful for demos and tests where the answer must be known in advance.
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub Code);

impl SecretGenerator for FixedSecret {
    fn generate(&mut self) -> Code {
        self.0
    }
}
