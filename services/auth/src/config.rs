//! Authentication configuration

use serde::Deserialize;

/// Configuration for the session store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Delay awaited by login/register before completing (default: 800)
    pub simulated_latency_ms: u64,
    /// Random bytes per session token, floored at 16 (default: 32)
    pub token_bytes: usize,
    /// Argon2 memory cost in KiB (default: 19456)
    pub hash_memory_kib: u32,
    /// Argon2 iteration count (default: 2)
    pub hash_iterations: u32,
    /// Argon2 lanes (default: 1)
    pub hash_parallelism: u32,
    /// Minimum password length accepted by the registration form (default: 6)
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 800,
            token_bytes: 32,
            hash_memory_kib: 19 * 1024,
            hash_iterations: 2,
            hash_parallelism: 1,
            min_password_length: 6,
        }
    }
}

impl AuthConfig {
    /// Zero latency and the cheapest Argon2 parameters, for tests and tooling
    pub fn fast() -> Self {
        Self {
            simulated_latency_ms: 0,
            hash_memory_kib: 1024,
            hash_iterations: 1,
            ..Self::default()
        }
    }
}
