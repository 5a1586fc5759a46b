//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Secure random index source

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::PassGenError;

/// Source of uniformly distributed indices in `[0, n)`.
pub trait IndexSource {
    fn next_index(&mut self, n: usize) -> Result<usize, PassGenError>;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn next_index(&mut self, n: usize) -> Result<usize, PassGenError> {
        (**self).next_index(n)
    }
}

/// Rejection sampler over raw bytes from a cryptographically secure RNG.
///
/// Each attempt reads 8 bytes. Draws that fall into the last partial block of
/// `2^64 mod n` values are discarded, so every index is equally likely.
pub struct RngIndexSource<R> {
    rng: R,
}

impl RngIndexSource<OsRng> {
    /// 使用操作系统提供的安全随机源
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl RngIndexSource<ChaCha20Rng> {
    /// Reproducible source for tests. Never use for real passwords.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }
}

impl<R: RngCore + CryptoRng> RngIndexSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn next_u64(&mut self) -> Result<u64, PassGenError> {
        let mut buf = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(|e| PassGenError::EntropySource(e.to_string()))?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl<R: RngCore + CryptoRng> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self, n: usize) -> Result<usize, PassGenError> {
        if n == 0 {
            return Err(PassGenError::configuration("Index bound must be positive"));
        }
        let bound = n as u64;
        // 2^64 mod bound
        let tail = (u64::MAX % bound + 1) % bound;
        loop {
            let value = self.next_u64()?;
            if tail == 0 || value <= u64::MAX - tail {
                return Ok((value % bound) as usize);
            }
        }
    }
}
