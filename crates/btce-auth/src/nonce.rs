//! Nonce sources for private requests
//!
//! The exchange rejects any nonce that is not greater than the last one it
//! accepted for the same key. A source hands out each value exactly once and
//! never goes backwards; sharing one source between clones of a client keeps
//! concurrent calls from colliding.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Supplier of strictly increasing nonces
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// Advance the counter by one and return the new value
    fn next_nonce(&self) -> u64;

    /// The most recently issued value (or the seed if none was issued)
    fn last_nonce(&self) -> u64;
}

/// Atomic counter seeded once and incremented by exactly one per request
///
/// Seeding from the wall clock (seconds) carries forward progress across
/// restarts, provided the clock does not step backwards and the previous run
/// issued fewer than one request per second on average.
#[derive(Debug)]
pub struct CounterNonce {
    counter: AtomicU64,
}

impl CounterNonce {
    /// Start counting after `seed`; the first issued nonce is `seed + 1`
    ///
    /// The counter wraps to 0 after `u64::MAX`, at which point nonces stop
    /// increasing. Seeds near the top of the range are not usable.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    /// Seed from the current Unix time in seconds
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        debug!(seed, "Seeded nonce counter from clock");
        Self::starting_at(seed)
    }
}

impl Default for CounterNonce {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl NonceSource for CounterNonce {
    fn next_nonce(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    fn last_nonce(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_first_nonce_follows_seed() {
        let nonces = CounterNonce::starting_at(100);
        assert_eq!(nonces.last_nonce(), 100);
        assert_eq!(nonces.next_nonce(), 101);
        assert_eq!(nonces.next_nonce(), 102);
        assert_eq!(nonces.last_nonce(), 102);
    }

    #[test]
    fn test_counter_wraps_at_max_without_panicking() {
        let nonces = CounterNonce::starting_at(u64::MAX - 1);
        assert_eq!(nonces.next_nonce(), u64::MAX);
        assert_eq!(nonces.next_nonce(), 0);
        assert_eq!(nonces.last_nonce(), 0);
    }

    #[test]
    fn test_clock_seed_is_recent() {
        // 2014-01-01T00:00:00Z
        assert!(CounterNonce::from_clock().last_nonce() > 1_388_534_400);
    }

    #[test]
    fn test_concurrent_nonces_are_unique() {
        let nonces = Arc::new(CounterNonce::starting_at(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let nonces = Arc::clone(&nonces);
                std::thread::spawn(move || (0..500).map(|_| nonces.next_nonce()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let issued = handle.join().unwrap();
            // Each thread observes its own values in increasing order
            assert!(issued.windows(2).all(|w| w[0] < w[1]));
            for nonce in issued {
                assert!(seen.insert(nonce), "duplicate nonce {nonce}");
            }
        }

        assert_eq!(seen.len(), 4000);
        assert_eq!(nonces.last_nonce(), 4000);
    }
}
