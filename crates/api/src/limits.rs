//! Fixed-window request limiting per client key.
//!
//! Each key gets `max_requests` requests per window. The window starts with
//! the key's first request and resets once it has elapsed; there is no
//! sliding or token refill.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use dogule_core::codes;
use dogule_core::error::CoreError;

use crate::config::RateLimitConfig;

/// Entries are swept once the table grows past this many keys.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Shared limiter for the rate-limited route groups.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: Duration::from_secs(config.window_secs),
            max_requests: config.max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request for `key`. Fails with `ERR_RATE_LIMITED` once the
    /// key has used up its window.
    pub fn check(&self, key: &str) -> Result<(), CoreError> {
        self.check_at(key, Instant::now())
    }

    pub fn check_at(&self, key: &str, now: Instant) -> Result<(), CoreError> {
        // Counters stay valid if another holder panicked.
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if windows.len() > SWEEP_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            return Err(CoreError::RateLimited(codes::RATE_LIMITED));
        }
        entry.count += 1;
        Ok(())
    }
}
