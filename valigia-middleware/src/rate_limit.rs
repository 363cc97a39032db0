use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use valigia_core::ValigiaError;
use valigia_types::RateLimitConfig;

/// Per-caller admission check.
///
/// Implementations own their window state; the engine calls `check` once
/// per cache-missed search, before any provider fan-out.
pub trait RateLimiter: Send + Sync {
    /// Admit or reject one request from `caller`.
    ///
    /// # Errors
    /// Returns `ValigiaError::RateLimited` with a retry-after hint equal
    /// to the remaining window time when the caller's quota is exhausted.
    fn check(&self, caller: &str) -> Result<(), ValigiaError>;
}

struct Window {
    started: Instant,
    count: u64,
}

/// Fixed-window counter keyed by caller identity.
///
/// Window state resets when a request arrives after the window's end
/// rather than via a background timer, so the limiter stays correct while
/// idle. Known limitation, by construction of the algorithm: a caller can
/// burst up to twice the quota across a window boundary.
pub struct FixedWindowLimiter {
    cfg: RateLimitConfig,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter {
    /// Create a limiter with the given quota configuration.
    #[must_use]
    pub fn new(cfg: RateLimitConfig) -> Self {
        Self {
            cfg,
            windows: Mutex::new(HashMap::new()),
        }
    }
}

impl RateLimiter for FixedWindowLimiter {
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    fn check(&self, caller: &str) -> Result<(), ValigiaError> {
        let mut windows = self.windows.lock().expect("mutex poisoned");
        let now = Instant::now();

        let w = windows.entry(caller.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        // Reset when the window elapsed, keeping starts aligned to
        // regular boundaries even with gaps in usage.
        let elapsed = now.duration_since(w.started);
        if elapsed >= self.cfg.window {
            w.count = 0;
            let windows_passed = elapsed.as_nanos() / self.cfg.window.as_nanos().max(1);
            let boundary_offset = Duration::from_nanos(
                (windows_passed * self.cfg.window.as_nanos())
                    .try_into()
                    .unwrap_or(u64::MAX),
            );
            w.started += boundary_offset;
        }

        if w.count < self.cfg.max_requests {
            w.count += 1;
            return Ok(());
        }

        let elapsed = now.duration_since(w.started);
        let retry_after = self.cfg.window.saturating_sub(elapsed);
        Err(ValigiaError::rate_limited(retry_after))
    }
}
