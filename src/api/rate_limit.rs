//! Sliding-window call throttle

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::{Result, TagnetError};

const WINDOW: Duration = Duration::from_secs(1);

/// Allows at most `limit` calls in any trailing one-second window.
///
/// The configured rate is a float; the window count is `ceil(rate)` and at
/// least 1, so `0.5` allows one call per second and `2.5` allows three.
#[derive(Debug)]
pub struct RateLimiter {
	limit: usize,
	calls: VecDeque<Instant>,
}

impl RateLimiter {
	pub fn new(calls_per_second: f64) -> Result<Self> {
		if !calls_per_second.is_finite() || calls_per_second <= 0.0 {
			return Err(TagnetError::Config(format!(
				"calls per second must be a positive number, got {}",
				calls_per_second
			)));
		}

		Ok(Self {
			limit: (calls_per_second.ceil() as usize).max(1),
			calls: VecDeque::new(),
		})
	}

	/// Calls allowed per window
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Block until another call fits in the window, then record it.
	pub fn wait_if_necessary(&mut self) {
		self.prune(Instant::now());

		while self.calls.len() >= self.limit {
			let Some(&oldest) = self.calls.front() else { break };
			let ready = oldest + WINDOW;
			let now = Instant::now();
			if ready > now {
				thread::sleep(ready - now);
			}
			self.prune(Instant::now());
		}

		self.calls.push_back(Instant::now());
	}

	fn prune(&mut self, now: Instant) {
		while let Some(&oldest) = self.calls.front() {
			if now.duration_since(oldest) >= WINDOW {
				self.calls.pop_front();
			} else {
				break;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn window_count_rounds_up() {
		assert_eq!(RateLimiter::new(2.0).unwrap().limit(), 2);
		assert_eq!(RateLimiter::new(2.5).unwrap().limit(), 3);
		assert_eq!(RateLimiter::new(0.5).unwrap().limit(), 1);
	}

	#[test]
	fn rejects_invalid_rates() {
		assert!(RateLimiter::new(0.0).is_err());
		assert!(RateLimiter::new(-1.0).is_err());
		assert!(RateLimiter::new(f64::INFINITY).is_err());
	}

	#[test]
	fn calls_within_limit_do_not_block() {
		let mut limiter = RateLimiter::new(10.0).unwrap();
		let start = Instant::now();
		for _ in 0..10 {
			limiter.wait_if_necessary();
		}
		assert!(start.elapsed() < Duration::from_millis(500));
	}

	#[test]
	fn overflow_waits_for_window() {
		let n = 3;
		let mut limiter = RateLimiter::new(n as f64).unwrap();
		let start = Instant::now();
		for _ in 0..(2 * n + 1) {
			limiter.wait_if_necessary();
		}
		assert!(start.elapsed() >= Duration::from_secs(1));
	}

	#[test]
	fn no_window_holds_more_than_limit() {
		let mut limiter = RateLimiter::new(2.0).unwrap();
		let mut stamps = Vec::new();
		for _ in 0..5 {
			limiter.wait_if_necessary();
			stamps.push(*limiter.calls.back().unwrap());
		}
		for (i, stamp) in stamps.iter().enumerate().skip(2) {
			assert!(stamp.duration_since(stamps[i - 2]) >= WINDOW);
		}
	}
}
