//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use mergington_registry::ActivityRegistry;

/// Application state shared across handlers.
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self {
            registry,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Number of registry requests served.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ActivityRegistry::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default_uses_school_catalog() {
        let state = AppState::default();
        assert!(state.registry.contains("Chess Club"));
    }

    #[test]
    fn test_app_state_shares_registry() {
        let registry = Arc::new(ActivityRegistry::default());
        let state = AppState::new(registry.clone());
        registry.signup("Math Club", "new@mergington.edu").unwrap();

        let math = state.registry.get("Math Club").unwrap();
        assert!(math.has_participant("new@mergington.edu"));
    }

    #[test]
    fn test_request_count() {
        let state = AppState::default();
        assert_eq!(state.request_count(), 0);

        state.increment_requests();
        state.increment_requests();
        assert_eq!(state.request_count(), 2);
    }

    #[test]
    fn test_uptime() {
        let state = AppState::default();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(state.uptime().as_millis() >= 10);
    }
}
