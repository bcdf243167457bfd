//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedFeedClient;
use crate::planner::PlanConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached transit feed client
    pub feeds: Arc<CachedFeedClient>,

    /// The transfer plan being recommended against
    pub plan: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feeds: CachedFeedClient, plan: PlanConfig) -> Self {
        Self {
            feeds: Arc::new(feeds),
            plan: Arc::new(plan),
        }
    }
}
