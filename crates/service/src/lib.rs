//! Business logic layer for planforge
//!
//! Turns stored plan, section and activity records into the derived
//! dashboard views: per-user statistics, a per-plan list with computed
//! progress, and the recent-activity feed.

mod dashboard_service;
mod error;

pub use dashboard_service::DashboardService;
pub use error::ServiceError;
