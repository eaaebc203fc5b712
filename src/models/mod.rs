pub mod analytics;
pub mod chat;
pub mod emissions;
pub mod error;
pub mod metrics;
pub mod reporting;
pub mod review;
pub mod section;
pub mod targets;
