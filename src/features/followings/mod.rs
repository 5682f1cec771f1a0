//! Follow relations between employees, backing the timeline.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::FollowingService;
