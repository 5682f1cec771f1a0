//! Likes on reports. Routes live with the reports feature.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::LikeService;
