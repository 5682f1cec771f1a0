pub mod auth;
pub mod employees;
pub mod followings;
pub mod likes;
pub mod reports;
