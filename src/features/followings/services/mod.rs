mod following_service;

pub use following_service::FollowingService;
