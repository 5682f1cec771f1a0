mod like_service;

pub use like_service::LikeService;
