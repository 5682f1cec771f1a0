pub mod following_dto;

pub use following_dto::FollowingView;
