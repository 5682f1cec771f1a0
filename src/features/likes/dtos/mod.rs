pub mod like_dto;

pub use like_dto::LikeView;
