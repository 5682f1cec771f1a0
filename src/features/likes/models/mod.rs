mod like;

pub use like::{Like, LikeDetail};
