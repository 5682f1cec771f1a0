mod following;

pub use following::{Following, FollowingDetail};
