pub mod dispatch;
pub mod events;
pub mod favorites;
pub mod grants;
pub mod podcasts;
pub mod shared;
pub mod timeline;
