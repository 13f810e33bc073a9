mod events;
mod favorites;
mod filters;
mod grants;
mod podcasts;
mod timeline;

pub use events::{EventCommands, EventCreateArgs};
pub use favorites::FavoriteCommands;
pub use filters::FilterArgs;
pub use grants::{GrantCommands, GrantCreateArgs};
pub use podcasts::{PodcastCommands, PodcastCreateArgs};
pub use timeline::{TimelineCommands, TimelineCreateArgs};
