//! Repository modules for every catalog kind.
//!
//! Each module adds methods to `CatalogService` via `impl CatalogService`
//! blocks. `catalog` holds the kind-generic fetch and submit paths the typed
//! modules share.

pub mod catalog;
pub mod events;
pub mod favorites;
pub mod grants;
pub mod podcasts;
pub mod timeline;
