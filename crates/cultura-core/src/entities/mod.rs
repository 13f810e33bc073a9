//! Entity structs for all Cultura catalog objects.
//!
//! Each entity maps to one table in the libSQL store. Identity (`id`) and
//! `created_at` are assigned by the store on insert. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod event;
mod favorite;
mod grant;
mod podcast;
mod timeline;

pub use event::CulturalEvent;
pub use favorite::Favorite;
pub use grant::Grant;
pub use podcast::Podcast;
pub use timeline::TimelineEvent;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kinds::EntityKind;

/// A fetched row of any catalog kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Event(CulturalEvent),
    Podcast(Podcast),
    Timeline(TimelineEvent),
    Grant(Grant),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Event(_) => EntityKind::Event,
            Self::Podcast(_) => EntityKind::Podcast,
            Self::Timeline(_) => EntityKind::Timeline,
            Self::Grant(_) => EntityKind::Grant,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Event(e) => &e.id,
            Self::Podcast(p) => &p.id,
            Self::Timeline(t) => &t.id,
            Self::Grant(g) => &g.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Event(e) => &e.title,
            Self::Podcast(p) => &p.title,
            Self::Timeline(t) => &t.title,
            Self::Grant(g) => &g.title,
        }
    }
}
