//! Form drafts for new catalog entries.
//!
//! A draft holds what a user typed. Validation is presence-only: `title` is
//! required for every kind and `year` for timeline entries. Nothing checks
//! that a URL is a URL or that a rating is within 0-5.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::kinds::EntityKind;

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::MissingField(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastDraft {
    pub title: String,
    pub description: Option<String>,
    pub embed_url: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub episodes: Option<i64>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDraft {
    pub year: String,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub key_figures: Vec<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl TimelineDraft {
    /// Key figures with blank entries removed, order kept.
    #[must_use]
    pub fn key_figures(&self) -> Vec<String> {
        self.key_figures
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantDraft {
    pub title: String,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub deadline: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub eligibility: Option<String>,
    pub website_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A new entry of any kind, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Draft {
    Event(EventDraft),
    Podcast(PodcastDraft),
    Timeline(TimelineDraft),
    Grant(GrantDraft),
}

impl Draft {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Event(_) => EntityKind::Event,
            Self::Podcast(_) => EntityKind::Podcast,
            Self::Timeline(_) => EntityKind::Timeline,
            Self::Grant(_) => EntityKind::Grant,
        }
    }

    /// Check that required fields are present.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` naming the first absent field.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Event(d) => require("title", &d.title),
            Self::Podcast(d) => require("title", &d.title),
            Self::Timeline(d) => {
                require("year", &d.year)?;
                require("title", &d.title)
            }
            Self::Grant(d) => require("title", &d.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn title_is_required_for_every_kind() {
        let drafts = [
            Draft::Event(EventDraft::default()),
            Draft::Podcast(PodcastDraft::default()),
            Draft::Grant(GrantDraft::default()),
        ];
        for draft in drafts {
            assert_eq!(draft.validate(), Err(CoreError::MissingField("title")));
        }
    }

    #[test]
    fn timeline_requires_year_first() {
        let draft = Draft::Timeline(TimelineDraft {
            title: "Baroque Era".into(),
            ..Default::default()
        });
        assert_eq!(draft.validate(), Err(CoreError::MissingField("year")));
    }

    #[test]
    fn whitespace_title_is_missing() {
        let draft = Draft::Grant(GrantDraft {
            title: "   ".into(),
            ..Default::default()
        });
        assert_eq!(draft.validate(), Err(CoreError::MissingField("title")));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let draft = Draft::Timeline(TimelineDraft {
            year: "1400-1600".into(),
            title: "Renaissance Period".into(),
            ..Default::default()
        });
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.kind(), EntityKind::Timeline);
    }

    #[test]
    fn blank_key_figures_are_dropped() {
        let draft = TimelineDraft {
            key_figures: vec![
                "Caravaggio".into(),
                String::new(),
                "  ".into(),
                " Bernini ".into(),
            ],
            ..Default::default()
        };
        assert_eq!(draft.key_figures(), vec!["Caravaggio", "Bernini"]);
    }

    #[test]
    fn draft_deserializes_from_tagged_json() {
        let json = r#"{"kind":"grant","title":"Heritage Fund","deadline":"2024-10-01","featured":true}"#;
        let draft: Draft = serde_json::from_str(json).unwrap();
        let Draft::Grant(grant) = draft else {
            panic!("expected grant draft");
        };
        assert_eq!(grant.title, "Heritage Fund");
        assert!(grant.featured);
        assert_eq!(grant.organization, None);
    }
}
