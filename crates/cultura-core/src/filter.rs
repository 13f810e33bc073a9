//! Filter predicate engine for fetched catalog collections.
//!
//! Each active criterion narrows the collection (logical AND). Inactive
//! criteria, whether unset, blank, or an "All" sentinel from a picker, leave it
//! untouched. Filtering never reorders: the result is always a subsequence of
//! the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deadline::parse_date;
use crate::entities::{CulturalEvent, Grant, Podcast, Record, TimelineEvent};

/// Field accessors the engine matches against.
///
/// Kinds that lack a field return `None`, which never satisfies an active
/// criterion on that field.
pub trait Filterable {
    /// Fields searched by the free-text criterion.
    fn text_fields(&self) -> [Option<&str>; 2];

    fn category(&self) -> Option<&str>;

    /// Field compared for exact equality by the region criterion.
    fn region(&self) -> Option<&str>;

    /// Field searched (substring) by the city criterion.
    fn city_field(&self) -> Option<&str> {
        None
    }

    /// Calendar date compared by the date criterion.
    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Filter values. The `with_*` setters normalize raw input; values set
/// directly or deserialized are normalized again when matching, so a blank or
/// sentinel field never narrows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub text: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Picker labels meaning "no filter", compared case-insensitively.
const SENTINELS: [&str; 3] = ["all", "all locations", "all cities"];

fn active_str(raw: Option<&str>) -> Option<&str> {
    let value = raw?.trim();
    if value.is_empty() || SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        return None;
    }
    Some(value)
}

/// Normalize a raw picker or search-box value.
///
/// Blank input and the picker labels `All`, `All Locations` and `All Cities`
/// mean "no filter". Any other value, `All Ages` included, is kept.
#[must_use]
pub fn active_value(raw: Option<&str>) -> Option<String> {
    active_str(raw).map(str::to_string)
}

impl FilterCriteria {
    #[must_use]
    pub fn with_text(mut self, raw: Option<&str>) -> Self {
        self.text = active_value(raw).map(|t| t.to_lowercase());
        self
    }

    #[must_use]
    pub fn with_category(mut self, raw: Option<&str>) -> Self {
        self.category = active_value(raw);
        self
    }

    #[must_use]
    pub fn with_region(mut self, raw: Option<&str>) -> Self {
        self.region = active_value(raw);
        self
    }

    #[must_use]
    pub fn with_city(mut self, raw: Option<&str>) -> Self {
        self.city = active_value(raw);
        self
    }

    #[must_use]
    pub const fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// True when no criterion would narrow a collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.text, &self.category, &self.region, &self.city]
            .into_iter()
            .all(|field| active_str(field.as_deref()).is_none())
            && self.date.is_none()
    }

    /// Whether a single item satisfies every active criterion.
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if let Some(needle) = active_str(self.text.as_deref()) {
            let needle = needle.to_lowercase();
            let hit = item
                .text_fields()
                .iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(category) = active_str(self.category.as_deref())
            && item.category() != Some(category)
        {
            return false;
        }
        if let Some(region) = active_str(self.region.as_deref())
            && item.region() != Some(region)
        {
            return false;
        }
        if let Some(city) = active_str(self.city.as_deref())
            && !item.city_field().is_some_and(|loc| loc.contains(city))
        {
            return false;
        }
        if let Some(date) = self.date
            && item.date() != Some(date)
        {
            return false;
        }
        true
    }
}

/// Keep the items matching all active criteria, preserving input order.
#[must_use]
pub fn filter<T: Filterable>(items: Vec<T>, criteria: &FilterCriteria) -> Vec<T> {
    if criteria.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| criteria.matches(item))
        .collect()
}

impl Filterable for CulturalEvent {
    fn text_fields(&self) -> [Option<&str>; 2] {
        [Some(self.title.as_str()), self.description.as_deref()]
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn region(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn city_field(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }
}

impl Filterable for Podcast {
    fn text_fields(&self) -> [Option<&str>; 2] {
        [Some(self.title.as_str()), self.description.as_deref()]
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn region(&self) -> Option<&str> {
        None
    }
}

impl Filterable for TimelineEvent {
    fn text_fields(&self) -> [Option<&str>; 2] {
        [Some(self.title.as_str()), self.description.as_deref()]
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn region(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Filterable for Grant {
    fn text_fields(&self) -> [Option<&str>; 2] {
        [Some(self.title.as_str()), self.organization.as_deref()]
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn date(&self) -> Option<NaiveDate> {
        self.deadline_date()
    }
}

impl Filterable for Record {
    fn text_fields(&self) -> [Option<&str>; 2] {
        match self {
            Self::Event(e) => e.text_fields(),
            Self::Podcast(p) => p.text_fields(),
            Self::Timeline(t) => t.text_fields(),
            Self::Grant(g) => g.text_fields(),
        }
    }

    fn category(&self) -> Option<&str> {
        match self {
            Self::Event(e) => Filterable::category(e),
            Self::Podcast(p) => Filterable::category(p),
            Self::Timeline(t) => Filterable::category(t),
            Self::Grant(g) => Filterable::category(g),
        }
    }

    fn region(&self) -> Option<&str> {
        match self {
            Self::Event(e) => Filterable::region(e),
            Self::Podcast(p) => Filterable::region(p),
            Self::Timeline(t) => Filterable::region(t),
            Self::Grant(g) => Filterable::region(g),
        }
    }

    fn city_field(&self) -> Option<&str> {
        match self {
            Self::Event(e) => e.city_field(),
            Self::Podcast(p) => p.city_field(),
            Self::Timeline(t) => t.city_field(),
            Self::Grant(g) => g.city_field(),
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Event(e) => Filterable::date(e),
            Self::Podcast(p) => Filterable::date(p),
            Self::Timeline(t) => Filterable::date(t),
            Self::Grant(g) => Filterable::date(g),
        }
    }
}
