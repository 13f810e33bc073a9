//! Grant rank policy.
//!
//! Featured grants come first, then grants are ordered by deadline, soonest
//! first. Grants with a missing or unparseable deadline go after every dated
//! grant in their featured group. The sort is stable, so ties keep their input
//! order and ranking an already-ranked list changes nothing.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::entities::Grant;

fn compare_deadlines(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort grants for display.
#[must_use]
pub fn rank_grants(grants: Vec<Grant>) -> Vec<Grant> {
    // Parse each deadline once rather than on every comparison.
    let mut keyed: Vec<(bool, Option<NaiveDate>, Grant)> = grants
        .into_iter()
        .map(|g| (g.featured, g.deadline_date(), g))
        .collect();
    keyed.sort_by(|(fa, da, _), (fb, db, _)| {
        fb.cmp(fa).then_with(|| compare_deadlines(*da, *db))
    });
    keyed.into_iter().map(|(_, _, g)| g).collect()
}

/// The featured subset, in rank order.
#[must_use]
pub fn featured_grants(grants: &[Grant]) -> Vec<Grant> {
    rank_grants(grants.iter().filter(|g| g.featured).cloned().collect())
}
