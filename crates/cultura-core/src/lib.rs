//! # cultura-core
//!
//! Core types and pure catalog logic for Cultura.
//!
//! This crate provides the foundational types shared across all Cultura crates:
//! - Entity structs for the four catalog kinds (events, podcasts, timeline
//!   entries, grants) plus user favorites
//! - `EntityKind` with its table and default ordering
//! - The filter predicate engine applied to fetched collections
//! - The grant rank policy (featured first, then soonest deadline)
//! - Deadline arithmetic (days remaining, urgency)
//! - Form drafts with required-field validation
//! - Explicit session identity for ownership
//!
//! Nothing in here performs I/O; the store lives in `cultura-db`.

pub mod deadline;
pub mod drafts;
pub mod entities;
pub mod errors;
pub mod filter;
pub mod identity;
pub mod kinds;
pub mod rank;
