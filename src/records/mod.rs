//! Student records and the session store
//!
//! This module holds the data side of the program:
//! - [`record`]: [`record::StudentRecord`] and its derived metrics
//!   (total, average, [`record::Grade`])
//! - [`store`]: [`store::RecordStore`], the ordered capacity-bounded
//!   collection, with every query and transform the menu exposes
//! - [`errors`]: [`errors::StoreError`] for the failure paths
//!
//! # Shape invariant
//!
//! The number of subjects is fixed once per session (1..=6).  Every record
//! in a store carries exactly that many marks; the store rejects any record
//! or marks update with a different length, so the invariant holds at all
//! times.

pub mod errors;
pub mod record;
pub mod store;

/// Most subjects a session can be configured with
pub const MAX_SUBJECTS: usize = 6;

/// Record capacity of a session store
pub const STORE_CAPACITY: usize = 100;
