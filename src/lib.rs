//! # Introduction
//!
//! gradebook keeps a session's student records in memory and drives every
//! operation on them through a line-oriented terminal menu.  There is no
//! persistence: the store lives exactly as long as the process.
//!
//! ## Session pipeline
//!
//! ```text
//! stdin tokens → validation → Session dispatch → RecordStore / utilities → stdout
//! ```
//!
//! 1. [`records`] — the record store: [`records::store::RecordStore`] holds
//!    an ordered, capacity-bounded sequence of
//!    [`records::record::StudentRecord`]s and implements add, lookup,
//!    update, delete, substring search, the two sorts, top-K selection, and
//!    the duplicate-excluding section merge.
//! 2. [`matrix`] — dense integer [`matrix::Matrix`] sized by its own
//!    row/column parameters, with shape-checked add/sub/multiply and
//!    transpose.
//! 3. [`arrays`] — first-seen-order dedup union of two integer sequences.
//! 4. [`session`] — the interactive menu loop over generic `BufRead`/`Write`
//!    streams; drives everything above and is fully scriptable in tests.
//!
//! ## Interface
//!
//! Single-token line input only: integers within declared bounds and
//! whitespace-free names.  Invalid input is re-prompted in place; every
//! recoverable failure is reported textually and returns to the menu.

pub mod arrays;
pub mod matrix;
pub mod records;
pub mod session;
