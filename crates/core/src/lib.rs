//! # Timetable Core
//!
//! Domain logic for the weekly class-timetable scheduler: slot models,
//! time arithmetic, structural validation, double-booking detection, grid
//! assembly, and the mutation planning pipeline.
//!
//! Everything in this crate is synchronous and free of I/O. Callers hand in
//! a snapshot of the committed slot set and get back either the slots to
//! commit or a full report of what was wrong; persistence and the HTTP
//! surface live in the `timetable-db` and `timetable-api` crates.

/// Double-booking detection for teachers and classes
pub mod conflict;
/// Copying one day's slots onto another day
pub mod day_copy;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Week ordering, sparse grid assembly, and per-class grouping
pub mod grid;
/// Domain entities and wire-level request/response records
pub mod models;
/// Validate-then-check mutation planning (create / update / batch)
pub mod mutation;
/// Wall-clock ↔ minute-of-day arithmetic
pub mod time;
/// Structural validation of candidate slots
pub mod validation;
