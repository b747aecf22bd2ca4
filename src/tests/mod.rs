//! Unit tests for the crate, grouped by the module they exercise.

mod generator;
mod roll;
