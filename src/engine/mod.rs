//! Engine modules — the "brain" that translates config into tool sequences.
//!
//! The engine layer sits between configuration (what the checkout needs) and
//! execution (which tools to run). It generates ordered, validated operation
//! plans.

pub mod plan;
