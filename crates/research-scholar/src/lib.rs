//! Scholarship discovery pipeline.
//!
//! A student profile and a search query flow through a fixed sequence of stages (search,
//! eligibility, ranking, materials, scheduling, verification) and come out as a single
//! report. Every stage is a plain function over owned records so the orchestrator can be
//! shared across threads and invoked repeatedly.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
