mod common;
mod orchestrator;
mod schedule;
