//! Infrastructure adapters. Implement the ports.
//!
//! Riddle data sources, clock, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod data;
pub mod ui;
