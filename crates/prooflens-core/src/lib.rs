//! Prooflens Core Types and Definitions
//!
//! This crate provides the foundational types for the Prooflens trace viewer.
//! It includes:
//!
//! - **Trace**: The immutable data model of a proof execution trace ([`trace`] module)
//! - **Printing**: Printing variant modes and their selection ([`printing`] module)
//! - **Schema**: The JSON Schema derived from the data model ([`schema`] module)

pub mod printing;
pub mod schema;
pub mod trace;
