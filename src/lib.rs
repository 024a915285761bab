//! Production line capacity planning for motorcycle assembly.
//!
//! This crate computes the staffing, takt time and output a line needs for
//! a target cadence, projects the capacity of every model on a line from a
//! reference model's crew, and scales support area staffing in proportion to
//! the assembly line.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
