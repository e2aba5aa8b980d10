//! Take-Home Pay Comparison Engine for Australian Workers
//!
//! This crate estimates a worker's annual and weekly net pay as an employee
//! (TFN) or as a contractor (ABN), using the 2024-25 resident tax brackets,
//! Medicare levy, low income tax offset and super guarantee. Overtime,
//! allowances and FIFO rosters can be layered on top, and trade presets
//! provide typical rates for common construction roles.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
