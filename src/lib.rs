//! Payroll aggregation engine
//!
//! This crate turns employee master data, attendance (or shift tallies) and
//! bonus/penalty adjustments into a per-employee salary breakdown for a
//! calendar month. The calculation layer is pure; the repository, service and
//! HTTP layers around it handle retrieval, configuration and transport.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
