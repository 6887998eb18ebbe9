//! HR Compliance Engine for Retail Pharmacies
//!
//! This crate evaluates a pharmacy's weekly schedule, absences and leave
//! balances against the staffing rules of the French retail pharmacy
//! collective agreement (IDCC 1996): a pharmacist (PDE) on every shift, the
//! 35-hour legal week, covered absences, leave balances, declared
//! availability and the weekly coverage rate.
//!
//! It also carries the write side of the staffing tool: absence requests,
//! schedule edits and schedule generation over a JSON-persisted store,
//! exposed through an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
pub mod store;
pub mod workflow;
