//! Bank-hours engine for Brazilian CLT work schedules
//!
//! This crate computes worked time, holiday-aware overtime buckets (50%
//! and 100% premium), and monthly bank-hours totals from raw punch
//! events, with a holiday calendar that understands Easter-derived
//! national holidays and state-scoped observances.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
