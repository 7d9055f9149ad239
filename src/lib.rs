//! Schedule engine for mail carriers.
//!
//! This crate answers the date questions behind the mCORE carrier calendar:
//! rotating days off for the six carrier colours, observed federal holidays,
//! pay periods and pay dates, T6 route rotation and the letter schedule.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
