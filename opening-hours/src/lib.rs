//! Opening hours for German businesses.
//!
//! Answers "are we open right now, and if not, when do we open next?"
//! taking the statutory holidays of the business's federal state into
//! account, plus any manually configured closures.

pub mod config;
pub mod domain;
pub mod holidays;
pub mod service;
pub mod status;
pub mod web;
