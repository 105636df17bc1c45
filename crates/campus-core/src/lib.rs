//! Campus Core Library
//!
//! Core domain logic for the No-Code & AI student dashboard: static
//! catalogs, the shared filter/sort engine, session and role gating, and the
//! Brújula compass.

pub mod catalog;
pub mod compass;
pub mod config;
pub mod content;
pub mod error;
pub mod expansion;
pub mod format;
pub mod logging;
pub mod query;
pub mod session;
pub mod text;
