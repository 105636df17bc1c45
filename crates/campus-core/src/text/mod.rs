//! Text utilities shared by the catalog engine

pub mod collate;
