//! Shared utilities for rowcheck

pub mod column;
