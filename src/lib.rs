//! Teams API Library
//!
//! This library provides the data-access layer for teams and their member
//! users, including domain records, repositories, and an HTTP adapter.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
