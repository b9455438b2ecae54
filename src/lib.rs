//! Core library functions for the cluster path expander

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;

pub use anyhow::Result;
