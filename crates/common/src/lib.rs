//! Shared resources for the bifrost crates.
//!
//! This crate provides the contract interface descriptor model and the
//! small hex/string utilities the conversion layer is built on.

/// Contract interface (ABI) descriptor types and value helpers.
pub mod abi;

/// General utility functions for hex and string handling.
pub mod utils;
