//! Core types & traits: domain-agnostic contracts for tools and protocol.

pub mod envelope;
pub mod error;
pub mod mcp;
pub mod tool;
