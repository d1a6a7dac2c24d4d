pub mod api;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
