pub mod sncf;
