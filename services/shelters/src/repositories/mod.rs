//! Read-only shelter storage

pub mod shelter;

pub use shelter::ShelterRepository;
