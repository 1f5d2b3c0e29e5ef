//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod account;
pub mod directory;

pub use account::AccountService;
pub use directory::DirectoryService;
