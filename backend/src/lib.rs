//! Food Finder Backend Library
//!
//! An in-process library with two independent components:
//! - Credential store: durable user accounts in a local SQLite file
//! - Directory aggregator: typed lookups against three external REST
//!   directories (restaurants, recipes, nutrition)
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Services: the public facades (`AccountService`, `DirectoryService`)
//! - Providers: HTTP clients for the external directories
//! - Repositories: data access for the credential store
//! - Database: SQLite with SQLx

pub mod config;
pub mod db;
pub mod error;
pub mod providers;
pub mod repositories;
pub mod services;
pub mod telemetry;
