//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `DirectorySource` - Loads the profile and tag documents at startup

mod directory_source;

pub use directory_source::DirectorySource;
