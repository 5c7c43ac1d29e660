//! Directory data source adapters.

mod filesystem;
mod in_memory;

pub use filesystem::FsDirectorySource;
pub use in_memory::InMemoryDirectorySource;
