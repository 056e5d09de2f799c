pub mod closure;
pub mod config;
pub mod lockfile;
pub mod output;
pub mod version;

// Re-export main types for easy access
pub use closure::{collect_all, required_closure, Bucket};
pub use lockfile::{LockFile, Package, Source};
