pub mod licenses;

pub use licenses::handle_licenses;
