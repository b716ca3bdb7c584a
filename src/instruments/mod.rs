//! Contract definitions priced by this crate.

pub mod vanilla;

pub use vanilla::VanillaOption;
