#[allow(clippy::module_inception)]
pub mod customer;
pub mod customer_note;

pub use customer::*;
pub use customer_note::*;
