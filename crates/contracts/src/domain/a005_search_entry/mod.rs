pub mod aggregate;

pub use aggregate::AdminSearchEntry;
