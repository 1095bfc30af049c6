//! Storage for screen record collections

pub mod collection;
pub mod in_memory;

pub use collection::{Collection, IdStrategy};
pub use in_memory::InMemoryDataService;
