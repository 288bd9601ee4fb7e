pub mod corpus;
pub mod data;
pub mod filter;
pub mod freq;
pub mod structs;
#[cfg(feature = "terminal")]
pub mod summary;
