//! Method table implementations.

pub mod hashmap;

pub use hashmap::HashMapRouter;
