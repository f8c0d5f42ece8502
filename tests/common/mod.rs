#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
pub use memory_backend::MemoryBackend;
