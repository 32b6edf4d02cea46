pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod heap;
pub mod utility;

pub use error::{HeapError, ParseError};
pub use heap::{heap_sort, BinaryHeap, Order};
