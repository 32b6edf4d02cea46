use super::*;
use crate::error::HeapError;

mod iter;
mod vec;
