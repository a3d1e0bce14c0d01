pub mod slice;

pub use slice::{SliceError, sub_slice};
