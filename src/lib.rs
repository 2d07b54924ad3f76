pub mod common;
mod err;
mod memory;

pub use err::Error;
pub use memory::{Memory, DUMP_ROW_BYTES};
