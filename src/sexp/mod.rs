#[macro_use]
pub mod value;

pub mod cons;
pub mod symbol;

mod fmt_io_adapter;


pub use cons::{Cons, ConsIter};
pub use symbol::{Symbol, ToSymbol};
pub use value::{HeapValue, Value};
