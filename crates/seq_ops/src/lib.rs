mod mapping;
mod search;
mod structural;
mod traits;
mod transform;

pub use mapping::{map_keys, map_values};
pub use search::{contains, every, find, index, index_func, reduce, some};
pub use structural::{fill, range, reverse};
pub use traits::{Mapping, Seq, SeqMut};
pub use transform::{filter, filter_errors, for_each, map};
