mod object;

pub use object::{DocId, StoredObject};
