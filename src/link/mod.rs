pub mod types;

pub use types::{Link, LinkRelation};
