pub mod flags;
pub mod member;
pub mod model;
pub mod query;
pub mod types;

pub use flags::*;
pub use member::*;
pub use model::*;
pub use query::*;
pub use types::*;
