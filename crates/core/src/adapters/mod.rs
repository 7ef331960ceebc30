//! Host implementations of the capability traits.

mod registry;

pub use registry::{RegistryBuilder, RegistryTypeSystem};
