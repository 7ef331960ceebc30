//! Member-resolution engine.
//!
//! Rebuilds member, method, property, field and constructor lookup with
//! visibility and hierarchy filters on top of a host that only reports the
//! declared members of one type and its base-type link.
//!
//! # Architecture
//!
//! ```text
//! HostTypeSystem (traits)  →  declared members, base type, assignability
//!       │
//!       ▼
//! engine::walker           →  ancestors-first member sequence
//! engine::filter           →  staticness / visibility axes
//! engine::matcher          →  name or parameter-signature match
//!       │
//!       ▼
//! MemberLookup (facade)    →  get_method, get_property, get_constructor, ...
//! ```
//!
//! # Usage
//!
//! ```
//! use memberscope_api::{BindingFlags, Visibility};
//! use memberscope_core::{MemberLookup, RegistryBuilder};
//!
//! let mut b = RegistryBuilder::new();
//! let int = b.add_primitive("Int32");
//! let base = b.add_class("Base", None);
//! let derived = b.add_class("Derived", Some(base));
//! b.add_method(base, "M", &[], Visibility::Public, false)
//!     .add_method(derived, "M", &[int], Visibility::Public, false);
//! let ts = b.build();
//!
//! let flags = BindingFlags::PUBLIC | BindingFlags::INSTANCE;
//! let overloads = ts.get_methods_named(derived, "M", flags);
//! assert_eq!(overloads.len(), 2);
//! let exact = ts.get_method_by_signature(derived, "M", &[int]).unwrap();
//! assert_eq!(exact.declaring_type, derived);
//! ```

pub mod adapters;
pub mod engine;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod query;
pub mod system;

pub use adapters::{RegistryBuilder, RegistryTypeSystem};
pub use error::QueryError;
pub use lookup::MemberLookup;
pub use system::{
    AssignabilityProvider, HostTypeSystem, InheritanceProvider, MemberProvider, TypeProvider,
};
