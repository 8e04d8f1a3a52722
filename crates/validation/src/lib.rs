//! Core record-validation engine: the rule registry, the rule evaluators and
//! the dispatch facade the transport layer calls into.

pub mod registry;
pub mod rules;
pub mod size_fetching;
pub mod validator;

pub use self::validator::{Error, Limits, RecordValidator};
