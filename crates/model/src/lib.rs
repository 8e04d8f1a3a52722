//! Contains the wire and domain types shared between the validation core and
//! the HTTP gateway: record shapes, typed payloads and verdicts.

pub mod bytes_hex;
pub mod payload;
pub mod record;
pub mod verdict;
