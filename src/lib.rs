// ABOUTME: Library root for onoma - lexical RFC 1123 hostname validation.
// ABOUTME: Exposes the validated Hostname type plus its classifier and tokenizer.

pub mod chars;
pub mod hostname;
pub mod label;

pub use hostname::{Hostname, HostnameError};
pub use label::{Labels, labels};
