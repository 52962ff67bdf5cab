//! Value and error types shared by the Tally crates.
//!
//! - **value**: [`ScalarInput`], the untyped input a caller hands in
//! - **number**: [`NormalizedNumber`], the coerced numeric result
//! - **error**: [`TallyError`] and the crate-wide [`Result`] alias
//! - **options**: serde-backed configuration structs
//! - **http**: HTTP-flavoured error values

pub mod error;
pub mod http;
pub mod number;
pub mod options;
pub mod value;

pub use error::{Result, TallyError};
pub use http::{HttpError, ValidationError};
pub use number::NormalizedNumber;
pub use options::{CleanOptions, FormKeys, TallyOptions};
pub use value::{ScalarInput, ValueKind};
