//! # msme-core: Foundational Types for the MSME Compliance Stack
//!
//! Defines the domain primitives every other crate in the workspace speaks:
//! the [`BusinessProfile`] a compliance check is run against, the
//! [`ComplianceFinding`] records it produces, the ordinal [`RiskLevel`],
//! the [`Obligation`] taxonomy and the [`Rupees`] amount newtype.
//!
//! ## Key Design Principles
//!
//! 1. **Structured records, not dictionaries.** Profiles and findings have
//!    fixed fields; risk levels and obligations are closed enums.
//!
//! 2. **Single `Obligation` enum.** One definition, eight variants, in rule
//!    declaration order. Adding an obligation forces every consumer's
//!    exhaustive `match` to handle it.
//!
//! 3. **Validated construction.** [`BusinessProfile::try_new`] rejects
//!    negative inputs before any rule is evaluated.
//!
//! 4. **Integer money.** Turnover is whole rupees in a `u64`. Only the lakh
//!    rendering goes through `f64`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `msme-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod finding;
pub mod money;
pub mod obligation;
pub mod profile;
pub mod risk;

pub use error::ValidationError;
pub use finding::ComplianceFinding;
pub use money::{Rupees, CRORE, LAKH};
pub use obligation::{Obligation, OBLIGATION_COUNT};
pub use profile::BusinessProfile;
pub use risk::RiskLevel;
