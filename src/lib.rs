//! Age and generation calculator.
//!
//! [`validate`] checks raw day/month/year input, [`age`] does calendar
//! subtraction, [`generation`] maps a birth year to a label, and [`form`]
//! ties them together as a pure reducer over immutable form state.

pub mod age;
pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod months;
pub mod observability;
pub mod svg;
pub mod validate;
pub mod view;

pub use age::Age;
pub use error::AppError;
pub use form::{FormEvent, FormState, Outcome, reduce};
pub use generation::GenerationInfo;
pub use validate::{DateInput, Field, ValidationErrors, validate};
