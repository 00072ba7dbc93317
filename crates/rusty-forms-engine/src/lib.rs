//! Rusty-Forms Engine
//!
//! Declarative form validation: each field has an ordered list of rules, the
//! first failing rule decides the field's error, and the error code is turned
//! into a message by the failing rule's resolver, the validator-wide resolver,
//! or, failing both, shown as-is.
//!
//! ```rust
//! use rusty_forms_engine::{FieldRules, FieldValue, FormValues, Outcome, Rule, Validator, ValidatorOptions};
//!
//! let required = Rule::named("required", |value: &FieldValue| {
//!     if value.is_truthy() { Outcome::Pass } else { Outcome::fail("required") }
//! });
//!
//! let rules = FieldRules::new().field("email", [required]);
//! let values = FormValues::from([("email".to_string(), FieldValue::from(""))]);
//!
//! let validator = Validator::new(
//!     ValidatorOptions::new().with_error_message(|code, _| format!("error.{}", code)),
//! );
//! let mut run = validator.bind(&rules, &values, ());
//! assert_eq!(run.validate(), Ok(false));
//! assert_eq!(run.errors().get("email"), Some("error.required"));
//! ```

pub mod catalog;
pub mod error;
pub mod field;
pub mod form;
pub mod outcome;
pub mod resolver;
pub mod rule;
pub mod state;
pub mod value;

pub use catalog::MessageCatalog;
pub use error::{CatalogError, ValidationError};
pub use field::validate_field;
pub use form::{ErrorSink, FormErrors, FormValues, ValidationRun, Validator, ValidatorOptions};
pub use outcome::{ErrorParams, Failure, Outcome};
pub use resolver::{render_template, resolve_message, MessageResolver};
pub use rule::{FieldRules, Rule, RuleSpec};
pub use state::{FieldState, FormState};
pub use value::FieldValue;
