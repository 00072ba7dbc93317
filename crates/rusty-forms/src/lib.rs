//! # rusty-forms
//!
//! Declarative form validation. Each field gets an ordered list of rules; the
//! first rule that fails decides the field's error, and its error code is
//! turned into a message by the rule's own resolver, the validator-wide
//! resolver, or shown raw when neither is configured.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::prelude::*;
//!
//! let rules = FieldRules::new()
//!     .field("email", [required(), valid_email()])
//!     .field("age", [number_between(18.0, 65.0)]);
//!
//! let mut state = FormState::from_defaults([
//!     ("email", FieldValue::from("ada@example.com")),
//!     ("age", FieldValue::from(10)),
//! ]);
//!
//! let catalog = MessageCatalog::new().with("numberBetween", "Must be between {min} and {max}");
//! let validator = Validator::new(ValidatorOptions::new().with_resolver(catalog));
//!
//! assert_eq!(validator.validate_state(&rules, &mut state), Ok(false));
//! assert_eq!(state.field_error("email"), Some(""));
//! assert_eq!(state.field_error("age"), Some("Must be between 18 and 65"));
//! ```
//!
//! ## Features
//!
//! - **`rules`** (default) - Built-in rules and JSON/TOML rule schemas
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports two component crates:
//!
//! - **`rusty-forms-engine`** - Rule evaluation, message resolution, form state
//! - **`rusty-forms-rules`** - Built-in rules and declarative schemas (optional)
//!
//! Most users should use this parent crate. Advanced users can depend on individual
//! components for fine-grained control.

#![doc(html_root_url = "https://docs.rs/rusty-forms/0.1.0")]

// Re-export the engine at the crate root
pub use rusty_forms_engine::*;

// Re-export rules module (if feature enabled)
#[cfg(feature = "rules")]
pub use rusty_forms_rules as rules;

/// Everything needed to declare and run a form's validation
pub mod prelude {
    pub use rusty_forms_engine::{
        ErrorParams, ErrorSink, FieldRules, FieldState, FieldValue, FormErrors, FormState, FormValues, MessageCatalog,
        MessageResolver, Outcome, Rule, RuleSpec, ValidationError, Validator, ValidatorOptions,
    };

    #[cfg(feature = "rules")]
    pub use rusty_forms_rules::{
        equals, length_between, matches, matches_pattern, max_length, min_length, number_above, number_below,
        number_between, required, required_if, valid_email, valid_landline_phone_number, valid_mobile_phone_number,
        valid_phone_number, valid_postal_code, RuleSchema,
    };
}
