//! Integration tests for rusty-forms-engine
//!
//! Covers the behaviour a form UI depends on:
//! - short-circuit evaluation per field
//! - message resolution precedence
//! - complete, ordered error maps and sink notifications
//! - configuration errors for fields without values

use proptest::prelude::*;
use rstest::rstest;
use rusty_forms_engine::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn always(code: &'static str) -> Rule {
    Rule::named(code, move |_| Outcome::fail(code))
}

fn never() -> Rule {
    Rule::named("never", |_| Outcome::Pass)
}

fn between(min: f64, max: f64) -> Rule {
    Rule::named("between", move |value: &FieldValue| match value.as_number() {
        Some(n) if n >= min && n <= max => Outcome::Pass,
        _ => Outcome::fail_with("numberBetween", ErrorParams::new().with("min", min as i64).with("max", max as i64)),
    })
}

fn counting(calls: &Arc<AtomicUsize>, outcome: Outcome) -> Rule {
    let calls = Arc::clone(calls);
    Rule::new(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        outcome.clone()
    })
}

fn form(pairs: &[(&str, FieldValue)]) -> FormValues {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        ".*".prop_map(FieldValue::Text),
        any::<f64>().prop_map(FieldValue::Number),
        any::<bool>().prop_map(FieldValue::Bool),
    ]
}

proptest! {
    #[test]
    fn empty_rule_list_is_always_valid(value in field_value()) {
        prop_assert_eq!(validate_field(&[], &value, &ValidatorOptions::default()), None);

        let rules = FieldRules::new().field("any", Vec::<RuleSpec>::new());
        let errors = Validator::default()
            .check(&rules, &form(&[("any", value)]))
            .unwrap();
        prop_assert_eq!(errors.get("any"), Some(""));
    }

    #[test]
    fn rules_after_the_first_failure_never_run(passing in 0usize..5, trailing in 0usize..5) {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));

        let mut specs: Vec<RuleSpec> = (0..passing)
            .map(|_| counting(&before, Outcome::Pass).into())
            .collect();
        specs.push(always("stop").into());
        specs.extend((0..trailing).map(|_| RuleSpec::from(counting(&after, Outcome::fail("late")))));

        let message = validate_field(&specs, &FieldValue::from("x"), &ValidatorOptions::default());

        prop_assert_eq!(message.as_deref(), Some("stop"));
        prop_assert_eq!(before.load(Ordering::SeqCst), passing);
        prop_assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn overall_validity_is_the_and_of_fields(failing in proptest::collection::vec(any::<bool>(), 0..8)) {
        let mut rules = FieldRules::new();
        let mut values = FormValues::new();
        for (index, fails) in failing.iter().enumerate() {
            let name = format!("field{}", index);
            let rule = if *fails { always("bad") } else { never() };
            rules.insert(name.clone(), vec![rule.into()]);
            values.insert(name, FieldValue::from(""));
        }

        let validator = Validator::default();
        let mut run = validator.bind(&rules, &values, ());
        let valid = run.validate().unwrap();

        prop_assert_eq!(valid, failing.iter().all(|fails| !fails));
        prop_assert_eq!(run.errors().len(), failing.len());
        for (index, fails) in failing.iter().enumerate() {
            let message = run.errors().get(&format!("field{}", index)).unwrap();
            prop_assert_eq!(message.is_empty(), !fails);
        }
    }
}

#[rstest]
#[case::rule_level(true, true, "Age must be 18-65")]
#[case::global(false, true, "numberBetween: 18..65")]
#[case::raw_code(false, false, "numberBetween")]
fn message_precedence(#[case] rule_level: bool, #[case] global: bool, #[case] expected: &str) {
    let rule = between(18.0, 65.0);
    let spec = if rule_level {
        rule.with_message(MessageResolver::template("Age must be {min}-{max}"))
    } else {
        rule.into()
    };

    let mut options = ValidatorOptions::new();
    if global {
        options = options.with_error_message(|code, params| {
            format!(
                "{}: {}..{}",
                code,
                params.display("min").unwrap_or_default(),
                params.display("max").unwrap_or_default()
            )
        });
    }

    let rules = FieldRules::new().field("age", [spec]);
    let errors = Validator::new(options)
        .check(&rules, &form(&[("age", FieldValue::from(10))]))
        .unwrap();

    assert_eq!(errors.get("age"), Some(expected));
}

#[test]
fn all_passing_form_is_valid_with_empty_messages() {
    let rules = FieldRules::new()
        .field("age", [between(18.0, 65.0)])
        .field("name", [never()]);
    let values = form(&[("age", FieldValue::from(30)), ("name", FieldValue::from("Ada"))]);

    let validator = Validator::default();
    let mut run = validator.bind(&rules, &values, None::<FormErrors>);
    assert_eq!(run.validate(), Ok(true));
    assert_eq!(run.errors().iter().collect::<Vec<_>>(), vec![("age", ""), ("name", "")]);
    assert_eq!(run.into_sink().map(|errors| errors.len()), Some(2));
}

#[test]
fn validate_twice_is_idempotent() {
    let rules = FieldRules::new()
        .field("age", [between(18.0, 65.0)])
        .field("name", [always("required")]);
    let values = form(&[("age", FieldValue::from(99)), ("name", FieldValue::from(""))]);

    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let published = Arc::clone(&published);
        move |errors: &FormErrors| published.lock().unwrap().push(errors.clone())
    };

    let validator = Validator::default();
    let mut run = validator.bind(&rules, &values, sink);
    let first = run.validate();
    let first_errors = run.errors().clone();
    let second = run.validate();

    assert_eq!(first, second);
    assert_eq!(&first_errors, run.errors());

    let published = published.lock().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0], published[1]);
}

#[test]
fn missing_field_value_is_reported_not_skipped() {
    let rules = FieldRules::new()
        .field("city", [never()])
        .field("zip", [never()]);
    let values = form(&[("city", FieldValue::from("Lyon"))]);

    let err = Validator::default().check(&rules, &values).unwrap_err();
    assert_eq!(err, ValidationError::MissingField { field: "zip".to_string() });
    assert_eq!(
        err.to_string(),
        "field \"zip\" has validation rules but no value in the form"
    );
}

#[test]
fn extra_values_without_rules_are_ignored() {
    let rules = FieldRules::new().field("name", [never()]);
    let values = form(&[("name", FieldValue::from("x")), ("other", FieldValue::from(""))]);

    let errors = Validator::default().check(&rules, &values).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("other"), None);
}

#[test]
fn catalog_as_global_resolver() {
    let catalog = MessageCatalog::from_toml_str(r#"numberBetween = "Between {min} and {max}""#).unwrap();
    let validator = Validator::new(ValidatorOptions::new().with_resolver(catalog));

    let rules = FieldRules::new()
        .field("age", [between(18.0, 65.0)])
        .field("name", [always("required")]);
    let values = form(&[("age", FieldValue::from(10)), ("name", FieldValue::from(""))]);

    let errors = validator.check(&rules, &values).unwrap();
    assert_eq!(errors.get("age"), Some("Between 18 and 65"));
    // not in the catalog: raw code
    assert_eq!(errors.get("name"), Some("required"));
}

#[test]
fn form_state_round_trip() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let rules = FieldRules::new()
        .field("email", [always("required")])
        .field("age", [between(18.0, 65.0)]);
    let mut state = FormState::from_defaults([("email", FieldValue::from("")), ("age", FieldValue::from(40))]);

    let validator = Validator::default();
    assert_eq!(validator.validate_state(&rules, &mut state), Ok(false));
    assert_eq!(state.field_error("email"), Some("required"));
    assert_eq!(state.field_error("age"), Some(""));

    state.set_field_value("age", 12);
    assert_eq!(validator.validate_state(&rules, &mut state), Ok(false));
    assert_eq!(state.field_error("age"), Some("numberBetween"));
}

#[test]
fn form_state_as_bound_sink() {
    let rules = FieldRules::new().field("name", [always("required")]);
    let state = FormState::from_defaults([("name", "")]);
    let values = state.values();

    let validator = Validator::default();
    let mut run = validator.bind(&rules, &values, state);
    assert_eq!(run.validate(), Ok(false));
    assert_eq!(run.sink().field_error("name"), Some("required"));
}

#[test]
fn panicking_resolver_does_not_abort_the_form() {
    let broken = MessageResolver::new(|_, _| panic!("bad translation"));
    let rules = FieldRules::new()
        .field("a", [always("required").with_message(broken)])
        .field("b", [always("required")]);
    let values = form(&[("a", FieldValue::from("")), ("b", FieldValue::from(""))]);

    let validator = Validator::new(ValidatorOptions::new().with_error_message(|_, _| "Required".to_string()));
    let errors = validator.check(&rules, &values).unwrap();

    assert_eq!(errors.get("a"), Some("required"));
    assert_eq!(errors.get("b"), Some("Required"));
}

#[test]
fn blank_messages_fall_through_to_the_code() {
    let rules = FieldRules::new()
        .field("a", [always("required").with_message(MessageResolver::template(""))])
        .field("b", [never()]);
    let values = form(&[("a", FieldValue::from("")), ("b", FieldValue::from(""))]);

    let validator = Validator::new(ValidatorOptions::new().with_error_message(|_, _| String::new()));
    let mut run = validator.bind(&rules, &values, None::<FormErrors>);

    assert_eq!(run.validate(), Ok(false));
    assert_eq!(run.errors().get("a"), Some("required"));
    assert_eq!(run.errors().first_invalid(), Some("a"));
    assert_eq!(run.into_sink().map(|errors| errors.is_valid()), Some(false));
}

#[test]
fn blank_rule_message_hands_over_to_catalog() {
    let catalog = MessageCatalog::new().with("required", "This field is required");
    let validator = Validator::new(ValidatorOptions::new().with_resolver(catalog));

    let rules = FieldRules::new().field("a", [always("required").with_message(MessageResolver::template(""))]);
    let errors = validator.check(&rules, &form(&[("a", FieldValue::from(""))])).unwrap();

    assert_eq!(errors.get("a"), Some("This field is required"));
}

proptest! {
    #[test]
    fn validity_matches_failing_rules_whatever_the_messages(
        failing in proptest::collection::vec(any::<bool>(), 1..6),
        message in prop_oneof![Just(String::new()), ".{0,8}"],
    ) {
        let mut rules = FieldRules::new();
        let mut pairs = Vec::new();
        for (i, fails) in failing.iter().enumerate() {
            let name = format!("f{}", i);
            let rule = if *fails { always("bad") } else { never() };
            rules = rules.field(name.clone(), [rule.with_message(MessageResolver::template(message.clone()))]);
            pairs.push((name, FieldValue::from("")));
        }
        let values: FormValues = pairs.into_iter().collect();

        let errors = Validator::default().check(&rules, &values).unwrap();
        prop_assert_eq!(errors.is_valid(), !failing.iter().any(|fails| *fails));
        for (i, fails) in failing.iter().enumerate() {
            prop_assert_eq!(errors.has_error(&format!("f{}", i)), *fails);
        }
    }
}
