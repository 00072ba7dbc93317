//! Rule functions, rule specs and per-field rule sets

use crate::outcome::Outcome;
use crate::resolver::MessageResolver;
use crate::value::FieldValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type RuleFn = dyn Fn(&FieldValue) -> Outcome + Send + Sync;

/// A pure predicate over one field value
///
/// Cloning is cheap; the function is shared.
#[derive(Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    func: Arc<RuleFn>,
}

impl Rule {
    /// Wrap an anonymous rule function
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&FieldValue) -> Outcome + Send + Sync + 'static,
    {
        Self::named("custom", func)
    }

    /// Wrap a rule function under a name used in logs
    pub fn named<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&FieldValue) -> Outcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the rule against a value
    pub fn apply(&self, value: &FieldValue) -> Outcome {
        (self.func)(value)
    }

    /// Attach a per-rule message resolver, producing the structured spec form
    pub fn with_message(self, resolver: impl Into<MessageResolver>) -> RuleSpec {
        RuleSpec::WithMessage {
            rule: Some(self),
            get_error_message: Some(resolver.into()),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// One entry of a field's rule list
#[derive(Clone, Debug)]
pub enum RuleSpec {
    /// A bare rule function
    Rule(Rule),
    /// A rule with an optional message resolver of its own
    WithMessage {
        rule: Option<Rule>,
        get_error_message: Option<MessageResolver>,
    },
    /// Placeholder that never runs, e.g. a disabled conditional rule
    Skip,
}

impl RuleSpec {
    /// The rule to run and its own resolver, or `None` for entries that are skipped
    pub fn normalize(&self) -> Option<(&Rule, Option<&MessageResolver>)> {
        match self {
            RuleSpec::Rule(rule) => Some((rule, None)),
            RuleSpec::WithMessage {
                rule: Some(rule),
                get_error_message,
            } => Some((rule, get_error_message.as_ref())),
            RuleSpec::WithMessage { rule: None, .. } | RuleSpec::Skip => None,
        }
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        RuleSpec::Rule(rule)
    }
}

impl From<Option<RuleSpec>> for RuleSpec {
    fn from(spec: Option<RuleSpec>) -> Self {
        spec.unwrap_or(RuleSpec::Skip)
    }
}

impl From<Option<Rule>> for RuleSpec {
    fn from(rule: Option<Rule>) -> Self {
        rule.map_or(RuleSpec::Skip, RuleSpec::Rule)
    }
}

/// Ordered mapping from field name to its rule list
///
/// Fields are validated, and errors reported, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    fields: Vec<(String, Vec<RuleSpec>)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style declaration of a field's rules
    pub fn field<I, S>(mut self, name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec>,
    {
        self.insert(name, rules.into_iter().map(Into::into).collect());
        self
    }

    /// Declare a field's rules, replacing (in place) any earlier declaration
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<RuleSpec>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = rules,
            None => self.fields.push((name, rules)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[RuleSpec]> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RuleSpec])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Vec<RuleSpec>)> for FieldRules {
    fn from_iter<T: IntoIterator<Item = (String, Vec<RuleSpec>)>>(iter: T) -> Self {
        let mut rules = FieldRules::new();
        for (name, specs) in iter {
            rules.insert(name, specs);
        }
        rules
    }
}
