// File: src/schema.rs
// Purpose: Declarative rule sets loaded from JSON or TOML
//
// A schema maps each field to a list of rule declarations:
//
//   {
//     "email": [{"rule": "required"}, {"rule": "validEmail", "message": "Expected {humanReadableFormat}"}],
//     "age":   [{"rule": "numberBetween", "min": 18, "max": 65}]
//   }
//
// Field order in the document is kept. Entries that do not describe a known
// rule are kept as skipped specs so one bad entry never breaks the form.

use crate::error::SchemaError;
use crate::{equality, numeric, patterns, presence, string};
use rusty_forms_engine::{FieldRules, FieldValue, MessageResolver, RuleSpec};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;
use tracing::warn;

fn default_max_length() -> usize {
    999
}

fn default_match_code() -> String {
    crate::codes::MATCH.to_string()
}

/// One rule declaration, tagged by its error code
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum RuleDecl {
    Required,
    RequiredIf {
        when: bool,
    },
    LengthBetween {
        min: usize,
        #[serde(default = "default_max_length")]
        max: usize,
    },
    MinLength {
        min: usize,
    },
    MaxLength {
        max: usize,
    },
    #[serde(rename_all = "camelCase")]
    Match {
        pattern: String,
        #[serde(default)]
        human_readable_format: String,
        #[serde(default = "default_match_code")]
        code: String,
    },
    ValidEmail,
    ValidPhoneNumber,
    ValidMobilePhoneNumber,
    ValidLandlinePhoneNumber,
    ValidPostalCode,
    #[serde(rename_all = "camelCase")]
    Equals {
        target_value: FieldValue,
        #[serde(default)]
        target_field_name: String,
    },
    NumberBetween {
        min: f64,
        max: f64,
    },
    NumberBelow {
        max: f64,
    },
    NumberAbove {
        min: f64,
    },
}

impl RuleDecl {
    /// Build the rule; a pattern that does not compile yields a skipped spec
    pub fn build(&self) -> RuleSpec {
        let rule = match self {
            RuleDecl::Required => presence::required(),
            RuleDecl::RequiredIf { when } => return presence::required_if(*when),
            RuleDecl::LengthBetween { min, max } => string::length_between(*min, *max),
            RuleDecl::MinLength { min } => string::min_length(*min),
            RuleDecl::MaxLength { max } => string::max_length(*max),
            RuleDecl::Match {
                pattern,
                human_readable_format,
                code,
            } => match regex::Regex::new(pattern) {
                Ok(regex) => string::matches(regex, human_readable_format.clone(), code.clone()),
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "skipping match rule with invalid pattern");
                    return RuleSpec::Skip;
                }
            },
            RuleDecl::ValidEmail => patterns::valid_email(),
            RuleDecl::ValidPhoneNumber => patterns::valid_phone_number(),
            RuleDecl::ValidMobilePhoneNumber => patterns::valid_mobile_phone_number(),
            RuleDecl::ValidLandlinePhoneNumber => patterns::valid_landline_phone_number(),
            RuleDecl::ValidPostalCode => patterns::valid_postal_code(),
            RuleDecl::Equals {
                target_value,
                target_field_name,
            } => equality::equals(target_value.clone(), target_field_name.clone()),
            RuleDecl::NumberBetween { min, max } => numeric::number_between(*min, *max),
            RuleDecl::NumberBelow { max } => numeric::number_below(*max),
            RuleDecl::NumberAbove { min } => numeric::number_above(*min),
        };

        rule.into()
    }
}

/// A rule declaration plus an optional message template of its own
///
/// `message` is read as any value so a malformed one costs only the message,
/// never the rule.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RuleEntry {
    #[serde(flatten)]
    pub decl: RuleDecl,
    #[serde(default)]
    pub message: Option<Value>,
}

impl RuleEntry {
    /// Message template, when one was given as a string
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }

    pub fn build(&self) -> RuleSpec {
        let spec = self.decl.build();
        if let Some(raw) = self.message.as_ref().filter(|raw| !raw.is_string()) {
            warn!(value = %raw, "ignoring rule message that is not a string");
        }

        match (self.message(), spec) {
            (Some(template), RuleSpec::Rule(rule)) => rule.with_message(MessageResolver::template(template)),
            (_, spec) => spec,
        }
    }
}

/// An entry of a field's list, recognized or not
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum SchemaEntry {
    Rule(RuleEntry),
    Unrecognized(Value),
}

impl SchemaEntry {
    pub fn build(&self) -> RuleSpec {
        match self {
            SchemaEntry::Rule(entry) => entry.build(),
            SchemaEntry::Unrecognized(raw) => {
                warn!(entry = %raw, "skipping unrecognized rule declaration");
                RuleSpec::Skip
            }
        }
    }
}

/// Field name to rule declarations, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSchema {
    fields: Vec<(String, Vec<SchemaEntry>)>,
}

impl RuleSchema {
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(source)?)
    }

    pub fn get(&self, field: &str) -> Option<&[SchemaEntry]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, entries)| entries.as_slice())
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

    /// Build the engine rule set
    pub fn to_field_rules(&self) -> FieldRules {
        self.fields
            .iter()
            .map(|(name, entries)| (name.clone(), entries.iter().map(SchemaEntry::build).collect()))
            .collect()
    }
}

impl<'de> Deserialize<'de> for RuleSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleSchemaVisitor;

        impl<'de> Visitor<'de> for RuleSchemaVisitor {
            type Value = RuleSchema;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field name to a list of rule declarations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleSchema, A::Error> {
                let mut fields: Vec<(String, Vec<SchemaEntry>)> = Vec::new();
                while let Some((name, entries)) = access.next_entry::<String, Vec<SchemaEntry>>()? {
                    match fields.iter_mut().find(|(existing, _)| *existing == name) {
                        Some((_, slot)) => *slot = entries,
                        None => fields.push((name, entries)),
                    }
                }
                Ok(RuleSchema { fields })
            }
        }

        deserializer.deserialize_map(RuleSchemaVisitor)
    }
}
