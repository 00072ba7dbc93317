//! Single-field validation

use crate::form::ValidatorOptions;
use crate::resolver::resolve_message;
use crate::rule::RuleSpec;
use crate::value::FieldValue;
use tracing::{debug, trace};

/// Run `rules` in order against `value`
///
/// Evaluation stops at the first failing rule and its resolved message is
/// returned. `None` means every rule passed (or there were none). Skipped
/// entries contribute nothing. A rule that panics is a bug in the rule and
/// is not caught here.
pub fn validate_field(
    rules: &[RuleSpec],
    value: &FieldValue,
    options: &ValidatorOptions,
) -> Option<String> {
    for (index, spec) in rules.iter().enumerate() {
        let Some((rule, rule_resolver)) = spec.normalize() else {
            trace!(index, "skipping rule spec without a rule");
            continue;
        };

        let outcome = rule.apply(value);
        let Some(failure) = outcome.failure() else {
            continue;
        };

        debug!(rule = rule.name(), code = %failure.code, index, "rule failed");
        return Some(resolve_message(
            &failure.code,
            &failure.params,
            &[rule_resolver, options.error_message_resolver()],
        ));
    }

    None
}
