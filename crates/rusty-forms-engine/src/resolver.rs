//! Error message resolution
//!
//! A failed rule yields an error code plus parameters. The display string is
//! picked from an ordered chain of optional resolvers: the failing rule's own
//! resolver first, then the validator-wide one. The raw code is the implicit
//! last link, so a form validates fine with no resolver configured at all.

use crate::outcome::ErrorParams;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

type ResolveFn = dyn Fn(&str, &ErrorParams) -> Option<String> + Send + Sync;

/// Turns an error code and its parameters into a display string
#[derive(Clone)]
pub struct MessageResolver(Arc<ResolveFn>);

impl MessageResolver {
    /// Resolver that always produces a message
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str, &ErrorParams) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(move |code, params| Some(func(code, params))))
    }

    /// Resolver that may decline, handing over to the next link of the chain
    pub fn partial<F>(func: F) -> Self
    where
        F: Fn(&str, &ErrorParams) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Fixed message with `{param}` placeholders, whatever the code
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(move |_, params| render_template(&template, params))
    }

    pub fn resolve(&self, code: &str, params: &ErrorParams) -> Option<String> {
        (self.0)(code, params)
    }
}

impl fmt::Debug for MessageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MessageResolver(..)")
    }
}

/// Resolve the message for a failure
///
/// Walks `chain` in order; `None` links and resolvers that decline are
/// passed over. An empty message counts as a decline: a failing field always
/// ends up with a non-empty message. A resolver that panics stops the walk
/// and the raw code is used, so one broken translation cannot take down a
/// whole form.
pub fn resolve_message(
    code: &str,
    params: &ErrorParams,
    chain: &[Option<&MessageResolver>],
) -> String {
    for resolver in chain.iter().flatten() {
        match panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve(code, params))) {
            Ok(Some(message)) if !message.is_empty() => return message,
            Ok(_) => continue,
            Err(_) => {
                warn!(code, "message resolver panicked, falling back to the error code");
                return code.to_string();
            }
        }
    }

    code.to_string()
}

/// Substitute `{name}` placeholders with parameter values
///
/// Placeholders without a matching parameter are left as written.
pub fn render_template(template: &str, params: &ErrorParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.display(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
