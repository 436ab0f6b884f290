//! # Warnings & Outcomes
//!
//! Every remote call answers with a primary result **and** a list of free-text
//! warnings. Warnings are never dropped: a multi-step operation keeps appending
//! them, in call order, until it either finishes or stops on its first error,
//! and hands the whole list back either way.
//!
//! ## The `absorb` pattern
//!
//! [`Warnings::absorb`] appends a reply's warnings and then yields its result,
//! which lets an operation use `?` for short-circuiting without losing context:
//!
//! ```rust
//! use cc_framework::{Outcome, Warnings};
//!
//! fn two_steps(warnings: &mut Warnings) -> Result<u32, String> {
//!     let a = warnings.absorb::<_, _, String>(Outcome::new(Ok::<u32, String>(1), Warnings::from(vec!["w1".to_string()])))?;
//!     let b = warnings.absorb::<_, _, String>(Outcome::new(Err::<u32, String>("boom".into()), Warnings::from(vec!["w2".to_string()])))?;
//!     Ok(a + b)
//! }
//!
//! let mut warnings = Warnings::new();
//! let result = two_steps(&mut warnings);
//! assert_eq!(result, Err("boom".to_string()));
//! assert_eq!(warnings.as_slice(), ["w1", "w2"]);
//! ```

use serde::{Deserialize, Serialize};

/// Ordered, append-only collection of diagnostic strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    /// Appends `other` after the warnings already collected.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    /// Appends the warnings carried by `outcome` and returns its result.
    ///
    /// The error is converted with `From`, so `?` works from any operation
    /// whose error type wraps `E`.
    pub fn absorb<T, E, F>(&mut self, outcome: Outcome<T, E>) -> Result<T, F>
    where
        F: From<E>,
    {
        self.append(outcome.warnings);
        outcome.result.map_err(F::from)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(warnings: Vec<String>) -> Self {
        Self(warnings)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A result paired with the warnings gathered while producing it.
///
/// This is the `(result, warnings, error)` triple every remote call and every
/// orchestrated operation returns. The warnings are present on both the success
/// and the failure path.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome<T, E> {
    pub result: Result<T, E>,
    pub warnings: Warnings,
}

impl<T, E> Outcome<T, E> {
    pub fn new(result: Result<T, E>, warnings: Warnings) -> Self {
        Self { result, warnings }
    }

    /// A successful outcome without warnings.
    pub fn ok(value: T) -> Self {
        Self::new(Ok(value), Warnings::new())
    }

    /// A failed outcome without warnings.
    pub fn err(error: E) -> Self {
        Self::new(Err(error), Warnings::new())
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome::new(self.result.map(f), self.warnings)
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        Outcome::new(self.result.map_err(f), self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(value: Result<u32, &'static str>, warning: &str) -> Outcome<u32, &'static str> {
        Outcome::new(value, Warnings::from_iter([warning]))
    }

    #[test]
    fn absorb_keeps_call_order_and_stops_on_error() {
        let mut warnings = Warnings::new();

        let first: Result<u32, &str> = warnings.absorb(reply(Ok(1), "w1"));
        assert_eq!(first, Ok(1));

        let second: Result<u32, &str> = warnings.absorb(reply(Err("step 2 failed"), "w2"));
        assert_eq!(second, Err("step 2 failed"));

        assert_eq!(warnings.into_vec(), vec!["w1".to_string(), "w2".to_string()]);
    }

    #[test]
    fn absorb_converts_error_type() {
        #[derive(Debug, PartialEq)]
        struct Wrapped(&'static str);
        impl From<&'static str> for Wrapped {
            fn from(e: &'static str) -> Self {
                Wrapped(e)
            }
        }

        let mut warnings = Warnings::new();
        let result: Result<u32, Wrapped> = warnings.absorb(reply(Err("nope"), "only"));
        assert_eq!(result, Err(Wrapped("nope")));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn outcome_map_preserves_warnings() {
        let mapped = reply(Ok(2), "kept").map(|n| n * 10);
        assert_eq!(mapped.result, Ok(20));
        assert_eq!(mapped.warnings.as_slice(), ["kept"]);
    }
}
