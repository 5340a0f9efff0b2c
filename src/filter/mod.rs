//
//  tc-goggles
//  filter/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Parameter Filters
//!
//! Composable predicates over [`Parameter`]s.
//!
//! ## Predefined filters
//!
//! | Constructor | True when |
//! |-------------|-----------|
//! | [`ParameterFilter::name_matches`] | the name is present and the regex matches it |
//! | [`ParameterFilter::value_matches`] | the value is present and the regex matches it |
//! | [`ParameterFilter::inherited`] | `inherited` is exactly `true` |
//!
//! ## Combinators
//!
//! Filters combine with [`ParameterFilter::and`], [`ParameterFilter::or`] and
//! the `!` operator. Both binary combinators short-circuit left to right.
//!
//! ```rust
//! use tc_goggles::api::Parameter;
//! use tc_goggles::filter::ParameterFilter;
//!
//! let filter = (!ParameterFilter::inherited())
//!     .and(ParameterFilter::name_matches("^env\\.")?)
//!     .and(ParameterFilter::value_matches("(17|21)")?);
//!
//! let jdk = Parameter::new(Some("env.JDK"), Some("17"), Some(false));
//! assert!(filter.matches(&jdk));
//! assert_eq!(
//!     filter.to_string(),
//!     "((!inherited && name =~ /^env\\./) && value =~ /(17|21)/)"
//! );
//! # Ok::<(), regex::Error>(())
//! ```
//!
//! Regexes use search semantics: they match anywhere in the field unless
//! anchored.

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::api::Parameter;

/// Flags applied when compiling a filter pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Letters match both upper and lower case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// Whitespace in the pattern is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
}

impl PatternOptions {
    /// Options with only case-insensitive matching enabled.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }

    fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
    }
}

type Predicate = Arc<dyn Fn(&Parameter) -> bool + Send + Sync>;

#[derive(Clone)]
enum Expr {
    NameMatches(Regex),
    ValueMatches(Regex),
    Inherited,
    And(Box<ParameterFilter>, Box<ParameterFilter>),
    Or(Box<ParameterFilter>, Box<ParameterFilter>),
    Not(Box<ParameterFilter>),
    Custom(String, Predicate),
}

/// A boolean predicate over a [`Parameter`].
///
/// Filters are pure: evaluating one has no side effects.
#[derive(Clone)]
pub struct ParameterFilter(Expr);

impl ParameterFilter {
    /// Matches parameters whose name is present and matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn name_matches(pattern: &str) -> Result<Self, regex::Error> {
        Self::name_matches_with(pattern, PatternOptions::default())
    }

    /// Like [`ParameterFilter::name_matches`], compiled with `options`.
    pub fn name_matches_with(
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, regex::Error> {
        Ok(Self(Expr::NameMatches(options.compile(pattern)?)))
    }

    /// Matches parameters whose value is present and matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn value_matches(pattern: &str) -> Result<Self, regex::Error> {
        Self::value_matches_with(pattern, PatternOptions::default())
    }

    /// Like [`ParameterFilter::value_matches`], compiled with `options`.
    pub fn value_matches_with(
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, regex::Error> {
        Ok(Self(Expr::ValueMatches(options.compile(pattern)?)))
    }

    /// Matches parameters whose `inherited` flag is exactly `true`.
    ///
    /// A parameter without the flag is not inherited.
    pub fn inherited() -> Self {
        Self(Expr::Inherited)
    }

    /// Wraps a custom predicate. `label` is used by the `Display` rendering.
    pub fn from_fn<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Parameter) -> bool + Send + Sync + 'static,
    {
        Self(Expr::Custom(label.into(), Arc::new(predicate)))
    }

    /// True iff both `self` and `other` are true.
    pub fn and(self, other: Self) -> Self {
        Self(Expr::And(Box::new(self), Box::new(other)))
    }

    /// True iff either `self` or `other` is true.
    pub fn or(self, other: Self) -> Self {
        Self(Expr::Or(Box::new(self), Box::new(other)))
    }

    /// Evaluates the filter against `parameter`.
    pub fn matches(&self, parameter: &Parameter) -> bool {
        match &self.0 {
            Expr::NameMatches(regex) => parameter.name().is_some_and(|name| regex.is_match(name)),
            Expr::ValueMatches(regex) => {
                parameter.value().is_some_and(|value| regex.is_match(value))
            }
            Expr::Inherited => parameter.inherited() == Some(true),
            Expr::And(left, right) => left.matches(parameter) && right.matches(parameter),
            Expr::Or(left, right) => left.matches(parameter) || right.matches(parameter),
            Expr::Not(inner) => !inner.matches(parameter),
            Expr::Custom(_, predicate) => predicate(parameter),
        }
    }
}

impl Not for ParameterFilter {
    type Output = Self;

    /// True iff `self` is false.
    fn not(self) -> Self {
        Self(Expr::Not(Box::new(self)))
    }
}

impl fmt::Display for ParameterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Expr::NameMatches(regex) => write!(f, "name =~ /{regex}/"),
            Expr::ValueMatches(regex) => write!(f, "value =~ /{regex}/"),
            Expr::Inherited => write!(f, "inherited"),
            Expr::And(left, right) => write!(f, "({left} && {right})"),
            Expr::Or(left, right) => write!(f, "({left} || {right})"),
            Expr::Not(inner) => write!(f, "!{inner}"),
            Expr::Custom(label, _) => write!(f, "{label}"),
        }
    }
}

impl fmt::Debug for ParameterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParameterFilter")
            .field(&format_args!("{self}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: Option<&str>, value: Option<&str>, inherited: Option<bool>) -> Parameter {
        Parameter::new(name, value, inherited)
    }

    #[test]
    fn test_name_matches_searches_anywhere() {
        let filter = ParameterFilter::name_matches("JAVA").unwrap();
        assert!(filter.matches(&param(Some("env.JAVA_HOME"), None, None)));
        assert!(!filter.matches(&param(Some("env.java_home"), None, None)));
    }

    #[test]
    fn test_name_matches_absent_name_is_false() {
        let filter = ParameterFilter::name_matches(".*").unwrap();
        assert!(!filter.matches(&param(None, Some("x"), None)));
    }

    #[test]
    fn test_value_matches_absent_value_is_false() {
        let filter = ParameterFilter::value_matches("").unwrap();
        assert!(!filter.matches(&param(Some("x"), None, None)));
        assert!(filter.matches(&param(Some("x"), Some(""), None)));
    }

    #[test]
    fn test_case_insensitive_option() {
        let filter =
            ParameterFilter::name_matches_with("java", PatternOptions::case_insensitive()).unwrap();
        assert!(filter.matches(&param(Some("env.JAVA_HOME"), None, None)));
    }

    #[test]
    fn test_multi_line_option() {
        let options = PatternOptions {
            multi_line: true,
            ..PatternOptions::default()
        };
        let filter = ParameterFilter::value_matches_with("^second$", options).unwrap();
        assert!(filter.matches(&param(None, Some("first\nsecond"), None)));

        let filter = ParameterFilter::value_matches("^second$").unwrap();
        assert!(!filter.matches(&param(None, Some("first\nsecond"), None)));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(ParameterFilter::name_matches("(unclosed").is_err());
    }

    #[test]
    fn test_inherited_is_strict() {
        let inherited = ParameterFilter::inherited();
        assert!(inherited.matches(&param(None, None, Some(true))));
        assert!(!inherited.matches(&param(None, None, Some(false))));
        assert!(!inherited.matches(&param(None, None, None)));
    }

    #[test]
    fn test_not_inherited_includes_absent_flag() {
        let not_inherited = !ParameterFilter::inherited();
        assert!(!not_inherited.matches(&param(None, None, Some(true))));
        assert!(not_inherited.matches(&param(None, None, Some(false))));
        assert!(not_inherited.matches(&param(None, None, None)));
    }

    #[test]
    fn test_and() {
        let filter = ParameterFilter::name_matches("X")
            .unwrap()
            .and(ParameterFilter::value_matches("1").unwrap());

        assert!(filter.matches(&param(Some("X"), Some("1"), None)));
        assert!(!filter.matches(&param(Some("X"), Some("2"), None)));
        assert!(!filter.matches(&param(Some("Y"), Some("1"), None)));
        assert!(!filter.matches(&param(Some("X"), None, None)));
        assert!(!filter.matches(&param(None, Some("1"), None)));
    }

    #[test]
    fn test_or() {
        let filter = ParameterFilter::name_matches("^a$")
            .unwrap()
            .or(ParameterFilter::name_matches("^b$").unwrap());

        assert!(filter.matches(&param(Some("a"), None, None)));
        assert!(filter.matches(&param(Some("b"), None, None)));
        assert!(!filter.matches(&param(Some("c"), None, None)));
    }

    #[test]
    fn test_and_short_circuits() {
        let filter = ParameterFilter::from_fn("never", |_| false)
            .and(ParameterFilter::from_fn("boom", |_| panic!("evaluated")));
        assert!(!filter.matches(&Parameter::default()));

        let filter = ParameterFilter::from_fn("always", |_| true)
            .or(ParameterFilter::from_fn("boom", |_| panic!("evaluated")));
        assert!(filter.matches(&Parameter::default()));
    }

    #[test]
    fn test_custom_predicate() {
        let filter = ParameterFilter::from_fn("secure", |p| {
            p.value().is_some_and(|v| v.starts_with("credentialsJSON:"))
        });
        assert!(filter.matches(&param(None, Some("credentialsJSON:abc"), None)));
        assert!(!filter.matches(&param(None, Some("plain"), None)));
    }

    #[test]
    fn test_display() {
        let filter = (!ParameterFilter::inherited()).and(
            ParameterFilter::name_matches("X")
                .unwrap()
                .or(ParameterFilter::from_fn("custom", |_| true)),
        );
        assert_eq!(filter.to_string(), "(!inherited && (name =~ /X/ || custom))");
        assert_eq!(
            format!("{filter:?}"),
            "ParameterFilter((!inherited && (name =~ /X/ || custom)))"
        );
    }
}
