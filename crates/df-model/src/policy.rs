//! Which input values count as NULL.
//!
//! CSV has no native NULL, so df decides per cell with an explicit, opt-in
//! policy. There are no heuristics here: no type inference, no numeric
//! sentinels such as `-1` or `0`, and no column-specific rules.

use serde::{Deserialize, Serialize};

/// Tokens recognized by [`NullPolicy::treat_na`], compared after upper-casing.
const NA_TOKENS: [&str; 2] = ["NA", "N/A"];

/// Token recognized by [`NullPolicy::treat_null_literal`].
const NULL_TOKEN: &str = "NULL";

/// Describes which values should be interpreted as NULL.
///
/// The policy only answers "is this value NULL?"; how NULL is written on
/// output is up to the caller. Rules are additive: enabling one never
/// removes a match made by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NullPolicy {
    /// Empty or whitespace-only values (`""`, `" "`, `"\t"`).
    pub treat_blanks: bool,

    /// `NA` and `N/A`, case-insensitive.
    pub treat_na: bool,

    /// The literal `NULL`, case-insensitive.
    pub treat_null_literal: bool,
}

impl Default for NullPolicy {
    fn default() -> Self {
        Self {
            treat_blanks: true,
            treat_na: false,
            treat_null_literal: false,
        }
    }
}

impl NullPolicy {
    /// A policy that matches nothing.
    pub fn none() -> Self {
        Self {
            treat_blanks: false,
            treat_na: false,
            treat_null_literal: false,
        }
    }

    /// A policy with every rule enabled.
    pub fn all() -> Self {
        Self {
            treat_blanks: true,
            treat_na: true,
            treat_null_literal: true,
        }
    }

    #[must_use]
    pub fn with_blanks(mut self, enable: bool) -> Self {
        self.treat_blanks = enable;
        self
    }

    #[must_use]
    pub fn with_na(mut self, enable: bool) -> Self {
        self.treat_na = enable;
        self
    }

    #[must_use]
    pub fn with_null_literal(mut self, enable: bool) -> Self {
        self.treat_null_literal = enable;
        self
    }

    /// Returns true if no rule is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.treat_blanks || self.treat_na || self.treat_null_literal)
    }

    /// Reports whether `value` should be treated as NULL.
    ///
    /// Checks run in a fixed order:
    ///
    /// 1. Trim surrounding whitespace.
    /// 2. Blank rule: the trimmed value is empty.
    /// 3. NA rule: the upper-cased value is `NA` or `N/A`.
    /// 4. NULL rule: the upper-cased value is `NULL`.
    ///
    /// Whitespace-only values only ever match the blank rule.
    pub fn is_null(&self, value: &str) -> bool {
        let trimmed = value.trim();

        if self.treat_blanks && trimmed.is_empty() {
            return true;
        }

        let upper = trimmed.to_uppercase();

        if self.treat_na && NA_TOKENS.contains(&upper.as_str()) {
            return true;
        }

        self.treat_null_literal && upper == NULL_TOKEN
    }
}
