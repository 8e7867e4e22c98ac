//! Sort policies and the comparators behind them.

use std::cmp::Ordering;
use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Sorting configuration
// ============================================================================

/// How entry names are ordered in a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortPolicy {
    /// Byte order, uppercase before lowercase (like `strcmp`).
    #[default]
    Alpha,
    /// Byte order with ASCII case ignored (like `strcasecmp`).
    CaseAlpha,
    /// Natural order: digit runs compare by value ("img2" before "img10").
    Numeric,
    /// Natural order with ASCII case ignored.
    CaseNumeric,
}

impl SortPolicy {
    pub const ALL: [SortPolicy; 4] = [Self::Alpha, Self::CaseAlpha, Self::Numeric, Self::CaseNumeric];

    /// Maps the integer used over the C surface (0..=3) to a policy.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Alpha),
            1 => Some(Self::CaseAlpha),
            2 => Some(Self::Numeric),
            3 => Some(Self::CaseNumeric),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Alpha => 0,
            Self::CaseAlpha => 1,
            Self::Numeric => 2,
            Self::CaseNumeric => 3,
        }
    }

    pub fn ignores_case(self) -> bool {
        matches!(self, Self::CaseAlpha | Self::CaseNumeric)
    }

    pub fn is_natural(self) -> bool {
        matches!(self, Self::Numeric | Self::CaseNumeric)
    }

    /// Compares two entry names under this policy.
    pub fn compare(self, a: &OsStr, b: &OsStr) -> Ordering {
        let (a, b) = (a.as_encoded_bytes(), b.as_encoded_bytes());
        if self.is_natural() {
            compare_natural(a, b, self.ignores_case())
        } else {
            compare_lexical(a, b, self.ignores_case())
        }
    }
}

// ============================================================================
// Comparators
// ============================================================================

/// Plain byte-wise comparison, optionally folding ASCII case.
pub fn compare_lexical(a: &[u8], b: &[u8], fold_case: bool) -> Ordering {
    if fold_case {
        a.iter()
            .map(u8::to_ascii_lowercase)
            .cmp(b.iter().map(u8::to_ascii_lowercase))
    } else {
        a.cmp(b)
    }
}

/// Natural comparison.
///
/// Names are split into maximal runs of ASCII digits and maximal runs of everything
/// else, and corresponding runs are compared left to right. Two digit runs compare by
/// numeric value (any length, leading zeros ignored); any other pair compares byte-wise.
/// If one run sequence is a prefix of the other, the shorter name comes first.
pub fn compare_natural(a: &[u8], b: &[u8], fold_case: bool) -> Ordering {
    let (mut a, mut b) = (a, b);
    loop {
        let (run_a, rest_a) = match split_run(a) {
            Some(split) => split,
            None => return if b.is_empty() { Ordering::Equal } else { Ordering::Less },
        };
        let (run_b, rest_b) = match split_run(b) {
            Some(split) => split,
            None => return Ordering::Greater,
        };

        // A digit run vs a text run is decided by their first bytes, which never match
        let ordering = if run_a[0].is_ascii_digit() && run_b[0].is_ascii_digit() {
            compare_magnitude(run_a, run_b)
        } else {
            compare_lexical(run_a, run_b, fold_case)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        a = rest_a;
        b = rest_b;
    }
}

/// Splits off the leading run of `s`. Returns `None` when `s` is empty.
fn split_run(s: &[u8]) -> Option<(&[u8], &[u8])> {
    let first = s.first()?;
    let digits = first.is_ascii_digit();
    let end = s
        .iter()
        .position(|c| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    Some(s.split_at(end))
}

/// Compares two ASCII digit runs as unsigned integers of arbitrary size.
fn compare_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let start = digits.iter().position(|&c| c != b'0').unwrap_or(digits.len());
    &digits[start..]
}
