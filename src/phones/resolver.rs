// Copyright (C) 2026 The rcountries Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::LazyLock;

use log::{trace, warn};
use regex::Regex;
use strum::IntoEnumIterator;

use crate::macros::impl_code_value_from_int;

use super::errors::{InvalidDigitsError, ResolveError, Result};
use super::table::Phone;

/// One optional '+' followed by decimal digits, the only textual shape
/// accepted for calling codes and prefixes.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").unwrap());

/// A raw calling-code or prefix argument: a bare integer, a digit string,
/// or a '+'-prefixed digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeValue<'a> {
    Number(i64),
    Text(&'a str),
}

impl<'a> From<&'a str> for CodeValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl_code_value_from_int!(i32, u32, i64);

/// Reduces a raw argument to the canonical non-negative integer form.
pub(super) fn normalize(value: CodeValue<'_>) -> std::result::Result<u64, InvalidDigitsError> {
    match value {
        CodeValue::Number(number) if number < 0 => Err(InvalidDigitsError::Negative(number)),
        CodeValue::Number(number) => Ok(number as u64),
        CodeValue::Text(raw) => {
            if !CODE_PATTERN.is_match(raw) {
                return Err(InvalidDigitsError::NotDigits(raw.to_owned()));
            }
            let digits = raw.strip_prefix('+').unwrap_or(raw);
            Ok(digits.parse()?)
        }
    }
}

impl Phone {
    /// Resolves a calling code to its highest-priority territory.
    ///
    /// When several territories share the base code the first table entry
    /// wins, so `Phone::resolve(1)` picks the first NANPA member.
    pub fn resolve<'a>(input: impl Into<CodeValue<'a>>) -> Result<Self> {
        let code = normalize(input.into()).map_err(ResolveError::InvalidCodeFormat)?;
        resolve_code(code, None, false)
    }

    /// Resolves a calling code together with a dialing-prefix hint.
    ///
    /// The hint is matched against the declared prefixes of every
    /// territory sharing the base code. Either digit sequence may be a
    /// left-anchored truncation of the other; the longest declared prefix
    /// that matches wins, and equal lengths go to the earlier table
    /// entry. A hint that matches nothing falls back to the
    /// highest-priority prefix-bearing territory, so the call still
    /// succeeds whenever the base code itself is known.
    pub fn resolve_with_prefix<'a, 'b>(
        input: impl Into<CodeValue<'a>>,
        prefix: impl Into<CodeValue<'b>>,
    ) -> Result<Self> {
        let code = normalize(input.into()).map_err(ResolveError::InvalidCodeFormat)?;
        let hint = normalize(prefix.into()).map_err(ResolveError::InvalidPrefixFormat)?;
        resolve_code(code, Some(hint), false)
    }

    /// Like [`resolve_with_prefix`](Self::resolve_with_prefix), but a
    /// hint matching no declared prefix is an error instead of a
    /// fallback. Use this where an unrelated territory would mask caller
    /// typos.
    pub fn resolve_strict<'a, 'b>(
        input: impl Into<CodeValue<'a>>,
        prefix: impl Into<CodeValue<'b>>,
    ) -> Result<Self> {
        let code = normalize(input.into()).map_err(ResolveError::InvalidCodeFormat)?;
        let hint = normalize(prefix.into()).map_err(ResolveError::InvalidPrefixFormat)?;
        resolve_code(code, Some(hint), true)
    }

    /// True when the hint is compatible with this territory: either no
    /// prefixes are declared, or the hint and at least one declared
    /// prefix are truncations of one another.
    pub fn is_prefix_supported(self, prefix: u64) -> bool {
        if self.prefixes().is_empty() {
            return true;
        }
        let mut hint_buf = itoa::Buffer::new();
        let hint_digits = hint_buf.format(prefix);
        self.prefixes().iter().any(|&declared| {
            let mut buf = itoa::Buffer::new();
            digits_overlap(buf.format(declared), hint_digits)
        })
    }
}

fn resolve_code(code: u64, hint: Option<u64>, strict: bool) -> Result<Phone> {
    let candidates: Vec<Phone> = Phone::iter()
        .filter(|phone| u64::from(phone.calling_code()) == code)
        .collect();
    let Some(&first) = candidates.first() else {
        return Err(ResolveError::UnknownCallingCode(code));
    };
    let Some(hint) = hint else {
        trace!("resolved +{} to {:?} by priority, no prefix hint given", code, first);
        return Ok(first);
    };

    let mut hint_buf = itoa::Buffer::new();
    let hint_digits = hint_buf.format(hint);
    let mut best: Option<(usize, Phone)> = None;
    for &candidate in &candidates {
        for &prefix in candidate.prefixes() {
            let mut prefix_buf = itoa::Buffer::new();
            let prefix_digits = prefix_buf.format(prefix);
            if !digits_overlap(prefix_digits, hint_digits) {
                continue;
            }
            // Strictly greater, so the earlier entry keeps equal lengths.
            if best.map_or(true, |(length, _)| prefix_digits.len() > length) {
                best = Some((prefix_digits.len(), candidate));
            }
        }
    }
    if let Some((length, found)) = best {
        trace!(
            "resolved +{} with hint {} to {:?} on a {}-digit prefix",
            code, hint_digits, found, length
        );
        return Ok(found);
    }

    if strict {
        return Err(ResolveError::UnmatchedPrefix { code, prefix: hint });
    }
    // Prefix tables are incomplete; a known base code must still resolve
    // deterministically.
    let fallback = candidates
        .iter()
        .copied()
        .find(|candidate| !candidate.prefixes().is_empty())
        .unwrap_or(first);
    warn!(
        "no prefix under +{} matches hint {}, falling back to {:?}",
        code, hint_digits, fallback
    );
    Ok(fallback)
}

/// Left-anchored comparison: either digit sequence may be the truncation
/// of the other.
fn digits_overlap(prefix: &str, hint: &str) -> bool {
    hint.starts_with(prefix) || prefix.starts_with(hint)
}
