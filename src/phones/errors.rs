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

use std::num::ParseIntError;

use thiserror::Error;

// Helper type for Result
pub type Result<T> = std::result::Result<T, ResolveError>;

/// A raw argument that cannot be read as a non-negative decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDigitsError {
    #[error("\"{0}\" does not match an optional '+' followed by decimal digits")]
    NotDigits(String),

    #[error("negative value {0} cannot name a calling code")]
    Negative(i64),

    #[error("{0}")]
    OutOfRange(#[from] ParseIntError),
}

/// Terminal failures of calling-code resolution. Every variant is final
/// for the call; resolution has no transient failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The code argument is malformed. Always the caller's fault.
    #[error("invalid calling code: {0}")]
    InvalidCodeFormat(InvalidDigitsError),

    /// The prefix argument is malformed. Always the caller's fault.
    #[error("invalid dialing prefix: {0}")]
    InvalidPrefixFormat(InvalidDigitsError),

    /// Well-formed input, but no table entry carries the base code. Never
    /// silently mapped to a default territory.
    #[error("no territory is assigned the calling code +{0}")]
    UnknownCallingCode(u64),

    /// Strict resolution only: the base code is known but the hint
    /// matches no declared prefix.
    #[error("no territory with calling code +{code} declares a prefix matching {prefix}")]
    UnmatchedPrefix { code: u64, prefix: u64 },
}
