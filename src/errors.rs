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

use thiserror::Error;

/// Lookup failure shared by every registry: the value is well-formed but
/// names no entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{value}\" is not a valid {registry}")]
pub struct UnitNotFoundError {
    value: String,
    registry: &'static str,
}

impl UnitNotFoundError {
    pub(crate) fn new(value: impl Into<String>, registry: &'static str) -> Self {
        Self {
            value: value.into(),
            registry,
        }
    }

    /// The value that matched no entry.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the registry that was searched.
    pub fn registry(&self) -> &'static str {
        self.registry
    }
}
