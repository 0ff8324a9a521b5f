// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

/// Identifies a flashcard set. The value is the set's creation time in
/// milliseconds since the Unix epoch, and it never changes once assigned.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(i64);

impl SetId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// An id for a set created right now.
    #[cfg(feature = "clock")]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// The creation time, or `None` if the id is outside chrono's range.
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// The creation time formatted for display, in the user's local time.
    #[cfg(feature = "clock")]
    pub fn created_display(self) -> String {
        match self.created_at() {
            Some(utc) => utc
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => "at an unknown time".to_string(),
        }
    }

    /// The creation time formatted for display. Without a clock there is no
    /// local timezone, so this is UTC.
    #[cfg(not(feature = "clock"))]
    pub fn created_display(self) -> String {
        match self.created_at() {
            Some(utc) => utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => "at an unknown time".to_string(),
        }
    }
}

impl Display for SetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SetId {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(SetId)
            .map_err(|_| ErrorReport::new(format!("invalid flashcard set id: '{s}'")))
    }
}
