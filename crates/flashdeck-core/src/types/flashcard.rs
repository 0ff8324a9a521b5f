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

use serde::Deserialize;
use serde::Serialize;

/// A single front/back pair. Serialized as a two-element array
/// `[front, back]`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// The `["", ""]` card used as a placeholder and by the editor's
    /// insert buttons.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn set_front(&mut self, front: impl Into<String>) {
        self.front = front.into();
    }

    pub fn set_back(&mut self, back: impl Into<String>) {
        self.back = back.into();
    }
}

impl From<(String, String)> for Flashcard {
    fn from((front, back): (String, String)) -> Self {
        Self { front, back }
    }
}

impl From<Flashcard> for (String, String) {
    fn from(card: Flashcard) -> Self {
        (card.front, card.back)
    }
}
