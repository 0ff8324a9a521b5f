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

use crate::parser::parse_selection;
use crate::types::flashcard::Flashcard;
use crate::types::set_id::SetId;

/// The name given to sets created without one.
pub const DEFAULT_SET_NAME: &str = "My Flashcard Set";

/// A named, ordered collection of flashcards.
///
/// The order of `flashcards` is the study order. Fronts and backs are not
/// validated: empty strings and an empty list are both allowed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FlashcardSet {
    id: SetId,
    pub name: String,
    pub flashcards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn new(id: SetId, name: impl Into<String>, flashcards: Vec<Flashcard>) -> Self {
        Self {
            id,
            name: name.into(),
            flashcards,
        }
    }

    /// A set holding a single blank card, for the user to fill in.
    pub fn placeholder(id: SetId, name: impl Into<String>) -> Self {
        Self::new(id, name, vec![Flashcard::blank()])
    }

    /// Build a set from selected text. An empty selection, or one with no
    /// `Term: Definition` records in it, gives a placeholder set.
    pub fn from_selection(id: SetId, name: impl Into<String>, selection: &str) -> Self {
        if selection.is_empty() {
            return Self::placeholder(id, name);
        }
        let flashcards = parse_selection(selection);
        if flashcards.is_empty() {
            Self::placeholder(id, name)
        } else {
            Self::new(id, name, flashcards)
        }
    }

    pub fn id(&self) -> SetId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    /// The body sent when sharing a set. Only the cards go in the body; the
    /// name travels with the request.
    pub fn share_payload(&self) -> SharePayload<'_> {
        SharePayload {
            flashcards: &self.flashcards,
        }
    }

    /// Render the set back into `Term: Definition` text.
    pub fn to_selection_text(&self) -> String {
        self.flashcards
            .iter()
            .map(|card| format!("{}: {}", card.front(), card.back()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct SharePayload<'a> {
    pub flashcards: &'a [Flashcard],
}
