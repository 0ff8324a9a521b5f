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

//! flashdeck-core: Core library for flashdeck.
//!
//! This library provides WASM-compatible types and algorithms for:
//! - Parsing selected `Term: Definition` text into flashcards
//! - Flashcard sets and their serialized form
//! - Editing a set card by card
//! - A library of saved sets over a pluggable store

pub mod editor;
pub mod error;
pub mod library;
pub mod parser;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use editor::{CardKey, Inserter, SetEditor};
pub use error::{ErrorReport, Fallible, fail};
pub use library::{Library, SetSummary};
pub use parser::parse_selection;
pub use store::{MemoryStore, SetStore};
pub use types::flashcard::Flashcard;
pub use types::flashcard_set::{DEFAULT_SET_NAME, FlashcardSet, SharePayload};
pub use types::set_id::SetId;
