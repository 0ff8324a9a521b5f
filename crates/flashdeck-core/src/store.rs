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

use std::collections::BTreeMap;

use crate::error::Fallible;
use crate::types::flashcard_set::FlashcardSet;
use crate::types::set_id::SetId;

/// Where saved flashcard sets live. Sets are keyed by id.
pub trait SetStore {
    /// Every stored set, in any order.
    fn load_all(&self) -> Fallible<Vec<FlashcardSet>>;

    fn load(&self, id: SetId) -> Fallible<Option<FlashcardSet>>;

    /// Insert the set, replacing any stored set with the same id.
    fn put(&mut self, set: &FlashcardSet) -> Fallible<()>;

    /// Remove a set. Returns whether it was there.
    fn remove(&mut self, id: SetId) -> Fallible<bool>;
}

/// A store that keeps everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    sets: BTreeMap<SetId, FlashcardSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SetStore for MemoryStore {
    fn load_all(&self) -> Fallible<Vec<FlashcardSet>> {
        Ok(self.sets.values().cloned().collect())
    }

    fn load(&self, id: SetId) -> Fallible<Option<FlashcardSet>> {
        Ok(self.sets.get(&id).cloned())
    }

    fn put(&mut self, set: &FlashcardSet) -> Fallible<()> {
        self.sets.insert(set.id(), set.clone());
        Ok(())
    }

    fn remove(&mut self, id: SetId) -> Fallible<bool> {
        Ok(self.sets.remove(&id).is_some())
    }
}
