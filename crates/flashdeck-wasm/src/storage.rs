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

//! Flashcard sets persisted in browser localStorage.

use flashdeck_core::ErrorReport;
use flashdeck_core::Fallible;
use flashdeck_core::FlashcardSet;
use flashdeck_core::SetId;
use flashdeck_core::SetStore;
use flashdeck_core::fail;
use wasm_bindgen::prelude::*;
use web_sys::Storage;

/// All sets are kept as one JSON array under this key.
const SETS_KEY: &str = "flashdeck.flashcard-sets";

fn storage_error(err: JsValue) -> ErrorReport {
    ErrorReport::new(format!("localStorage error: {err:?}"))
}

/// A set store over localStorage. Without localStorage (e.g. in a worker)
/// reads come back empty and writes fail.
pub struct LocalStorageStore {
    inner: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        Self { inner }
    }

    fn read(&self) -> Fallible<Vec<FlashcardSet>> {
        let Some(storage) = &self.inner else {
            return Ok(Vec::new());
        };
        match storage.get_item(SETS_KEY).map_err(storage_error)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, sets: &[FlashcardSet]) -> Fallible<()> {
        let Some(storage) = &self.inner else {
            return fail("localStorage is not available.");
        };
        let json = serde_json::to_string(sets)?;
        storage.set_item(SETS_KEY, &json).map_err(storage_error)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SetStore for LocalStorageStore {
    fn load_all(&self) -> Fallible<Vec<FlashcardSet>> {
        self.read()
    }

    fn load(&self, id: SetId) -> Fallible<Option<FlashcardSet>> {
        Ok(self.read()?.into_iter().find(|set| set.id() == id))
    }

    fn put(&mut self, set: &FlashcardSet) -> Fallible<()> {
        let mut sets = self.read()?;
        match sets.iter_mut().find(|s| s.id() == set.id()) {
            Some(existing) => *existing = set.clone(),
            None => sets.push(set.clone()),
        }
        self.write(&sets)
    }

    fn remove(&mut self, id: SetId) -> Fallible<bool> {
        let mut sets = self.read()?;
        let before = sets.len();
        sets.retain(|set| set.id() != id);
        if sets.len() == before {
            return Ok(false);
        }
        self.write(&sets)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use flashdeck_core::Library;

    use super::*;

    fn unavailable() -> LocalStorageStore {
        LocalStorageStore { inner: None }
    }

    #[test]
    fn test_reads_without_storage_are_empty() -> Fallible<()> {
        let store = unavailable();
        assert!(store.load_all()?.is_empty());
        assert_eq!(store.load(SetId::from_millis(1))?, None);
        Ok(())
    }

    #[test]
    fn test_writes_without_storage_fail() {
        let mut library = Library::new(unavailable());
        let err = library
            .create_from_selection(SetId::from_millis(1), None, "perro: dog")
            .unwrap_err();
        assert_eq!(err.message(), "localStorage is not available.");
    }
}
