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

//! The user's collection of saved flashcard sets.

use log::debug;
use log::info;

use crate::editor::SetEditor;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::SetStore;
use crate::types::flashcard_set::DEFAULT_SET_NAME;
use crate::types::flashcard_set::FlashcardSet;
use crate::types::set_id::SetId;

/// One row of the "all flashcard sets" listing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SetSummary {
    pub id: SetId,
    pub name: String,
    pub flashcard_count: usize,
}

impl SetSummary {
    fn of(set: &FlashcardSet) -> Self {
        Self {
            id: set.id(),
            name: set.name.clone(),
            flashcard_count: set.len(),
        }
    }

    /// E.g. `3 flashcards, created 2024-05-01 09:30:00`.
    pub fn description(&self) -> String {
        format!(
            "{} flashcards, created {}",
            self.flashcard_count,
            self.id.created_display()
        )
    }
}

pub struct Library<S: SetStore> {
    store: S,
    default_name: String,
}

impl<S: SetStore> Library<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_name: DEFAULT_SET_NAME.to_string(),
        }
    }

    /// Use a different name for sets created without one.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn set_default_name(&mut self, name: impl Into<String>) {
        self.default_name = name.into();
    }

    /// All sets, oldest first.
    pub fn list(&self) -> Fallible<Vec<FlashcardSet>> {
        let mut sets = self.store.load_all()?;
        sets.sort_by_key(|set| set.id());
        Ok(sets)
    }

    pub fn summaries(&self) -> Fallible<Vec<SetSummary>> {
        Ok(self.list()?.iter().map(SetSummary::of).collect())
    }

    pub fn get(&self, id: SetId) -> Fallible<FlashcardSet> {
        self.store
            .load(id)?
            .ok_or_else(|| ErrorReport::new(format!("no flashcard set with id {id}")))
    }

    /// Add a new set. Fails if the id is already taken.
    pub fn create(&mut self, set: &FlashcardSet) -> Fallible<()> {
        if self.store.load(set.id())?.is_some() {
            return fail(format!(
                "a flashcard set with id {} already exists",
                set.id()
            ));
        }
        self.store.put(set)?;
        info!(
            "Created flashcard set {} ('{}') with {} flashcards.",
            set.id(),
            set.name,
            set.len()
        );
        Ok(())
    }

    /// Build a set from selected text and add it. `name` falls back to the
    /// default name.
    pub fn create_from_selection(
        &mut self,
        id: SetId,
        name: Option<&str>,
        selection: &str,
    ) -> Fallible<FlashcardSet> {
        let name = name.unwrap_or(&self.default_name).to_string();
        let set = FlashcardSet::from_selection(id, name, selection);
        debug!(
            "Parsed {} bytes of selection into {} flashcards.",
            selection.len(),
            set.len()
        );
        self.create(&set)?;
        Ok(set)
    }

    /// Store the final state of a set, replacing the old one.
    pub fn save(&mut self, set: &FlashcardSet) -> Fallible<()> {
        self.store.put(set)?;
        info!("Saved flashcard set {} ('{}').", set.id(), set.name);
        Ok(())
    }

    /// Delete a set. There is no undo.
    pub fn delete(&mut self, id: SetId) -> Fallible<()> {
        if !self.store.remove(id)? {
            return fail(format!("no flashcard set with id {id}"));
        }
        info!("Deleted flashcard set {id}.");
        Ok(())
    }

    /// Start editing a stored set.
    pub fn open_editor(&self, id: SetId) -> Fallible<SetEditor> {
        let set = self.get(id)?;
        debug!("Opened editor for flashcard set {id}.");
        Ok(SetEditor::open(set))
    }

    /// Finish editing: the set is saved as it stands when the editor closes.
    pub fn close_editor(&mut self, editor: SetEditor) -> Fallible<FlashcardSet> {
        let set = editor.close();
        self.save(&set)?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::flashcard::Flashcard;

    fn library() -> Library<MemoryStore> {
        Library::new(MemoryStore::new())
    }

    #[test]
    fn test_create_from_selection() -> Fallible<()> {
        let mut library = library();
        let set = library.create_from_selection(
            SetId::from_millis(100),
            None,
            "Capital of France: Paris\nCapital of Germany: Berlin",
        )?;
        assert_eq!(set.name, "My Flashcard Set");
        assert_eq!(library.get(SetId::from_millis(100))?, set);
        assert_eq!(set.len(), 2);
        Ok(())
    }

    #[test]
    fn test_create_from_empty_selection() -> Fallible<()> {
        let mut library = library().with_default_name("Untitled");
        let set = library.create_from_selection(SetId::from_millis(1), None, "")?;
        assert_eq!(set.name, "Untitled");
        assert_eq!(set.flashcards, vec![Flashcard::blank()]);
        Ok(())
    }

    #[test]
    fn test_create_rejects_taken_id() -> Fallible<()> {
        let mut library = library();
        let set = FlashcardSet::placeholder(SetId::from_millis(5), "First");
        library.create(&set)?;
        let again = FlashcardSet::placeholder(SetId::from_millis(5), "Second");
        assert_eq!(
            library.create(&again),
            Err(ErrorReport::new("a flashcard set with id 5 already exists"))
        );
        assert_eq!(library.get(SetId::from_millis(5))?.name, "First");
        Ok(())
    }

    #[test]
    fn test_list_is_oldest_first() -> Fallible<()> {
        let mut library = library();
        for (millis, name) in [(30, "c"), (10, "a"), (20, "b")] {
            library.create(&FlashcardSet::placeholder(SetId::from_millis(millis), name))?;
        }
        let names: Vec<String> = library.list()?.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_summaries() -> Fallible<()> {
        let mut library = library();
        library.create_from_selection(SetId::from_millis(0), Some("Pets"), "a: 1\nb: 2\nc: 3")?;
        let summaries = library.summaries()?;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Pets");
        assert_eq!(summaries[0].flashcard_count, 3);
        let description = summaries[0].description();
        assert!(description.starts_with("3 flashcards, created "));
        Ok(())
    }

    #[test]
    fn test_edit_is_saved_on_close() -> Fallible<()> {
        let mut library = library();
        let id = SetId::from_millis(1);
        library.create_from_selection(id, None, "perro: dog")?;

        let mut editor = library.open_editor(id)?;
        editor.rename("Spanish");
        let perro = editor.key_at(0)?;
        let key = editor.insert(Some(perro), Flashcard::new("gato", "cat"))?;
        editor.set_back(key, "cat (feline)")?;
        // Nothing is written until the editor closes.
        assert_eq!(library.get(id)?.len(), 1);

        library.close_editor(editor)?;
        let saved = library.get(id)?;
        assert_eq!(saved.name, "Spanish");
        assert_eq!(
            saved.flashcards,
            vec![
                Flashcard::new("perro", "dog"),
                Flashcard::new("gato", "cat (feline)"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_delete() -> Fallible<()> {
        let mut library = library();
        let id = SetId::from_millis(9);
        library.create(&FlashcardSet::placeholder(id, "Doomed"))?;
        library.delete(id)?;
        assert!(library.get(id).is_err());
        assert_eq!(
            library.delete(id),
            Err(ErrorReport::new("no flashcard set with id 9"))
        );
        Ok(())
    }
}
