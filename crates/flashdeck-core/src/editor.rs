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

//! The data side of the flashcard set editor.
//!
//! An editing session takes ownership of a set and hands it back when it is
//! closed. Each card is given a [`CardKey`] when the session starts (or when
//! the card is inserted), so cards can be edited and removed by identity no
//! matter how the list shifts around them.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::flashcard::Flashcard;
use crate::types::flashcard_set::FlashcardSet;
use crate::types::set_id::SetId;

/// Identity of a card within one editing session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardKey(u64);

impl CardKey {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl Display for CardKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An insertion point. There is one before every card and one after the
/// last card. Inserting at it places the new card right after `after`, or at
/// the top of the list when there is no preceding card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Inserter {
    pub after: Option<CardKey>,
}

pub struct SetEditor {
    set: FlashcardSet,
    /// Parallel to `set.flashcards`.
    keys: Vec<CardKey>,
    next_key: u64,
}

impl SetEditor {
    /// Start editing a set.
    pub fn open(set: FlashcardSet) -> Self {
        let keys = (0..set.flashcards.len() as u64).map(CardKey).collect();
        let next_key = set.flashcards.len() as u64;
        Self {
            set,
            keys,
            next_key,
        }
    }

    pub fn id(&self) -> SetId {
        self.set.id()
    }

    pub fn title(&self) -> String {
        format!("Editing Flashcard Set: {}", self.set.name)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.set.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys of all cards, in study order.
    pub fn keys(&self) -> &[CardKey] {
        &self.keys
    }

    pub fn cards(&self) -> impl Iterator<Item = (CardKey, &Flashcard)> {
        self.keys.iter().copied().zip(self.set.flashcards.iter())
    }

    /// All insertion points, top to bottom.
    pub fn inserters(&self) -> Vec<Inserter> {
        std::iter::once(None)
            .chain(self.keys.iter().copied().map(Some))
            .map(|after| Inserter { after })
            .collect()
    }

    pub fn get(&self, key: CardKey) -> Fallible<&Flashcard> {
        let index = self.index_of(key)?;
        Ok(&self.set.flashcards[index])
    }

    /// The position of a card in the list.
    pub fn index_of(&self, key: CardKey) -> Fallible<usize> {
        self.keys
            .iter()
            .position(|k| *k == key)
            .ok_or_else(|| ErrorReport::new(format!("no flashcard {key} in this set")))
    }

    /// The key of the card at a position.
    pub fn key_at(&self, index: usize) -> Fallible<CardKey> {
        self.keys.get(index).copied().ok_or_else(|| {
            ErrorReport::new(format!(
                "no flashcard at position {}: the set has {} flashcards",
                index + 1,
                self.keys.len()
            ))
        })
    }

    /// Insert a card right after `after`, or at the top for `None`.
    pub fn insert(&mut self, after: Option<CardKey>, card: Flashcard) -> Fallible<CardKey> {
        let index = match after {
            Some(prev) => self.index_of(prev)? + 1,
            None => 0,
        };
        let key = CardKey(self.next_key);
        self.next_key += 1;
        self.set.flashcards.insert(index, card);
        self.keys.insert(index, key);
        Ok(key)
    }

    /// What clicking an insert button does: add a blank card.
    pub fn insert_blank(&mut self, at: Inserter) -> Fallible<CardKey> {
        self.insert(at.after, Flashcard::blank())
    }

    pub fn set_front(&mut self, key: CardKey, front: impl Into<String>) -> Fallible<()> {
        let index = self.index_of(key)?;
        self.set.flashcards[index].set_front(front);
        Ok(())
    }

    pub fn set_back(&mut self, key: CardKey, back: impl Into<String>) -> Fallible<()> {
        let index = self.index_of(key)?;
        self.set.flashcards[index].set_back(back);
        Ok(())
    }

    /// Remove a card, returning it.
    pub fn remove(&mut self, key: CardKey) -> Fallible<Flashcard> {
        let index = self.index_of(key)?;
        self.keys.remove(index);
        Ok(self.set.flashcards.remove(index))
    }

    /// End the session, handing back the edited set.
    pub fn close(self) -> FlashcardSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> SetEditor {
        SetEditor::open(FlashcardSet::new(
            SetId::from_millis(7),
            "Animals",
            vec![
                Flashcard::new("perro", "dog"),
                Flashcard::new("gato", "cat"),
            ],
        ))
    }

    fn fronts(editor: &SetEditor) -> Vec<String> {
        editor
            .cards()
            .map(|(_, card)| card.front().to_string())
            .collect()
    }

    #[test]
    fn test_title_follows_rename() {
        let mut editor = editor();
        assert_eq!(editor.title(), "Editing Flashcard Set: Animals");
        editor.rename("Spanish animals");
        assert_eq!(editor.title(), "Editing Flashcard Set: Spanish animals");
        assert_eq!(editor.close().name, "Spanish animals");
    }

    #[test]
    fn test_inserters_surround_cards() {
        let editor = editor();
        let keys = editor.keys().to_vec();
        assert_eq!(
            editor.inserters(),
            vec![
                Inserter { after: None },
                Inserter {
                    after: Some(keys[0])
                },
                Inserter {
                    after: Some(keys[1])
                },
            ]
        );
    }

    #[test]
    fn test_insert_at_top() -> Fallible<()> {
        let mut editor = editor();
        let top = editor.inserters()[0];
        let key = editor.insert_blank(top)?;
        assert_eq!(editor.index_of(key)?, 0);
        assert_eq!(fronts(&editor), vec!["", "perro", "gato"]);
        Ok(())
    }

    #[test]
    fn test_insert_between_and_at_end() -> Fallible<()> {
        let mut editor = editor();
        let inserters = editor.inserters();
        let middle = editor.insert(inserters[1].after, Flashcard::new("pez", "fish"))?;
        assert_eq!(fronts(&editor), vec!["perro", "pez", "gato"]);
        let last = *editor.inserters().last().unwrap();
        editor.insert(last.after, Flashcard::new("oso", "bear"))?;
        assert_eq!(fronts(&editor), vec!["perro", "pez", "gato", "oso"]);
        assert_eq!(editor.index_of(middle)?, 1);
        Ok(())
    }

    #[test]
    fn test_inserting_into_empty_set() -> Fallible<()> {
        let mut editor = SetEditor::open(FlashcardSet::new(SetId::from_millis(1), "Empty", vec![]));
        assert_eq!(editor.inserters(), vec![Inserter { after: None }]);
        editor.insert_blank(Inserter { after: None })?;
        assert_eq!(editor.close().flashcards, vec![Flashcard::blank()]);
        Ok(())
    }

    #[test]
    fn test_edit_in_place() -> Fallible<()> {
        let mut editor = editor();
        let key = editor.key_at(1)?;
        editor.set_front(key, "gatito")?;
        editor.set_back(key, "kitten")?;
        assert_eq!(editor.get(key)?, &Flashcard::new("gatito", "kitten"));
        assert_eq!(editor.get(editor.key_at(0)?)?.front(), "perro");
        Ok(())
    }

    #[test]
    fn test_remove_by_identity() -> Fallible<()> {
        let mut editor = editor();
        let gato = editor.key_at(1)?;
        editor.insert(None, Flashcard::new("pez", "fish"))?;
        // The card has moved, but its key still finds it.
        let removed = editor.remove(gato)?;
        assert_eq!(removed.front(), "gato");
        assert_eq!(fronts(&editor), vec!["pez", "perro"]);
        assert!(editor.remove(gato).is_err());
        Ok(())
    }

    #[test]
    fn test_keys_are_not_reused() -> Fallible<()> {
        let mut editor = editor();
        let first = editor.key_at(0)?;
        editor.remove(first)?;
        let new = editor.insert(None, Flashcard::blank())?;
        assert_ne!(new, first);
        Ok(())
    }

    #[test]
    fn test_unknown_position() {
        let editor = editor();
        assert_eq!(
            editor.key_at(5),
            Err(ErrorReport::new(
                "no flashcard at position 6: the set has 2 flashcards"
            ))
        );
    }

    #[test]
    fn test_close_keeps_id() -> Fallible<()> {
        let mut editor = editor();
        let key = editor.key_at(0)?;
        editor.remove(key)?;
        let set = editor.close();
        assert_eq!(set.id(), SetId::from_millis(7));
        assert_eq!(set.len(), 1);
        Ok(())
    }
}
