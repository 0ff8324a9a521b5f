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

//! Commands that change a set. Each one opens an editor on the set, applies
//! a single change, and saves the result when the editor closes.

use std::io::Write;

use flashdeck_core::Fallible;
use flashdeck_core::Flashcard;
use flashdeck_core::Library;
use flashdeck_core::SetEditor;
use flashdeck_core::SetId;
use flashdeck_core::SetStore;
use flashdeck_core::fail;

fn with_editor<S: SetStore, T>(
    library: &mut Library<S>,
    id: SetId,
    change: impl FnOnce(&mut SetEditor) -> Fallible<T>,
) -> Fallible<T> {
    let mut editor = library.open_editor(id)?;
    let result = change(&mut editor)?;
    library.close_editor(editor)?;
    Ok(result)
}

/// Cards are numbered from 1 on the command line.
fn to_index(position: usize) -> Fallible<usize> {
    match position.checked_sub(1) {
        Some(index) => Ok(index),
        None => fail("flashcard positions start at 1."),
    }
}

pub fn rename_set<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    name: &str,
    out: &mut impl Write,
) -> Fallible<()> {
    let title = with_editor(library, id, |editor| {
        editor.rename(name);
        Ok(editor.title())
    })?;
    writeln!(out, "{title}")?;
    Ok(())
}

/// Insert a card after the card at `after`, or at the top when `after` is
/// `None` or 0.
pub fn add_card<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    after: Option<usize>,
    card: Flashcard,
    out: &mut impl Write,
) -> Fallible<()> {
    let position = with_editor(library, id, |editor| {
        let prev = match after {
            None | Some(0) => None,
            Some(position) => Some(editor.key_at(position - 1)?),
        };
        let key = editor.insert(prev, card)?;
        editor.index_of(key)
    })?;
    writeln!(out, "Added flashcard {} to set {id}.", position + 1)?;
    Ok(())
}

pub fn edit_card<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    position: usize,
    front: Option<String>,
    back: Option<String>,
    out: &mut impl Write,
) -> Fallible<()> {
    if front.is_none() && back.is_none() {
        return fail("nothing to change: pass --front and/or --back.");
    }
    let index = to_index(position)?;
    with_editor(library, id, |editor| {
        let key = editor.key_at(index)?;
        if let Some(front) = front {
            editor.set_front(key, front)?;
        }
        if let Some(back) = back {
            editor.set_back(key, back)?;
        }
        Ok(())
    })?;
    writeln!(out, "Updated flashcard {position} in set {id}.")?;
    Ok(())
}

pub fn remove_card<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    position: usize,
    out: &mut impl Write,
) -> Fallible<()> {
    let index = to_index(position)?;
    let removed = with_editor(library, id, |editor| {
        let key = editor.key_at(index)?;
        editor.remove(key)
    })?;
    writeln!(
        out,
        "Removed flashcard {position} ('{}') from set {id}.",
        removed.front()
    )?;
    Ok(())
}

pub fn delete_set<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    out: &mut impl Write,
) -> Fallible<()> {
    let set = library.get(id)?;
    library.delete(id)?;
    writeln!(out, "Deleted flashcard set {id} ('{}').", set.name)?;
    Ok(())
}
