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

use std::io::Write;

use flashdeck_core::Fallible;
use flashdeck_core::Library;
use flashdeck_core::SetId;
use flashdeck_core::SetStore;
use flashdeck_core::parse_selection;

/// Create a flashcard set from selected text and save it to the library.
pub fn create_set<S: SetStore>(
    library: &mut Library<S>,
    id: SetId,
    name: Option<&str>,
    selection: &str,
    out: &mut impl Write,
) -> Fallible<()> {
    let set = library.create_from_selection(id, name, selection)?;
    writeln!(
        out,
        "Created flashcard set {} ('{}') with {} flashcards.",
        set.id(),
        set.name,
        set.len()
    )?;
    Ok(())
}

/// Print what a selection would parse into, without saving anything.
pub fn print_parse(selection: &str, out: &mut impl Write) -> Fallible<()> {
    let cards = parse_selection(selection);
    let json = serde_json::to_string_pretty(&cards)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_library;

    #[test]
    fn test_create_set() -> Fallible<()> {
        let mut library = create_tmp_library()?;
        let mut out = Vec::new();
        create_set(
            &mut library,
            SetId::from_millis(1000),
            Some("Capitals"),
            "Capital of France: Paris\nCapital of Germany: Berlin\n",
            &mut out,
        )?;
        assert_eq!(
            String::from_utf8(out)?,
            "Created flashcard set 1000 ('Capitals') with 2 flashcards.\n"
        );
        let set = library.get(SetId::from_millis(1000))?;
        assert_eq!(set.flashcards[0].front(), "Capital of France");
        assert_eq!(set.flashcards[1].back(), "Berlin");
        Ok(())
    }

    #[test]
    fn test_create_from_nothing() -> Fallible<()> {
        let mut library = create_tmp_library()?;
        let mut out = Vec::new();
        create_set(&mut library, SetId::from_millis(1), None, "", &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "Created flashcard set 1 ('My Flashcard Set') with 1 flashcards.\n"
        );
        Ok(())
    }

    #[test]
    fn test_print_parse() -> Fallible<()> {
        let mut out = Vec::new();
        print_parse("Only: thing", &mut out)?;
        let cards: Vec<(String, String)> = serde_json::from_slice(&out)?;
        assert_eq!(cards, vec![("Only".to_string(), "thing".to_string())]);
        Ok(())
    }
}
