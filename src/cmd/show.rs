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

/// List every set in the library, oldest first.
pub fn list_sets<S: SetStore>(library: &Library<S>, out: &mut impl Write) -> Fallible<()> {
    let summaries = library.summaries()?;
    if summaries.is_empty() {
        writeln!(out, "No flashcard sets.")?;
        return Ok(());
    }
    for summary in summaries {
        writeln!(out, "{}  {}", summary.id, summary.name)?;
        writeln!(out, "    {}", summary.description())?;
    }
    Ok(())
}

/// Print a set's cards, numbered from 1. Multi-line backs are indented
/// under their front. With `text`, the cards are printed as `Term: Definition`
/// lines instead, ready to be parsed again.
pub fn show_set<S: SetStore>(
    library: &Library<S>,
    id: SetId,
    text: bool,
    out: &mut impl Write,
) -> Fallible<()> {
    let set = library.get(id)?;
    if text {
        writeln!(out, "{}", set.to_selection_text())?;
        return Ok(());
    }
    writeln!(out, "{} ({})", set.name, set.id())?;
    for (index, card) in set.flashcards.iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, card.front())?;
        for line in card.back().lines() {
            writeln!(out, "     {line}")?;
        }
    }
    Ok(())
}
