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

use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;

use flashdeck_core::ErrorReport;
use flashdeck_core::Fallible;
use flashdeck_core::FlashcardSet;
use flashdeck_core::Library;
use flashdeck_core::SetId;
use flashdeck_core::SetStore;

use crate::utils::write_output;

/// Export a set as JSON. With `share`, only the cards are written, in the
/// shape used when sharing a set with others.
pub fn export_set<S: SetStore>(
    library: &Library<S>,
    id: SetId,
    share: bool,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Fallible<()> {
    let set = library.get(id)?;
    let json = if share {
        serde_json::to_string_pretty(&set.share_payload())?
    } else {
        serde_json::to_string_pretty(&set)?
    };
    write_output(output, &json, out)
}

/// Add a set from a JSON file written by `export`. The set keeps its id.
pub fn import_set<S: SetStore>(
    library: &mut Library<S>,
    path: &Path,
    out: &mut impl Write,
) -> Fallible<()> {
    let text = read_to_string(path)?;
    let set: FlashcardSet = serde_json::from_str(&text).map_err(|e| {
        ErrorReport::new(format!(
            "{} is not a serialized flashcard set: {e}",
            path.display()
        ))
    })?;
    library.create(&set)?;
    writeln!(
        out,
        "Imported flashcard set {} ('{}') with {} flashcards.",
        set.id(),
        set.name,
        set.len()
    )?;
    Ok(())
}
