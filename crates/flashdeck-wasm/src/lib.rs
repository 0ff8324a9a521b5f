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

//! WASM bindings for flashdeck, so an editor plugin written in JavaScript can
//! parse selections and manage flashcard sets.
//!
//! Ids and card keys cross the boundary as plain JavaScript numbers. Sets,
//! cards and listings cross it as JSON strings.

use flashdeck_core::CardKey;
use flashdeck_core::ErrorReport;
use flashdeck_core::Inserter;
use flashdeck_core::Library;
use flashdeck_core::SetEditor;
use flashdeck_core::SetId;
use flashdeck_core::parse_selection;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

mod storage;

use storage::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"flashdeck WASM initialized".into());
}

fn js_error(err: ErrorReport) -> JsValue {
    JsValue::from_str(err.message())
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(e.into()))
}

fn set_id(id: f64) -> SetId {
    SetId::from_millis(id as i64)
}

fn card_key(key: f64) -> CardKey {
    CardKey::from_raw(key as u64)
}

#[derive(Serialize)]
struct SummaryRow {
    id: i64,
    name: String,
    description: String,
}

#[derive(Serialize)]
struct CardRow<'a> {
    key: u64,
    front: &'a str,
    back: &'a str,
}

/// The plugin-side state: the saved sets, and the set being edited, if any.
#[wasm_bindgen]
pub struct FlashdeckApp {
    library: Library<LocalStorageStore>,
    editor: Option<SetEditor>,
}

#[wasm_bindgen]
impl FlashdeckApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            library: Library::new(LocalStorageStore::new()),
            editor: None,
        }
    }

    /// Change the name given to sets created without one.
    #[wasm_bindgen]
    pub fn set_default_name(&mut self, name: &str) {
        self.library.set_default_name(name);
    }

    /// Parse selected text into `[front, back]` pairs, as JSON.
    #[wasm_bindgen]
    pub fn parse_selection(&self, text: &str) -> Result<String, JsValue> {
        to_json(&parse_selection(text))
    }

    /// Create a set from selected text, save it, and open it in the editor.
    /// Returns the editor title.
    #[wasm_bindgen]
    pub fn create_from_selection(
        &mut self,
        selection: &str,
        name: Option<String>,
    ) -> Result<String, JsValue> {
        let id = SetId::from_millis(js_sys::Date::now() as i64);
        let set = self
            .library
            .create_from_selection(id, name.as_deref(), selection)
            .map_err(js_error)?;
        self.open_editor(set.id().as_millis() as f64)
    }

    /// All saved sets as `[{id, name, description}]`.
    #[wasm_bindgen]
    pub fn list_sets(&self) -> Result<String, JsValue> {
        let rows: Vec<SummaryRow> = self
            .library
            .summaries()
            .map_err(js_error)?
            .into_iter()
            .map(|summary| SummaryRow {
                id: summary.id.as_millis(),
                description: summary.description(),
                name: summary.name,
            })
            .collect();
        to_json(&rows)
    }

    /// A saved set in its serialized form.
    #[wasm_bindgen]
    pub fn get_set(&self, id: f64) -> Result<String, JsValue> {
        let set = self.library.get(set_id(id)).map_err(js_error)?;
        to_json(&set)
    }

    /// The body to send when sharing a set.
    #[wasm_bindgen]
    pub fn share_payload(&self, id: f64) -> Result<String, JsValue> {
        let set = self.library.get(set_id(id)).map_err(js_error)?;
        to_json(&set.share_payload())
    }

    #[wasm_bindgen]
    pub fn delete_set(&mut self, id: f64) -> Result<(), JsValue> {
        let id = set_id(id);
        if self.editor.as_ref().is_some_and(|editor| editor.id() == id) {
            // The open editor would otherwise save the set again on close.
            self.editor = None;
        }
        self.library.delete(id).map_err(js_error)
    }

    /// Open a saved set for editing, saving any set that was already open.
    /// Returns the editor title.
    #[wasm_bindgen]
    pub fn open_editor(&mut self, id: f64) -> Result<String, JsValue> {
        self.close_editor()?;
        let editor = self.library.open_editor(set_id(id)).map_err(js_error)?;
        let title = editor.title();
        self.editor = Some(editor);
        Ok(title)
    }

    /// Close the editor, saving the set. Returns the saved set as JSON, or
    /// nothing if no editor was open.
    #[wasm_bindgen]
    pub fn close_editor(&mut self) -> Result<Option<String>, JsValue> {
        let Some(editor) = self.editor.take() else {
            return Ok(None);
        };
        let set = self.library.close_editor(editor).map_err(js_error)?;
        to_json(&set).map(Some)
    }

    #[wasm_bindgen]
    pub fn editor_title(&self) -> Result<String, JsValue> {
        Ok(self.editor()?.title())
    }

    /// The cards being edited, as `[{key, front, back}]`.
    #[wasm_bindgen]
    pub fn editor_cards(&self) -> Result<String, JsValue> {
        let rows: Vec<CardRow> = self
            .editor()?
            .cards()
            .map(|(key, card)| CardRow {
                key: key.as_raw(),
                front: card.front(),
                back: card.back(),
            })
            .collect();
        to_json(&rows)
    }

    /// Rename the set being edited. Returns the new title.
    #[wasm_bindgen]
    pub fn editor_rename(&mut self, name: &str) -> Result<String, JsValue> {
        let editor = self.editor_mut()?;
        editor.rename(name);
        Ok(editor.title())
    }

    /// Insert a blank card after the card with key `after`, or at the top.
    /// Returns the new card's key.
    #[wasm_bindgen]
    pub fn editor_insert_blank(&mut self, after: Option<f64>) -> Result<f64, JsValue> {
        let inserter = Inserter {
            after: after.map(card_key),
        };
        let key = self
            .editor_mut()?
            .insert_blank(inserter)
            .map_err(js_error)?;
        Ok(key.as_raw() as f64)
    }

    #[wasm_bindgen]
    pub fn editor_set_front(&mut self, key: f64, front: &str) -> Result<(), JsValue> {
        self.editor_mut()?
            .set_front(card_key(key), front)
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn editor_set_back(&mut self, key: f64, back: &str) -> Result<(), JsValue> {
        self.editor_mut()?
            .set_back(card_key(key), back)
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn editor_remove(&mut self, key: f64) -> Result<(), JsValue> {
        self.editor_mut()?
            .remove(card_key(key))
            .map(|_| ())
            .map_err(js_error)
    }
}

impl FlashdeckApp {
    fn editor(&self) -> Result<&SetEditor, JsValue> {
        self.editor
            .as_ref()
            .ok_or_else(|| JsValue::from_str("No flashcard set is being edited"))
    }

    fn editor_mut(&mut self) -> Result<&mut SetEditor, JsValue> {
        self.editor
            .as_mut()
            .ok_or_else(|| JsValue::from_str("No flashcard set is being edited"))
    }
}

impl Default for FlashdeckApp {
    fn default() -> Self {
        Self::new()
    }
}
