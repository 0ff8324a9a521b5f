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

use std::path::PathBuf;

use flashdeck_core::Fallible;
use flashdeck_core::Library;
use tempfile::tempdir;

use crate::db::SqliteStore;

/// A fresh directory that outlives the test.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

/// A library over an empty database on disk.
pub fn create_tmp_library() -> Fallible<Library<SqliteStore>> {
    let dir = create_tmp_directory()?;
    let store = SqliteStore::open(&dir.join("flashdeck.db"))?;
    Ok(Library::new(store))
}
