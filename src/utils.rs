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

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::io::stdin;
use std::path::Path;

use flashdeck_core::Fallible;

/// Read the text to turn into flashcards, from a file or from stdin.
pub fn read_selection(file: Option<&Path>) -> Fallible<String> {
    match file {
        Some(path) => read_selection_from(File::open(path)?),
        None => read_selection_from(stdin().lock()),
    }
}

/// Editors hand over selections with `\n` line endings, so Windows line
/// endings are normalized before parsing.
pub fn read_selection_from(mut reader: impl Read) -> Fallible<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(text.replace("\r\n", "\n"))
}

/// Write `contents` to the given file, or to `out` when there is none.
pub fn write_output(output: Option<&Path>, contents: &str, out: &mut impl Write) -> Fallible<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{contents}")?;
        }
        None => writeln!(out, "{contents}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_crlf_is_normalized() -> Fallible<()> {
        let text = read_selection_from("perro: dog\r\ngato: cat\r\n".as_bytes())?;
        assert_eq!(text, "perro: dog\ngato: cat\n");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let result = read_selection_from(&[0xff, 0xfe][..]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_output_to_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("out.json");
        let mut out = Vec::new();
        write_output(Some(&path), "{}", &mut out)?;
        assert!(out.is_empty());
        assert_eq!(read_to_string(&path)?, "{}\n");
        Ok(())
    }
}
