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
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use flashdeck_core::Fallible;
use flashdeck_core::Flashcard;
use flashdeck_core::Library;
use flashdeck_core::SetId;

use crate::cmd::create::create_set;
use crate::cmd::create::print_parse;
use crate::cmd::edit::add_card;
use crate::cmd::edit::delete_set;
use crate::cmd::edit::edit_card;
use crate::cmd::edit::remove_card;
use crate::cmd::edit::rename_set;
use crate::cmd::export::export_set;
use crate::cmd::export::import_set;
use crate::cmd::show::list_sets;
use crate::cmd::show::show_set;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::utils::read_selection;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. By default, `flashdeck.toml` in the current directory is used if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the library database. Overrides the config file. Default is `flashdeck.db`.
    #[arg(long, global = true)]
    library: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a flashcard set from `Term: Definition` text.
    Create {
        /// File holding the selected text. By default, the text is read from stdin.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Name of the new set. By default, the configured default name is used.
        #[arg(long)]
        name: Option<String>,
    },
    /// Show how text would be split into flashcards, without saving anything.
    Parse {
        /// File holding the selected text. By default, the text is read from stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List all flashcard sets.
    List,
    /// Print the flashcards in a set.
    Show {
        /// Id of the set.
        id: SetId,
        /// Print the flashcards as `Term: Definition` lines.
        #[arg(long)]
        text: bool,
    },
    /// Rename a set.
    Rename {
        /// Id of the set.
        id: SetId,
        /// The new name.
        name: String,
    },
    /// Add a flashcard to a set.
    Add {
        /// Id of the set.
        id: SetId,
        /// Insert after the flashcard at this position (from 1). By default, the card goes at the top.
        #[arg(long)]
        after: Option<usize>,
        /// Front of the card.
        #[arg(long, default_value = "")]
        front: String,
        /// Back of the card.
        #[arg(long, default_value = "")]
        back: String,
    },
    /// Change the front and/or back of a flashcard.
    Edit {
        /// Id of the set.
        id: SetId,
        /// Position of the flashcard (from 1).
        position: usize,
        /// New front.
        #[arg(long)]
        front: Option<String>,
        /// New back.
        #[arg(long)]
        back: Option<String>,
    },
    /// Remove a flashcard from a set.
    Remove {
        /// Id of the set.
        id: SetId,
        /// Position of the flashcard (from 1).
        position: usize,
    },
    /// Delete a set. This cannot be undone.
    Delete {
        /// Id of the set.
        id: SetId,
    },
    /// Export a set as JSON.
    Export {
        /// Id of the set.
        id: SetId,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Write only the flashcards, as sent when sharing a set.
        #[arg(long)]
        share: bool,
    },
    /// Import a set exported as JSON.
    Import {
        /// Path to the JSON file.
        path: PathBuf,
    },
}

fn open_library(config: &Config, flag: Option<PathBuf>) -> Fallible<Library<SqliteStore>> {
    let store = SqliteStore::open(&config.library_path(flag))?;
    Ok(Library::new(store).with_default_name(config.default_set_name()))
}

pub fn entrypoint() -> Fallible<()> {
    run(Cli::parse(), &mut stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Fallible<()> {
    let Cli {
        config,
        library,
        command,
    } = cli;
    // Only commands that touch the library read the config.
    let open = move || -> Fallible<Library<SqliteStore>> {
        let config = Config::load(config.as_deref())?;
        open_library(&config, library)
    };
    match command {
        Command::Create { file, name } => {
            let mut library = open()?;
            let selection = read_selection(file.as_deref())?;
            create_set(&mut library, SetId::now(), name.as_deref(), &selection, out)
        }
        Command::Parse { file } => {
            let selection = read_selection(file.as_deref())?;
            print_parse(&selection, out)
        }
        Command::List => list_sets(&open()?, out),
        Command::Show { id, text } => show_set(&open()?, id, text, out),
        Command::Rename { id, name } => rename_set(&mut open()?, id, &name, out),
        Command::Add {
            id,
            after,
            front,
            back,
        } => add_card(&mut open()?, id, after, Flashcard::new(front, back), out),
        Command::Edit {
            id,
            position,
            front,
            back,
        } => edit_card(&mut open()?, id, position, front, back, out),
        Command::Remove { id, position } => remove_card(&mut open()?, id, position, out),
        Command::Delete { id } => delete_set(&mut open()?, id, out),
        Command::Export { id, output, share } => {
            export_set(&open()?, id, share, output.as_deref(), out)
        }
        Command::Import { path } => import_set(&mut open()?, &path, out),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::CommandFactory;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_arguments() {
        let cli = Cli::try_parse_from([
            "flashdeck",
            "--library",
            "cards.db",
            "edit",
            "1700000000000",
            "2",
            "--back",
            "Berlin",
        ])
        .unwrap();
        assert_eq!(cli.library, Some(PathBuf::from("cards.db")));
        match cli.command {
            Command::Edit {
                id,
                position,
                front,
                back,
            } => {
                assert_eq!(id, SetId::from_millis(1_700_000_000_000));
                assert_eq!(position, 2);
                assert_eq!(front, None);
                assert_eq!(back.as_deref(), Some("Berlin"));
            }
            _ => panic!("expected the edit command"),
        }
    }

    #[test]
    fn test_parse_skips_config() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let file = dir.join("selection.txt");
        std::fs::write(&file, "perro: dog")?;
        let cli = Cli::try_parse_from([
            OsStr::new("flashdeck"),
            OsStr::new("--config"),
            dir.join("missing.toml").as_os_str(),
            OsStr::new("parse"),
            OsStr::new("--file"),
            file.as_os_str(),
        ])
        .unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        assert!(String::from_utf8(out)?.contains("perro"));
        Ok(())
    }

    #[test]
    fn test_library_commands_read_config() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let missing = dir.join("missing.toml");
        let cli = Cli::try_parse_from([
            OsStr::new("flashdeck"),
            OsStr::new("--config"),
            missing.as_os_str(),
            OsStr::new("list"),
        ])
        .unwrap();
        let mut out = Vec::new();
        let err = run(cli, &mut out).unwrap_err();
        assert_eq!(
            err.message(),
            format!("config file {} does not exist.", missing.display())
        );
        Ok(())
    }

    #[test]
    fn test_bad_id_is_rejected() {
        assert!(Cli::try_parse_from(["flashdeck", "show", "yesterday"]).is_err());
    }
}
