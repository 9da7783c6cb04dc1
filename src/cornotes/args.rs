use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cornotes")]
#[command(version)]
#[command(about = "Cornell-method note-taking for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, most recently modified first
    #[command(alias = "ls")]
    List,

    /// Export a note as Markdown
    #[command(alias = "x")]
    Export {
        /// Display index of the note (as shown by `list`)
        index: usize,

        /// Directory to write the .md file into (default: current dir)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show or set the theme preference
    Theme {
        /// "light" or "dark" (omit to show the current theme)
        value: Option<String>,
    },
}
