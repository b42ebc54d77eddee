pub mod implementations;
pub mod printing;
pub mod utils;


use std::path::PathBuf;

use cdcat_core::config::LibrarySettings;
use clap::{Args, Subcommand};

pub trait CommandHandler {
    type Output;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &LibrarySettings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output;
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List every disc in the catalogue
    #[clap(alias = "ls")]
    List,
    /// Show how many discs are in the catalogue
    Count,
    /// Find a disc by its album and artist
    Find {
        /// The album title
        album: String,
        /// The artist
        artist: String,
    },
    /// Add a disc to the catalogue (creates the catalogue file if it doesn't exist)
    Insert {
        /// The album title
        album: String,
        /// The artist
        artist: String,
        /// Free-form title, e.g. a featured track
        #[clap(long)]
        title: Option<String>,
        /// Release year
        #[clap(long)]
        year: Option<i32>,
        #[clap(long)]
        genre: Option<String>,
        /// Don't save the catalogue afterwards
        #[clap(long)]
        dry_run: bool,
    },
    /// Remove a disc from the catalogue
    #[clap(alias = "rm")]
    Remove {
        /// The album title
        album: String,
        /// The artist
        artist: String,
        /// Don't save the catalogue afterwards
        #[clap(long)]
        dry_run: bool,
    },
    /// Remove every disc by an artist
    Boycott {
        /// The artist to get rid of
        artist: String,
        /// Don't save the catalogue afterwards
        #[clap(long)]
        dry_run: bool,
    },
    /// Every disc in either catalogue
    Join(CombineArgs),
    /// The discs in both catalogues
    Common(CombineArgs),
    /// The discs in this catalogue that aren't in the other one
    Split(CombineArgs),
}

#[derive(Debug, Args, PartialEq, Eq)]
pub struct CombineArgs {
    /// The other catalogue file
    #[clap(value_hint = clap::ValueHint::FilePath)]
    pub other: PathBuf,
    /// Write the result to this file instead of printing it
    #[clap(long, short, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
