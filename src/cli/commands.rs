//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "domset")]
#[command(about = "Flatten tagged domain rule files into plain-text domain sets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every rule file and write the flattened domain sets
    Build {
        /// Directory holding the rule files
        source_dir: PathBuf,

        /// Directory to write the flattened outputs to
        release_dir: PathBuf,

        /// Minimum entry count a file needs before any output is written
        #[arg(long, env = "MIN_LINES", default_value = "1")]
        min_lines: String,

        /// Tag policy configuration file
        #[arg(long, env = "TAG_POLICY_FILE", default_value = "config/tag_policies.json")]
        tag_policy: PathBuf,
    },

    /// Apply pre-build customization rules to the source tree
    Customize {
        /// Directory holding the rule files
        source_dir: PathBuf,

        /// Customization configuration file
        #[arg(long, env = "CUSTOMIZATION_FILE", default_value = "config/customizations.json")]
        config: PathBuf,
    },

    /// Generate the fileList.js listing for the release directory
    Filelist {
        /// Directory holding the flattened outputs
        release_dir: PathBuf,

        /// Directory to write the listing to
        output_dir: PathBuf,

        /// GitHub repository name (owner/repo) embedded in the listing
        #[arg(long, default_value = "unknown/repo")]
        repo_name: String,

        /// index.html template to copy next to the listing
        #[arg(long)]
        index: Option<PathBuf>,
    },
}
