//! Command-line surface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Key bindings and collection format, shown by `help` and `--help`
pub const GUIDE: &str = r#"KEYBINDINGS:
  ↑/k, ↓/j    Navigate requests
  Enter       Send request
  PgUp/PgDn   Scroll response
  q, Ctrl+C   Quit

COLLECTION FORMAT (YAML):
  requests:
    - name: "Get Users"
      method: GET
      url: "https://api.example.com/users"
      headers:
        Authorization: "Bearer token"

    - name: "Create User"
      method: POST
      url: "https://api.example.com/users"
      headers:
        Content-Type: "application/json"
      body: |
        {
          "name": "John Doe",
          "email": "john@example.com"
        }

EXAMPLES:
  thunder-tui run api-collection.yaml
  thunder-tui help"#;

/// ⚡ Thunder-TUI - a terminal HTTP client for request collections
#[derive(Parser, Debug)]
#[command(name = "thunder-tui", version, disable_help_subcommand = true, after_help = GUIDE)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Open a collection file in the interactive session
    Run {
        /// Path to the collection YAML file
        path: PathBuf,
    },
    /// Print usage, key bindings and the collection format
    Help,
}
