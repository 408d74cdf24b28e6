//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name the completion scripts are registered for.
const BIN_NAME: &str = "sudomap";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   sudomap completions bash > ~/.local/share/bash-completion/completions/sudomap"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(sudomap completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   sudomap completions zsh > ~/.zsh/completions/_sudomap");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(sudomap completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!(
                    "#   sudomap completions fish > ~/.config/fish/completions/sudomap.fish"
                );
                eprintln!("# Or add to config.fish:");
                eprintln!("#   sudomap completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   sudomap completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   sudomap completions powershell | Out-String | Invoke-Expression");
            }
            Shell::Elvish => {
                // Elvish included by default in clap_complete but no custom instructions needed
            }
            _ => {
                // Future shells added to clap_complete
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
