// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::infrastructure::di::service_container::ServiceContainer;
use termcolor::StandardStream;

pub mod args;
pub mod commands;
pub mod completion;
pub mod display;
pub mod error;

pub fn execute_command(
    stderr: StandardStream,
    cli: Cli,
    services: &ServiceContainer,
) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match cli.command {
        Some(Commands::Add {
            title,
            url,
            category,
        }) => commands::add(services, category.as_deref(), &title, &url),
        Some(Commands::Delete { id }) => commands::delete(services, id),
        Some(Commands::List { is_json }) => commands::list(stderr, services, is_json),
        Some(Commands::Open { id }) => commands::open(services, id),
        Some(Commands::RenameCategory { old, new }) => {
            commands::rename_category(services, &old, &new)
        }
        Some(Commands::RenameOther { title }) => commands::rename_other(services, &title),
        Some(Commands::Render { out }) => commands::render(services, out.as_deref()),
        Some(Commands::Import { path, dry_run }) => commands::import(services, &path, dry_run),
        Some(Commands::Completion { shell }) => handle_completion(shell),
        None => Ok(()),
    }
}

fn handle_completion(shell: String) -> CliResult<()> {
    // Write a brief comment to stderr about what's being output
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for linkboard");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(linkboard completion bash)\"                   # one-time use");
            eprintln!("# - linkboard completion bash >> ~/.bashrc                  # add to bashrc");
            eprintln!(
                "# - linkboard completion bash > /etc/bash_completion.d/linkboard # system-wide install"
            );
            eprintln!("#");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for linkboard");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(linkboard completion zsh)\"                    # one-time use");
            eprintln!(
                "# - linkboard completion zsh > ~/.zfunc/_linkboard               # save to fpath directory"
            );
            eprintln!("# - echo 'fpath=(~/.zfunc $fpath)' >> ~/.zshrc         # add dir to fpath if needed");
            eprintln!("# - echo 'autoload -U compinit && compinit' >> ~/.zshrc # load completions");
            eprintln!("#");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for linkboard");
            eprintln!("# To use, run one of:");
            eprintln!("# - linkboard completion fish | source                      # one-time use");
            eprintln!("# - linkboard completion fish > ~/.config/fish/completions/linkboard.fish # permanent install");
            eprintln!("#");
        }
        _ => {}
    }

    // Generate completion script to stdout
    match completion::generate_completion(&shell) {
        Ok(_) => Ok(()),
        Err(e) => Err(error::CliError::CommandFailed(format!(
            "Failed to generate completion script: {}",
            e
        ))),
    }
}
