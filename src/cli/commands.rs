// src/cli/commands.rs
use crate::application::error::ApplicationError;
use crate::application::services::link_service::DeleteOutcome;
use crate::cli::display::show_grouped;
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::confirmation::StdinConfirmation;
use crate::infrastructure::di::service_container::ServiceContainer;
use crate::infrastructure::json::{write_links_as_json, JsonLinkView};
use crate::util::helper::parent_dir_exists;
use crossterm::style::Stylize;
use std::fs;
use std::path::Path;
use termcolor::StandardStream;
use tracing::instrument;

#[instrument(skip(services))]
pub fn add(
    services: &ServiceContainer,
    category: Option<&str>,
    title: &str,
    url: &str,
) -> CliResult<()> {
    let record = services.link_service.add_link(category, title, url)?;
    eprintln!(
        "{}",
        format!(
            "Added \"{}\" to {} [{}]",
            record.title, record.category, record.id
        )
        .green()
    );
    Ok(())
}

#[instrument(skip(services))]
pub fn delete(services: &ServiceContainer, id: i64) -> CliResult<()> {
    let confirmation = StdinConfirmation::new();

    match services.link_service.delete_link(id, &confirmation)? {
        DeleteOutcome::Deleted(record) => {
            eprintln!(
                "{}",
                format!("Deleted \"{}\" [{}]", record.title, record.id).green()
            );
        }
        DeleteOutcome::Declined(_) => eprintln!("Deletion cancelled"),
        DeleteOutcome::NotFound => {
            eprintln!("{}", format!("Link with ID {} not found", id).yellow());
        }
    }
    Ok(())
}

#[instrument(skip(stderr, services))]
pub fn list(mut stderr: StandardStream, services: &ServiceContainer, is_json: bool) -> CliResult<()> {
    if is_json {
        let records = services.link_service.get_all_links()?;
        let views = JsonLinkView::from_domain_collection(&records);
        write_links_as_json(&views)?;
        return Ok(());
    }

    let groups = services.link_service.grouped_links()?;
    let other_label = services.link_service.other_label()?;
    show_grouped(&mut stderr, &groups, &other_label);
    Ok(())
}

#[instrument(skip(services))]
pub fn open(services: &ServiceContainer, id: i64) -> CliResult<()> {
    let record = services
        .link_service
        .get_link(id)?
        .ok_or(ApplicationError::LinkNotFound(id))?;

    eprintln!("Opening: {} ({})", record.title, record.url);
    open::that(&record.url)
        .map_err(|e| CliError::Io(e).context(format!("Failed to open {}", record.url)))?;
    Ok(())
}

#[instrument(skip(services))]
pub fn rename_category(services: &ServiceContainer, old: &str, new: &str) -> CliResult<()> {
    let renamed = services.link_service.rename_category(old, new)?;

    if renamed == 0 {
        eprintln!(
            "{}",
            format!("No links moved from '{}' to '{}'", old, new).yellow()
        );
    } else {
        eprintln!(
            "{}",
            format!("Moved {} link(s) from '{}' to '{}'", renamed, old, new).green()
        );
    }
    Ok(())
}

#[instrument(skip(services))]
pub fn rename_other(services: &ServiceContainer, title: &str) -> CliResult<()> {
    let label = services.link_service.rename_other_label(title)?;
    eprintln!(
        "{}",
        format!("Catch-all section is now labelled \"{}\"", label).green()
    );
    Ok(())
}

#[instrument(skip(services))]
pub fn render(services: &ServiceContainer, out: Option<&Path>) -> CliResult<()> {
    let groups = services.link_service.grouped_links()?;
    let other_label = services.link_service.other_label()?;
    let html = services.page_renderer.render(&groups, &other_label)?;

    match out {
        None => println!("{}", html),
        Some(path) => {
            if !parent_dir_exists(path) {
                return Err(CliError::CommandFailed(format!(
                    "Cannot write {}: parent directory does not exist",
                    path.display()
                )));
            }
            fs::write(path, &html)
                .map_err(|e| CliError::Io(e).context(format!("Failed to write {}", path.display())))?;
            eprintln!(
                "{}",
                format!("Rendered {} link(s) to {}", groups.link_count(), path.display()).green()
            );
        }
    }
    Ok(())
}

#[instrument(skip(services))]
pub fn import(services: &ServiceContainer, path: &str, dry_run: bool) -> CliResult<()> {
    let count = services.link_service.import_links(path, dry_run)?;

    if dry_run {
        eprintln!("Would import {} link(s) from {}", count, path);
    } else {
        eprintln!(
            "{}",
            format!("Imported {} link(s) from {}", count, path).green()
        );
    }
    Ok(())
}
