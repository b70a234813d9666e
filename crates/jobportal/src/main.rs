//! `jobportal` - CLI for the government job and blog catalog
//!
//! This binary renders site pages to the terminal and runs the simulated
//! admin workflow against the bundled (or configured) catalog.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use serde::Serialize;

use jobportal::cli::{AdminCommand, Cli, Command, ConfigCommand, OutputFormat};
use jobportal::pages::{delete_blog, delete_job, BlogForm, JobForm, Submission};
use jobportal::{init_logging, render, Config, InMemoryCatalog, Page, PageContext, Route};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Config commands must work even when the config itself is broken
    if let Command::Config(config_cmd) = cli.command {
        return handle_config(cli.config, config_cmd);
    }

    let config = Config::load_from(cli.config.clone())?;
    let catalog = InMemoryCatalog::from_config(&config.data)?;
    let ctx = PageContext::new(&catalog, &config, Local::now().date_naive());

    match cli.command {
        Command::Home(cmd) => show(&ctx, &Route::Home, cmd.format),
        Command::Jobs(cmd) => show(&ctx, &Route::Jobs(cmd.filter()?), cmd.format),
        Command::Job(cmd) => show(&ctx, &Route::JobDetail(cmd.id), cmd.format),
        Command::Blogs(cmd) => show(&ctx, &Route::Blogs(cmd.filter()), cmd.format),
        Command::Blog(cmd) => show(&ctx, &Route::BlogDetail(cmd.id), cmd.format),
        Command::Open(cmd) => show(&ctx, &Route::parse(&cmd.target)?, cmd.format),
        Command::Admin(admin_cmd) => handle_admin(&ctx, admin_cmd),
        Command::Config(_) => unreachable!("config commands are handled before loading"),
    }
}

/// Render a route to stdout. Not-found views exit with status 2.
fn show(ctx: &PageContext<'_>, route: &Route, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let page = Page::for_route(ctx, route)?;
    print!("{}", render(&page, format)?);
    if page.is_not_found() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_admin(ctx: &PageContext<'_>, cmd: AdminCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        AdminCommand::List { format } => return show(ctx, &Route::Admin, format),
        AdminCommand::JobForm { edit } => {
            let form = match edit {
                Some(id) => JobForm::edit(&ctx.catalog.require_job(&id)?),
                None => JobForm::new(ctx.today),
            };
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        AdminCommand::BlogForm { edit } => {
            let form = match edit {
                Some(id) => BlogForm::edit(&ctx.catalog.require_blog(&id)?),
                None => BlogForm::new(),
            };
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        AdminCommand::SubmitJob { file, format } => {
            let form: JobForm = read_form(&file)?;
            let submission = form.submit(ctx)?;
            print_submission(&submission, format, |job| {
                format!("Job {}: {}", job.id, job.title)
            })?;
        }
        AdminCommand::SubmitBlog { file, format } => {
            let form: BlogForm = read_form(&file)?;
            let submission = form.submit(ctx)?;
            print_submission(&submission, format, |blog| {
                format!("Blog post {} ({}): {}", blog.id, blog.slug, blog.title)
            })?;
        }
        AdminCommand::DeleteJob { id } => println!("{}", delete_job(ctx.catalog, &id)?),
        AdminCommand::DeleteBlog { id } => println!("{}", delete_blog(ctx.catalog, &id)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn read_form<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse form {}", path.display()))
}

fn print_submission<T: Serialize>(
    submission: &Submission<T>,
    format: OutputFormat,
    summary: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(submission)?),
        OutputFormat::Plain | OutputFormat::Table => {
            println!("{}", submission.message);
            println!("{}", summary(&submission.record));
            println!("(The catalog was not changed.)");
        }
    }
    Ok(())
}

fn handle_config(path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Name:                  {}", config.site.name);
                println!("  Base URL:              {}", config.site.base_url);
                println!();
                println!("[Listing]");
                println!("  Featured jobs:         {}", config.listing.featured_jobs);
                println!("  Recent blogs:          {}", config.listing.recent_blogs);
                println!("  Related limit:         {}", config.listing.related_limit);
                println!(
                    "  Qualification preview: {}",
                    config.listing.qualification_preview
                );
                println!("  Tag preview:           {}", config.listing.tag_preview);
                println!();
                println!("[Data]");
                println!(
                    "  Jobs:                  {}",
                    data_source(config.data.jobs_path.as_deref())
                );
                println!(
                    "  Blogs:                 {}",
                    data_source(config.data.blogs_path.as_deref())
                );
            }
        }
        ConfigCommand::Path => {
            let path = path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.or(path).unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn data_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "(bundled)".to_string(), |p| p.display().to_string())
}
