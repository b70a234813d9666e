//! Command-line interface for jobportal.
//!
//! This module provides the CLI structure for the `jobportal` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AdminCommand, BlogsCommand, CategoryArg, ConfigCommand, DetailCommand, HomeCommand,
    JobTypeArg, JobsCommand, OpenCommand, StatusArg,
};
pub use crate::render::OutputFormat;

/// jobportal - Browse government jobs and exam guides
///
/// Search and filter the job catalog, read blog posts, and try out the
/// admin forms without changing any data.
#[derive(Debug, Parser)]
#[command(name = "jobportal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the home page
    Home(HomeCommand),

    /// List and filter jobs
    Jobs(JobsCommand),

    /// Show one job
    Job(DetailCommand),

    /// List and filter blog posts
    Blogs(BlogsCommand),

    /// Show one blog post
    Blog(DetailCommand),

    /// Open any site path or URL
    Open(OpenCommand),

    /// Admin dashboard and forms
    #[command(subcommand)]
    Admin(AdminCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn home() -> Command {
        Command::Home(HomeCommand {
            format: OutputFormat::Plain,
        })
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "jobportal");
    }

    #[test]
    fn test_verbosity_levels() {
        let mut cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: home(),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);

        cli.quiet = false;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        cli.verbose = 1;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        cli.verbose = 3;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_jobs_with_filters() {
        let args = vec![
            "jobportal",
            "jobs",
            "--category",
            "banking",
            "-l",
            "Mumbai",
            "-t",
            "permanent",
            "--format",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Jobs(cmd) = cli.command else {
            panic!("expected jobs command");
        };
        assert_eq!(cmd.category, Some(CategoryArg::Banking));
        assert_eq!(cmd.location.as_deref(), Some("Mumbai"));
        assert_eq!(cmd.job_type, Some(JobTypeArg::Permanent));
        assert_eq!(cmd.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_jobs_rejects_unknown_category() {
        let args = vec!["jobportal", "jobs", "--category", "railways"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_job_detail() {
        let args = vec!["jobportal", "job", "7"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Job(cmd) = cli.command else {
            panic!("expected job command");
        };
        assert_eq!(cmd.id, "7");
        assert_eq!(cmd.format, OutputFormat::Plain);
    }

    #[test]
    fn test_parse_blog_by_slug() {
        let args = vec!["jobportal", "blog", "ssc-cgl-2025-examination-guide"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Blog(_)));
    }

    #[test]
    fn test_parse_open() {
        let args = vec!["jobportal", "open", "/blogs?tag=UPSC"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Open(cmd) = cli.command else {
            panic!("expected open command");
        };
        assert_eq!(cmd.target, "/blogs?tag=UPSC");
    }

    #[test]
    fn test_parse_admin_submit() {
        let args = vec!["jobportal", "admin", "submit-job", "form.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin(AdminCommand::SubmitJob { .. })
        ));

        let args = vec!["jobportal", "admin", "blog-form", "--edit", "2"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin(AdminCommand::BlogForm { edit: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["jobportal", "-c", "/custom/config.toml", "home"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(vec!["jobportal", "-vv", "home"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(vec!["jobportal", "-q", "jobs"]).unwrap();
        assert!(cli.quiet);
    }
}
