//! `jobportal` - Government job and blog catalog
//!
//! This library provides read-only access to job postings and blog posts,
//! search and filtering that round-trips through listing query strings, and
//! the page models a front end renders from them.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod pages;
pub mod render;
pub mod route;
pub mod search;
pub mod share;

pub use catalog::{Catalog, InMemoryCatalog};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use pages::{Page, PageContext};
pub use render::{render, OutputFormat};
pub use route::Route;
