//! Where the audited document comes from.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::dom::parser::{parse_html, HtmlDocument};
use crate::error::{HeadOrderError, Result};
use crate::net::fetch::fetch_url;

/// A page to audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
    Stdin,
}

impl PageSource {
    /// Interpret a command-line argument.
    ///
    /// `-` is standard input, `http://` / `https://` is a URL, an existing
    /// path is a file, and anything else is treated as a bare host.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            PageSource::Stdin
        } else if arg.starts_with("http://") || arg.starts_with("https://") {
            PageSource::Url(arg.to_string())
        } else if Path::new(arg).exists() {
            PageSource::File(PathBuf::from(arg))
        } else {
            PageSource::Url(arg.to_string())
        }
    }

    /// Label used for the document in logs.
    pub fn label(&self) -> String {
        match self {
            PageSource::Url(url) => url.clone(),
            PageSource::File(path) => path.display().to_string(),
            PageSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the source and parse it.
    pub fn load(&self) -> Result<HtmlDocument> {
        let (html, location) = match self {
            PageSource::Url(url) => {
                let fetched = fetch_url(url)?;
                log::debug!(
                    "{} {} ({}, {} bytes)",
                    fetched.status,
                    fetched.url,
                    fetched.content_type,
                    fetched.html.len()
                );
                (fetched.html, fetched.url)
            }
            PageSource::File(path) => {
                let html = std::fs::read_to_string(path).map_err(|source| HeadOrderError::Read {
                    path: path.clone(),
                    source,
                })?;
                (html, self.label())
            }
            PageSource::Stdin => {
                let mut html = String::new();
                std::io::stdin().read_to_string(&mut html)?;
                (html, self.label())
            }
        };

        Ok(parse_html(&html, &location))
    }
}
