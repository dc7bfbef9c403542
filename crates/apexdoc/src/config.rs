use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::Mode;
use crate::error::{ApexDocError, Result};
use crate::resolver::{ResolverSettings, DEFAULT_BASE_URL, DEFAULT_REFERENCE_ROOT_ID};

/// apexdoc configuration, stored as TOML in the user's config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table-of-contents JSON file
    pub toc_path: PathBuf,

    /// Prefix joined with each node's relative link
    pub base_url: String,

    /// Id of the entry holding the namespaces
    pub reference_root_id: String,

    /// Browser application; the platform default handler when unset
    pub browser: Option<String>,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toc_path: PathBuf::from("apexdoc.json"),
            base_url: DEFAULT_BASE_URL.to_string(),
            reference_root_id: DEFAULT_REFERENCE_ROOT_ID.to_string(),
            browser: None,
            log_level: "warn".to_string(),
        }
    }
}

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "apexdoc", version)]
#[command(about = "Open Apex reference documentation for a namespace, class or method")]
#[command(group(ArgGroup::new("mode").args(["show_methods", "show_url"])))]
pub struct Cli {
    /// Dotted path: Class, Class.member, Namespace.Class or Namespace.Class.member
    pub path: String,

    /// Print the methods and properties of the class instead of opening it
    #[arg(short = 'm', long)]
    pub show_methods: bool,

    /// Print the documentation URL instead of opening it
    #[arg(short = 'u', long)]
    pub show_url: bool,

    /// Configuration file path
    #[arg(short, long, env = "APEXDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Table-of-contents JSON file
    #[arg(long, env = "APEXDOC_TOC")]
    pub toc: Option<PathBuf>,

    /// Documentation base URL
    #[arg(long, env = "APEXDOC_BASE_URL")]
    pub base_url: Option<String>,

    /// Id of the reference root entry
    #[arg(long, env = "APEXDOC_REFERENCE_ROOT")]
    pub reference_root: Option<String>,

    /// Browser application to open pages with
    #[arg(long, env = "APEXDOC_BROWSER")]
    pub browser: Option<String>,

    /// Log level
    #[arg(long, env = "APEXDOC_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.show_methods {
            Mode::ListMethods
        } else if self.show_url {
            Mode::ShowUrl
        } else {
            Mode::Open
        }
    }
}

impl Config {
    /// Defaults, then the config file, then CLI arguments and environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::load(&path)?,
                None => Self::default(),
            },
        };

        if let Some(toc) = &cli.toc {
            config.toc_path = toc.clone();
        }
        if let Some(base_url) = &cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(reference_root) = &cli.reference_root {
            config.reference_root_id = reference_root.clone();
        }
        if let Some(browser) = &cli.browser {
            config.browser = Some(browser.clone());
        }
        if let Some(log_level) = &cli.log_level {
            config.log_level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ApexDocError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| ApexDocError::Config(format!("{}: {e}", path.display())))
    }

    /// `config.toml` in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "apexdoc", "apexdoc")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    fn validate(&mut self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApexDocError::Config("base_url must not be empty".into()));
        }
        if self.reference_root_id.trim().is_empty() {
            return Err(ApexDocError::Config("reference_root_id must not be empty".into()));
        }
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
        Ok(())
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            base_url: self.base_url.clone(),
            reference_root_id: self.reference_root_id.clone(),
        }
    }
}
