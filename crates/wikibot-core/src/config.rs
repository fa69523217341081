//! Profile configuration
//!
//! Wiki endpoints and credentials live in a YAML dotfile in the user's
//! home directory, keyed by wiki name:
//!
//! ```yaml
//! default: mywiki
//! mywiki:
//!   url: https://wiki.example.org/w/
//!   user: bot
//!   password: hunter2
//!   commentsync:
//!     table: software_comments
//! ```
//!
//! The file path is taken from `MEDIAWIKI_RC` or defaults to
//! `~/.mediawikirc`; the wiki is chosen explicitly, via
//! `MEDIAWIKI_WIKI`, or by the `default` key. Keys below a wiki other
//! than `url`/`user`/`password` are realm sections carrying extra
//! settings for individual bot tasks.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::WikiError;
use crate::wiki::Wiki;
use crate::Result;

const RC_ENV: &str = "MEDIAWIKI_RC";
const WIKI_ENV: &str = "MEDIAWIKI_WIKI";

/// One configured wiki: endpoint, optional login, realm sections.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Extra per-realm settings for specific bot tasks
    #[serde(flatten)]
    realms: HashMap<String, serde_yaml::Value>,
}

impl Profile {
    /// The extra settings section for a named realm, if configured.
    pub fn realm(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.realms.get(name)
    }
}

/// The parsed dotfile: named wiki profiles plus the default pointer.
#[derive(Debug, Clone, Default)]
pub struct Dotfile {
    wikis: HashMap<String, Profile>,
    default: Option<String>,
}

impl Dotfile {
    /// Load the dotfile from `MEDIAWIKI_RC` or `~/.mediawikirc`.
    pub fn load() -> Result<Self> {
        let path = std::env::var(RC_ENV).unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_default();
            format!("{home}/.mediawikirc")
        });
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let entries: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(raw)?;
        let mut wikis = HashMap::new();
        let mut default = None;
        for (name, value) in entries {
            if name == "default" {
                default = value.as_str().map(str::to_string);
            } else {
                wikis.insert(name, serde_yaml::from_value(value)?);
            }
        }
        Ok(Self { wikis, default })
    }

    /// Resolve a profile: explicitly named, else `MEDIAWIKI_WIKI`, else
    /// the dotfile's `default` pointer.
    pub fn profile(&self, name: Option<&str>) -> Result<&Profile> {
        let chosen = name
            .map(str::to_string)
            .or_else(|| std::env::var(WIKI_ENV).ok())
            .or_else(|| self.default.clone())
            .ok_or_else(|| WikiError::Config("no wiki selected and no default set".into()))?;
        self.wikis
            .get(&chosen)
            .ok_or_else(|| WikiError::Config(format!("wiki {chosen:?} is not configured")))
    }

    /// Build a `Wiki` from a profile, logging in when credentials are
    /// configured.
    pub fn wiki(&self, name: Option<&str>) -> Result<Wiki> {
        let profile = self.profile(name)?;
        let wiki = Wiki::new(&profile.url)?;
        if let (Some(user), Some(password)) = (&profile.user, &profile.password) {
            wiki.login(user, password)?;
        }
        Ok(wiki)
    }
}
