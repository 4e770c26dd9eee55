use kv_log_macro as log;

use serde::Deserialize;
use std::{fs, path::Path};
use waymark::{Params, RouteDefinition};

use crate::{
    error::{DemoError, Result},
    page::Page,
};

/// Describes the demo session: which routes exist, where the history
/// starts, and which links get clicked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub origin: String,
    pub log_level: String,
    pub routes: Vec<RouteEntry>,
    /// Hrefs clicked in order
    pub visit: Vec<String>,
    /// How many times to press back afterwards
    pub back: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub title: String,
}

impl RouteEntry {
    fn new(path: &str, title: &str) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            title: title.to_string(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            origin: "http://localhost/".to_string(),
            log_level: "info".to_string(),
            routes: vec![
                RouteEntry::new("/", "Home"),
                RouteEntry::new("/todos", "All todos"),
                RouteEntry::new("/todos/active", "Active todos"),
                RouteEntry::new("/todos/:id", "Todo"),
                RouteEntry::new("/users/:user/todos/:id", "Shared todo"),
            ],
            visit: vec![
                "/todos".to_string(),
                "/todos/active".to_string(),
                "/todos/2".to_string(),
                "http://localhost/users/ann/todos/7?from=email".to_string(),
                "/nowhere".to_string(),
            ],
            back: 2,
        }
    }
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DemoError::ManifestRead {
            path: path.display().to_string(),
            source,
        })?;

        let manifest: Manifest = serde_json::from_str(&contents)?;
        log::info!("Loaded manifest", {
            path: path.display().to_string(),
            routes: manifest.routes.len()
        });

        Ok(manifest)
    }

    pub fn log_level(&self) -> Result<::log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| DemoError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn route_definitions(&self) -> Vec<RouteDefinition<Page>> {
        self.routes
            .iter()
            .map(|entry| {
                let title = entry.title.clone();
                RouteDefinition::new(&entry.path, move |params: &Params| {
                    Some(Page::new(&title, params))
                })
            })
            .collect()
    }
}
