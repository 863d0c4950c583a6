//! Framework registry - the fixed, ordered list of showcased frameworks
//!
//! Each framework becomes one gallery card. The registry is loaded once at
//! startup and never mutated; the framework name is its identity key and is
//! matched case-insensitively everywhere (routes, lookups, duplicates).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("Framework registry is empty")]
    Empty,
    #[error("Framework at position {0} has an empty name")]
    EmptyName(usize),
    #[error("Framework name {0:?} contains a '/' and cannot be routed")]
    UnroutableName(String),
    #[error("Duplicate framework name: {0}")]
    DuplicateName(String),
}

/// A single showcased framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    /// Display name and identity key (e.g., "React")
    pub name: String,
    /// Logo image path, relative to the asset root
    pub logo_url: String,
    /// Text shown in the detail panel
    #[serde(default)]
    pub description: String,
    /// Card base color as linear RGB (0.0-1.0)
    #[serde(default = "default_accent")]
    pub accent: [f32; 3],
}

fn default_accent() -> [f32; 3] {
    [0.8, 0.8, 0.85]
}

impl Framework {
    /// Check whether `name` identifies this framework (case-insensitive,
    /// folded the same way as [`Framework::route_key`])
    pub fn matches(&self, name: &str) -> bool {
        self.route_key() == name.to_lowercase()
    }

    /// Lowercase key used when writing routes
    pub fn route_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Validated, ordered framework list
#[derive(Debug, Clone)]
pub struct FrameworkRegistry {
    frameworks: Vec<Framework>,
}

impl FrameworkRegistry {
    /// Build a registry, rejecting empty lists, blank or unroutable names
    /// and names that collide case-insensitively
    pub fn new(frameworks: Vec<Framework>) -> Result<Self, RegistryError> {
        if frameworks.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, framework) in frameworks.iter().enumerate() {
            let name = framework.name.trim();
            if name.is_empty() {
                return Err(RegistryError::EmptyName(i));
            }
            if name.contains('/') {
                return Err(RegistryError::UnroutableName(framework.name.clone()));
            }
            if frameworks[..i].iter().any(|earlier| earlier.matches(name)) {
                return Err(RegistryError::DuplicateName(framework.name.clone()));
            }
        }

        Ok(Self { frameworks })
    }

    /// Look up a framework by name (case-insensitive), returning its index
    pub fn find(&self, name: &str) -> Option<(usize, &Framework)> {
        let name = name.trim();
        self.frameworks
            .iter()
            .enumerate()
            .find(|(_, framework)| framework.matches(name))
    }

    pub fn get(&self, index: usize) -> Option<&Framework> {
        self.frameworks.get(index)
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Framework> {
        self.frameworks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framework(name: &str) -> Framework {
        Framework {
            name: name.to_string(),
            logo_url: format!("logos/{}.png", name.to_lowercase()),
            description: format!("{} description", name),
            accent: default_accent(),
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = FrameworkRegistry::new(vec![
            framework("React"),
            framework("Angular"),
            framework("Vue"),
        ])
        .unwrap();

        let (index, found) = registry.find("vue").unwrap();
        assert_eq!(index, 2);
        assert_eq!(found.name, "Vue");

        assert_eq!(registry.find("REACT").unwrap().0, 0);
        assert_eq!(registry.find("  Angular ").unwrap().0, 1);
        assert!(registry.find("svelte").is_none());
    }

    #[test]
    fn test_rejects_invalid_lists() {
        assert_eq!(FrameworkRegistry::new(Vec::new()).unwrap_err(), RegistryError::Empty);

        let err = FrameworkRegistry::new(vec![framework("React"), framework("  ")]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName(1));

        let err = FrameworkRegistry::new(vec![framework("React"), framework("react")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("react".to_string()));

        let err = FrameworkRegistry::new(vec![framework("a/b")]).unwrap_err();
        assert!(matches!(err, RegistryError::UnroutableName(_)));
    }

    #[test]
    fn test_route_key() {
        assert_eq!(framework("SolidJS").route_key(), "solidjs");
    }

    #[test]
    fn test_non_ascii_names_match_their_route_key() {
        let registry = FrameworkRegistry::new(vec![framework("Élan"), framework("Next JS")]).unwrap();
        let elan = registry.get(0).unwrap();
        assert_eq!(elan.route_key(), "élan");
        assert_eq!(registry.find(&elan.route_key()).unwrap().0, 0);
        assert_eq!(registry.find("ÉLAN").unwrap().0, 0);
        assert_eq!(registry.find("next js").unwrap().0, 1);

        let err = FrameworkRegistry::new(vec![framework("Élan"), framework("élan")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("élan".to_string()));
    }
}
