//! Core Modelmap functionality
//!
//! This module contains the main ModelMap struct and its implementation,
//! coordinating the connection string, the registry of named entity maps,
//! and the construction of data accessors.

use std::collections::HashMap;

use config::DatabaseConfig;
use data_access::DataAccess;
use pg_driver::PgDriver;
use row_mapping::NameMap;

use crate::errors::ModelMapError;

/// Main coordinator that holds the connection string and the registry of
/// named, swappable entity maps.
pub struct ModelMap {
    connection_string: String,
    maps: HashMap<String, NameMap>,
}

impl ModelMap {
    /// Create a new coordinator from database configuration
    pub fn new(config: DatabaseConfig) -> Self {
        Self::from_connection_string(config.connection_string())
    }

    /// Create a new coordinator from a raw connection string.
    ///
    /// The string is opaque to modelmap; it is forwarded to the driver
    /// unmodified on every session open.
    pub fn from_connection_string(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            maps: HashMap::new(),
        }
    }

    /// Connection string handed to each accessor
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Register an entity map under a given name
    pub fn register_map(&mut self, name: String, map: NameMap) -> Result<(), ModelMapError> {
        if self.maps.contains_key(&name) {
            return Err(ModelMapError::MapAlreadyRegistered(name));
        }

        self.maps.insert(name, map);
        Ok(())
    }

    /// Get a registered entity map by name
    pub fn map(&self, name: &str) -> Result<&NameMap, ModelMapError> {
        self.maps
            .get(name)
            .ok_or_else(|| ModelMapError::MapNotFound(name.to_string()))
    }

    /// Swap the entity map registered under `name`, returning the previous
    /// one if there was any.
    pub fn replace_map(&mut self, name: String, map: NameMap) -> Option<NameMap> {
        self.maps.insert(name, map)
    }

    /// List all registered map names
    pub fn list_maps(&self) -> Vec<&String> {
        self.maps.keys().collect()
    }

    /// Remove an entity map by name
    pub fn unregister_map(&mut self, name: &str) -> Result<NameMap, ModelMapError> {
        self.maps
            .remove(name)
            .ok_or_else(|| ModelMapError::MapNotFound(name.to_string()))
    }

    /// Build a data accessor bound to the configured connection string.
    ///
    /// Each accessor owns its own session and status code; hand one to each
    /// logical unit of work instead of sharing.
    pub fn access(&self) -> DataAccess<PgDriver> {
        DataAccess::new(PgDriver::new(), self.connection_string.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), ModelMapError> {
        let mut access = self.access();
        access.count("SELECT 1").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> NameMap {
        NameMap::parse(["Name : name"]).unwrap()
    }

    #[test]
    fn test_map_registry_round_trip() {
        let mut modelmap = ModelMap::from_connection_string("postgresql://localhost/db");

        modelmap.register_map("users".to_string(), sample_map()).unwrap();
        assert_eq!(modelmap.map("users").unwrap().len(), 1);
        assert_eq!(modelmap.list_maps(), vec!["users"]);

        let removed = modelmap.unregister_map("users").unwrap();
        assert_eq!(removed.len(), 1);
        assert!(matches!(
            modelmap.map("users"),
            Err(ModelMapError::MapNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut modelmap = ModelMap::from_connection_string("postgresql://localhost/db");

        modelmap.register_map("users".to_string(), sample_map()).unwrap();
        assert!(matches!(
            modelmap.register_map("users".to_string(), sample_map()),
            Err(ModelMapError::MapAlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_replace_map_swaps_in_place() {
        let mut modelmap = ModelMap::from_connection_string("postgresql://localhost/db");

        assert!(modelmap.replace_map("users".to_string(), sample_map()).is_none());

        let wider = NameMap::parse(["Name : name", "Email : email"]).unwrap();
        let previous = modelmap.replace_map("users".to_string(), wider).unwrap();
        assert_eq!(previous.len(), 1);
        assert_eq!(modelmap.map("users").unwrap().len(), 2);
    }
}
