//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Absence of a record is always reported through `Option`, never through an error.

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (any ID it carries is ignored)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`, `String`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    /// Reads all entities in storage order (no ordering is enforced)
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Vec containing all entities (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for checking whether a primary key is present
pub trait Exists<Id> {
    async fn exists(&self, id: &Id) -> Result<bool, sqlx::Error>;
}

/// Trait for insert-or-replace by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the persisted entity
/// * `SaveDTO` - Full representation of the entity; every field overwrites the stored one
/// * `Id` - Type of the primary key, always taken from the caller and never from `SaveDTO`
pub trait Save<Entity, SaveDTO, Id> {
    /// Inserts the entity if the key is absent, otherwise replaces it wholesale
    ///
    /// # Returns
    /// * `Ok(Entity)` - Entity as persisted
    /// * `Err(sqlx::Error)` - Error during writing
    async fn save(&self, id: &Id, data: &SaveDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for partial updates of existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - Patch with optional fields (only `Some(_)` fields are modified)
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Loads the entity, merges the patch into it and persists the result
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Merged and persisted entity
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during update
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database. Deleting a missing key is not an error.
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful (or nothing to delete)
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
