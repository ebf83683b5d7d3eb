//! Dog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide table lifecycle and CRUD APIs over canonical `dogs` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Rows are materialized by column name, never by position.
//! - Update paths require an assigned id before touching storage.
//! - Mutations run in autocommit mode; every statement is durable on return.

use crate::db::DbError;
use crate::model::dog::{Dog, DogId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DOG_SELECT_SQL: &str = "SELECT
    id,
    name,
    breed
FROM dogs";

const CREATE_DOGS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS dogs (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    breed TEXT NOT NULL
);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for dog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Update was attempted on an instance that was never saved.
    Unsaved,
    NotFound(DogId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unsaved => write!(f, "dog has no id; save it before updating"),
            Self::NotFound(id) => write!(f, "dog not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted dog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unsaved => None,
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for dog table lifecycle and CRUD operations.
pub trait DogRepository {
    /// Ensures the `dogs` table exists. No-op when already present.
    fn create_table(&self) -> RepoResult<()>;
    /// Removes the `dogs` table and every persisted row. No-op when absent.
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts a new row and assigns the generated key onto `dog.id`.
    ///
    /// Calling this twice on the same instance inserts a second row; there
    /// is no dedup check.
    fn save(&self, dog: &mut Dog) -> RepoResult<DogId>;
    /// Constructs and immediately saves a dog, returning the persisted
    /// instance.
    fn create(&self, name: &str, breed: &str) -> RepoResult<Dog>;
    /// Returns the row with the given primary key, or `None`.
    fn find_by_id(&self, id: DogId) -> RepoResult<Option<Dog>>;
    /// Returns the first row matching `name` exactly, or `None`.
    ///
    /// Ordering among duplicate names is storage-defined.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>>;
    /// Returns the row matching both `name` and `breed`, inserting it first
    /// when absent.
    ///
    /// Check-then-act: two callers racing on the same pair can both miss
    /// the lookup and insert duplicate rows. Callers needing uniqueness
    /// must serialize externally.
    fn find_or_create_by(&self, name: &str, breed: &str) -> RepoResult<Dog>;
    /// Overwrites the row identified by `dog.id` with the instance's
    /// current fields.
    fn update(&self, dog: &Dog) -> RepoResult<()>;
    /// Returns every row in storage default order.
    fn get_all(&self) -> RepoResult<Vec<Dog>>;
}

/// SQLite-backed dog repository over an injected connection handle.
pub struct SqliteDogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DogRepository for SqliteDogRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_DOGS_TABLE_SQL)?;
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS dogs;")?;
        Ok(())
    }

    fn save(&self, dog: &mut Dog) -> RepoResult<DogId> {
        self.conn.execute(
            "INSERT INTO dogs (name, breed) VALUES (?1, ?2);",
            params![dog.name.as_str(), dog.breed.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        dog.id = Some(id);
        Ok(id)
    }

    fn create(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        let mut dog = Dog::new(name, breed);
        self.save(&mut dog)?;
        Ok(dog)
    }

    fn find_by_id(&self, id: DogId) -> RepoResult<Option<Dog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOG_SELECT_SQL} WHERE id = ?1 LIMIT 1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dog_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOG_SELECT_SQL} WHERE name = ?1 LIMIT 1;"))?;

        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dog_row(row)?));
        }

        Ok(None)
    }

    fn find_or_create_by(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        let mut stmt = self.conn.prepare(&format!(
            "{DOG_SELECT_SQL} WHERE name = ?1 AND breed = ?2 LIMIT 1;"
        ))?;

        let mut rows = stmt.query(params![name, breed])?;
        if let Some(row) = rows.next()? {
            return Ok(parse_dog_row(row)?);
        }

        self.conn.execute(
            "INSERT INTO dogs (name, breed) VALUES (?1, ?2);",
            params![name, breed],
        )?;

        Ok(Dog::with_id(self.conn.last_insert_rowid(), name, breed))
    }

    fn update(&self, dog: &Dog) -> RepoResult<()> {
        let id = dog.id.ok_or(RepoError::Unsaved)?;

        let changed = self.conn.execute(
            "UPDATE dogs
             SET
                name = ?1,
                breed = ?2
             WHERE id = ?3;",
            params![dog.name.as_str(), dog.breed.as_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Dog>> {
        let mut stmt = self.conn.prepare(&format!("{DOG_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut dogs = Vec::new();

        while let Some(row) = rows.next()? {
            dogs.push(parse_dog_row(row)?);
        }

        Ok(dogs)
    }
}

fn parse_dog_row(row: &Row<'_>) -> RepoResult<Dog> {
    let id = row
        .get::<_, Option<DogId>>("id")?
        .ok_or_else(|| RepoError::InvalidData("missing id value in dogs.id".to_string()))?;

    Ok(Dog {
        id: Some(id),
        name: row.get("name")?,
        breed: row.get("breed")?,
    })
}
