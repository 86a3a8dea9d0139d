use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Test environment holding an in-memory SQLite connection.
///
/// The connection is created lazily on first access and lives as long as the context.
pub struct TestContext {
    /// Connection to the in-memory SQLite database, set once `database()` has run.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context without a database connection.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// The pool holds a single connection since every in-memory connection opens its own
    /// empty database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.max_connections(1).sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the provided CREATE TABLE statements in sequence.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
