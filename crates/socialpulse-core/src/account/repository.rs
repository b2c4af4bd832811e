//! Account storage repository.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, warn};

use super::hashing::{BcryptHasher, HashingStrategy};
use super::model::{Account, AccountId};
use crate::{Error, Result};

/// Repository for account storage and credential verification.
pub struct AccountRepository {
    pool: SqlitePool,
    hasher: Box<dyn HashingStrategy>,
}

impl AccountRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self {
            pool,
            hasher: Box::new(BcryptHasher::interactive()),
        };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self {
            pool,
            hasher: Box::new(BcryptHasher::interactive()),
        };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Swap the password hashing strategy.
    ///
    /// Digests written under a previous strategy keep verifying as long as
    /// the new strategy understands their format.
    #[must_use]
    pub fn with_hasher(mut self, hasher: Box<dyn HashingStrategy>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Initialize database schema.
    ///
    /// Idempotent; safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                email TEXT,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Register a new account with a salted password digest.
    ///
    /// No shape validation happens here; the session gate has already
    /// rejected malformed input. The insert is a single statement, so
    /// either the full account row is written or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateUsername`] if the username is taken, or a
    /// database/hashing error on infrastructure failure.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> Result<Account> {
        let digest = self.hasher.hash(password)?;
        let created_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (username, password, email, created_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(username)
        .bind(&digest)
        .bind(email)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                let id = AccountId::new(done.last_insert_rowid());
                debug!("registered account {id} for username {username}");
                Ok(Account {
                    id,
                    username: username.to_string(),
                    email: email.to_string(),
                    created_at,
                })
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                debug!("registration rejected, username {username} already exists");
                Err(Error::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username/password pair against the stored digest.
    ///
    /// Returns `Ok(false)` both for an unknown username and for a wrong
    /// password; the unknown-username path burns an equivalent amount of
    /// hashing work so the two are comparable in timing as well as in
    /// response.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure, never on a failed
    /// credential check.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let row = sqlx::query("SELECT password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let digest: String = row.get("password");
                Ok(self.hasher.verify(password, &digest))
            }
            None => {
                self.hasher.burn(password);
                Ok(false)
            }
        }
    }

    /// Enumerate all accounts.
    ///
    /// Administrative use only; password digests are never selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query(
            r"
            SELECT id, username, email, created_at
            FROM users
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let accounts = rows
            .iter()
            .filter_map(|row| {
                let created_at_str: String = row.get("created_at");
                let created_at = DateTime::parse_from_rfc3339(&created_at_str)
                    .inspect_err(|e| warn!("unparseable created_at for account row: {e}"))
                    .ok()?
                    .with_timezone(&Utc);

                Some(Account {
                    id: AccountId::new(row.get("id")),
                    username: row.get("username"),
                    email: row.get("email"),
                    created_at,
                })
            })
            .collect();

        Ok(accounts)
    }
}
