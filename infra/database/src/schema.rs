//! Built-in schema migrations.
//!
//! Each migration is a versioned SurrealQL script applied once per database
//! and recorded in the `migration` table. The registration schema enforces
//! attendee uniqueness with UNIQUE indexes on `email` and `phone`; an index
//! violation on insert is the storage-level source of duplicate rejections.

use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashMap;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

#[derive(Debug)]
pub(crate) struct SchemaMigration {
    pub slice: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

#[derive(Debug, SurrealValue)]
pub(crate) struct AppliedMigration {
    pub slice: String,
    pub version: String,
}

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<AppliedMigration>,
    pub skipped: Vec<AppliedMigration>,
}

const SYSTEM_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS migration SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS slice ON migration TYPE string;
    DEFINE FIELD IF NOT EXISTS version ON migration TYPE string;
    DEFINE FIELD IF NOT EXISTS applied_at ON migration TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS uniq_migration ON migration FIELDS slice, version UNIQUE;
";

const REGISTRATION_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS registration SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS title ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS first_name ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS last_name ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS email ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS phone ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS kingschat ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS zone ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS group_name ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS church ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS attendance_type ON registration TYPE string
        ASSERT $value IN ['physical', 'online'];
    DEFINE FIELD IF NOT EXISTS created_at ON registration TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS uniq_registration_email ON registration FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS uniq_registration_phone ON registration FIELDS phone UNIQUE;
";

const fn builtin_migrations() -> [SchemaMigration; 2] {
    [
        SchemaMigration { slice: "system", version: "0001", script: SYSTEM_SCHEMA },
        SchemaMigration { slice: "registration", version: "0001", script: REGISTRATION_SCHEMA },
    ]
}

#[derive(Debug)]
pub(crate) struct SchemaRunner {
    db: Surreal<Any>,
}

impl SchemaRunner {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        let mut report = MigrationReport::default();
        let applied_migrations = self.get_migrations_map().await?;

        for migration in builtin_migrations() {
            let key = format!("{}:{}", migration.slice, migration.version);
            if applied_migrations.contains_key(&key) {
                report.skipped.push(AppliedMigration {
                    slice: migration.slice.to_owned(),
                    version: migration.version.to_owned(),
                });
                continue;
            }

            self.apply_migration(&migration).await?;
            report.applied.push(AppliedMigration {
                slice: migration.slice.to_owned(),
                version: migration.version.to_owned(),
            });
        }

        Ok(report)
    }

    async fn apply_migration(&self, migration: &SchemaMigration) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration CONTENT {{ slice: $slice, version: $version }};
            COMMIT TRANSACTION;",
            migration.script,
        );

        self.db
            .query(&query)
            .bind(("slice", migration.slice))
            .bind(("version", migration.version))
            .await
            .context(format!("SQL execution failed at {}:{}", migration.slice, migration.version))?
            .check()
            .map_err(|e| DatabaseError::Migration {
                message: e.to_string().into(),
                context: Some(format!("{}:{}", migration.slice, migration.version).into()),
            })?;

        Ok(())
    }

    async fn is_system_ready(&self) -> Result<bool, DatabaseError> {
        let mut response = self
            .db
            .query("!(SELECT VALUE fields FROM ONLY INFO FOR TABLE migration).is_empty()")
            .await
            .context("Checking if system is ready")?;

        let is_ready = response.take::<Option<bool>>(0)?.unwrap_or_default();
        Ok(is_ready)
    }

    async fn get_migrations_map(&self) -> Result<FxHashMap<String, AppliedMigration>, DatabaseError> {
        let is_ready = self.is_system_ready().await?;

        if !is_ready {
            return Ok(FxHashMap::default());
        }

        let entries = self
            .db
            .query("SELECT slice, version FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .context("Parsing migrations map")?;

        Ok(entries
            .into_iter()
            .map(|entry| (format!("{}:{}", entry.slice, entry.version), entry))
            .collect())
    }
}
