use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::model::{NewRegistration, Registration};
use rhub_database::Database;
use rhub_domain::constants::REGISTRATION_TABLE;
use rhub_kernel::safe_nanoid;
use tracing::instrument;

/// Message surfaced to a caller whose email or phone is already registered.
pub const DUPLICATE_MESSAGE: &str =
    "You have already registered with this email or phone number.";

const LIST_FIELDS: &str = "id.id() AS id, title, first_name, last_name, email, phone, \
     kingschat, zone, group_name, church, attendance_type, created_at";

/// Store access for attendee registrations.
///
/// Uniqueness of email and phone is enforced by the UNIQUE indexes the schema
/// migration defines; an index violation during insert is the only source of
/// [`RegistrationError::Conflict`]. There is no query-then-insert pre-check,
/// so concurrent duplicate submissions cannot both succeed.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    db: Database,
}

impl RegistrationRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a normalized registration under a freshly minted id.
    ///
    /// # Errors
    /// * [`RegistrationError::Conflict`] if the email or phone is taken.
    /// * [`RegistrationError::Surreal`] for any other store failure.
    #[instrument(skip_all, fields(email = %record.email))]
    pub async fn create(&self, record: NewRegistration) -> Result<Registration, RegistrationError> {
        let id = safe_nanoid!();

        let response = self
            .db
            .query("CREATE ONLY type::record($tb, $id) CONTENT $data")
            .bind(("tb", REGISTRATION_TABLE))
            .bind(("id", id.clone()))
            .bind(("data", record.clone()))
            .await
            .context("Submitting registration insert")?;

        if let Err(e) = response.check() {
            if is_unique_index_violation(&e) {
                return Err(RegistrationError::Conflict {
                    message: DUPLICATE_MESSAGE.into(),
                    context: None,
                });
            }
            return Err(e.into());
        }

        Ok(Registration::from_parts(id, record))
    }

    /// Returns every registration, newest first.
    pub async fn list(&self) -> Result<Vec<Registration>, RegistrationError> {
        let query =
            format!("SELECT {LIST_FIELDS} FROM type::table($tb) ORDER BY created_at DESC");

        let registrations = self
            .db
            .query(query)
            .bind(("tb", REGISTRATION_TABLE))
            .await
            .context("Listing registrations")?
            .take::<Vec<Registration>>(0)
            .context("Parsing registration list")?;

        Ok(registrations)
    }

    /// Removes the registration with the given id.
    ///
    /// Returns `false` if no such record exists, leaving the store unchanged.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, RegistrationError> {
        let existing = self
            .db
            .query("SELECT VALUE id.id() FROM ONLY type::record($tb, $id)")
            .bind(("tb", REGISTRATION_TABLE))
            .bind(("id", id.to_owned()))
            .await
            .context("Looking up registration for delete")?
            .take::<Option<String>>(0)
            .context("Parsing delete lookup")?;

        if existing.is_none() {
            return Ok(false);
        }

        self.db
            .query("DELETE type::record($tb, $id)")
            .bind(("tb", REGISTRATION_TABLE))
            .bind(("id", id.to_owned()))
            .await
            .context("Deleting registration")?
            .check()
            .context("Confirming registration delete")?;

        Ok(true)
    }

    /// Unconditionally removes every registration. Deleting from an empty
    /// store is not an error.
    pub async fn delete_all(&self) -> Result<(), RegistrationError> {
        self.db
            .query("DELETE type::table($tb)")
            .bind(("tb", REGISTRATION_TABLE))
            .await
            .context("Deleting all registrations")?
            .check()
            .context("Confirming bulk delete")?;

        Ok(())
    }
}

/// SurrealDB reports unique-index violations as plain engine errors; the
/// stable marker in the message is the "already contains" clause.
fn is_unique_index_violation(err: &surrealdb::Error) -> bool {
    err.to_string().contains("already contains")
}
