use crate::error::RegistrationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use surrealdb::types::SurrealValue;
use utoipa::ToSchema;

/// How the attendee will join the conference.
///
/// Derived from the submitted `physicalAttendance` flag; the raw boolean is
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceType {
    Physical,
    Online,
}

impl AttendanceType {
    /// `true` maps to physical attendance, anything else to online.
    #[must_use]
    pub const fn from_physical_flag(physical: bool) -> Self {
        if physical { Self::Physical } else { Self::Online }
    }
}

/// Candidate payload received from the public registration form.
///
/// Every field is defaulted so an absent field deserializes as blank and is
/// rejected by [`Self::into_record`] with a named validation error, instead
/// of failing JSON extraction.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub kingschat: String,
    pub zone: String,
    #[serde(rename = "group")]
    pub group_name: String,
    pub church: String,
    /// Client checkbox: attend physically. Absent means online attendance.
    pub physical_attendance: bool,
}

impl RegistrationDraft {
    /// Normalizes and validates the draft into a storable record.
    ///
    /// Trims every field, lowercases the email, derives the attendance type
    /// from the physical-attendance flag, and stamps `created_at`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Validation`] naming the first field that is
    /// missing or blank after trimming.
    pub fn into_record(self) -> Result<NewRegistration, RegistrationError> {
        let title = required(self.title, "title")?;
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let email = required(self.email, "email")?.to_lowercase();
        let phone = required(self.phone, "phone")?;
        let kingschat = required(self.kingschat, "kingschat")?;
        let zone = required(self.zone, "zone")?;
        let group_name = required(self.group_name, "group")?;
        let church = required(self.church, "church")?;

        Ok(NewRegistration {
            title,
            first_name,
            last_name,
            email,
            phone,
            kingschat,
            zone,
            group_name,
            church,
            attendance_type: AttendanceType::from_physical_flag(self.physical_attendance)
                .to_string(),
            created_at: Utc::now(),
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, RegistrationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::missing_field(field));
    }
    Ok(trimmed.to_owned())
}

/// Normalized registration content, ready for insertion (no id yet).
#[derive(Debug, Clone, SurrealValue)]
pub struct NewRegistration {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub kingschat: String,
    pub zone: String,
    pub group_name: String,
    pub church: String,
    pub attendance_type: String,
    pub created_at: DateTime<Utc>,
}

/// A stored attendee registration.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub kingschat: String,
    pub zone: String,
    #[serde(rename = "group")]
    pub group_name: String,
    pub church: String,
    pub attendance_type: String,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub(crate) fn from_parts(id: String, record: NewRegistration) -> Self {
        Self {
            id,
            title: record.title,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            kingschat: record.kingschat,
            zone: record.zone,
            group_name: record.group_name,
            church: record.church,
            attendance_type: record.attendance_type,
            created_at: record.created_at,
        }
    }
}
