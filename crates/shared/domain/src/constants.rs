//! Shared constant values: API tags, header names, and form enumerations.

/// OpenAPI tag for system endpoints (health).
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for the public registration endpoints.
pub const REGISTRATION_TAG: &str = "Registration";
/// OpenAPI tag for the admin endpoints.
pub const ADMIN_TAG: &str = "Admin";
/// OpenAPI tag for the zone-directory endpoints.
pub const ZONES_TAG: &str = "Zones";

/// Header carrying the shared admin secret on every admin call.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// SurrealDB table holding attendee registrations.
pub const REGISTRATION_TABLE: &str = "registration";

/// Canonical title options offered by the registration form.
///
/// The server accepts any non-empty title; this list is the authoritative
/// enumeration for clients rendering the select field.
pub const TITLES: &[&str] = &["Pastor", "Dcns", "Dcn", "Brother", "Sister", "Evangelist", "Dr."];

/// Sentinel group value a client sends when the attendee's group is not in
/// the directory; the free-text replacement is resolved client-side.
pub const OTHER_GROUP: &str = "other";
