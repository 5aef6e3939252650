//! Typed ID definitions for all domain entities.

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for SKPD (regional agency) rows.
pub struct Agency;

/// Marker type for content categories.
pub struct Category;

/// Marker type for application users (admins, operators, publishers).
pub struct User;

/// Marker type for submitted content items.
pub struct Content;

/// Marker type for verification audit records.
pub struct Verification;

// ============================================================================
// Type aliases
// ============================================================================

pub type AgencyId = Id<Agency>;

pub type CategoryId = Id<Category>;

pub type UserId = Id<User>;

pub type ContentId = Id<Content>;

pub type VerificationId = Id<Verification>;
