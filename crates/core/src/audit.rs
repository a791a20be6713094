//! Audit log vocabulary.
//!
//! Entries are written by the API layer after a successful mutation; the
//! strings below are what lands in `audit_logs.action` / `audit_logs.entity`.

// ---------------------------------------------------------------------------
// Action type constants
// ---------------------------------------------------------------------------

/// Known action types for audit log entries.
pub mod action_types {
    pub const CREATE: &str = "CREATE";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
    pub const UPLOAD: &str = "UPLOAD";
    pub const LOGIN: &str = "LOGIN";
    pub const LOGOUT: &str = "LOGOUT";
    /// Reserved; reads are not audited.
    pub const VIEW: &str = "VIEW";
}

// ---------------------------------------------------------------------------
// Entity constants
// ---------------------------------------------------------------------------

/// Entity names recorded alongside each action.
pub mod entity_types {
    pub const ADMIN_USER: &str = "AdminUser";
    pub const BOOKING_REQUEST: &str = "BookingRequest";
    pub const EVENT: &str = "Event";
    pub const MEDIA_ASSET: &str = "MediaAsset";
    pub const MIX: &str = "Mix";
    pub const PRESS_KIT: &str = "PressKit";
    pub const SITE_SETTINGS: &str = "SiteSettings";
    pub const CONTACT_MESSAGE: &str = "ContactMessage";
}
