//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Absence is reported as
//! `None` / `false`, never as an error.

pub mod admin_user_repo;
pub mod audit_repo;
pub mod booking_repo;
pub mod contact_message_repo;
pub mod event_repo;
pub mod media_asset_repo;
pub mod mix_repo;
pub mod press_kit_repo;
pub mod site_settings_repo;

pub use admin_user_repo::AdminUserRepo;
pub use audit_repo::AuditLogRepo;
pub use booking_repo::BookingRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use event_repo::EventRepo;
pub use media_asset_repo::MediaAssetRepo;
pub use mix_repo::MixRepo;
pub use press_kit_repo::PressKitRepo;
pub use site_settings_repo::SiteSettingsRepo;

/// Join filter conditions into a `WHERE` clause (empty when there are none).
fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}
