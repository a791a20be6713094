//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create (or upsert) DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Wire names are camelCase. Required text fields default to `""` when
//! missing so that absence is reported by validation as a field error.

pub mod admin_user;
pub mod audit;
pub mod booking;
pub mod contact_message;
pub mod event;
pub mod media_asset;
pub mod mix;
pub mod press_kit;
pub mod site_settings;
pub mod social_links;

fn default_true() -> bool {
    true
}
