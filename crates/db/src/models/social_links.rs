//! Social profile links shared by the press kit and site settings.

use falcone_core::validation;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored as JSONB. Each link is an absolute URL or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLinks {
    #[validate(custom(function = "validation::url_or_empty"))]
    pub instagram: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub facebook: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub soundcloud: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub mixcloud: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub youtube: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub spotify: Option<String>,
}
