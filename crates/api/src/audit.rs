//! Best-effort audit trail writes.
//!
//! A failed insert never fails the request that triggered it: the error is
//! logged and the entry is dropped.

use falcone_db::models::audit::CreateAuditLog;
use falcone_db::repositories::AuditLogRepo;
use falcone_db::DbPool;

use crate::extract::RequestMeta;

/// Start an entry for `action` on `entity_type`, stamped with client metadata.
pub fn entry(action: &'static str, entity_type: &'static str, meta: &RequestMeta) -> CreateAuditLog {
    CreateAuditLog::new(action, entity_type)
        .client(meta.ip_address.clone(), meta.user_agent.clone())
}

/// Append an entry to the audit log, logging instead of failing.
pub async fn record(pool: &DbPool, entry: CreateAuditLog) {
    if let Err(e) = AuditLogRepo::insert(pool, &entry).await {
        tracing::warn!(
            error = %e,
            action = entry.action,
            entity_type = entry.entity_type,
            entity_id = ?entry.entity_id,
            "Failed to record audit entry",
        );
    }
}
