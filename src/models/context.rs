//! Operation context threaded explicitly through every engine call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The organization and acting user an operation runs on behalf of.
///
/// Passed explicitly into every engine operation instead of living in
/// ambient/session state, so multi-tenant behavior stays testable: two
/// contexts hitting the same store must never observe each other's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    /// The organization all reads and writes are scoped to.
    pub organization_id: Uuid,
    /// The user performing the operation (recorded on approvals,
    /// rejections, and submissions).
    pub actor_id: Uuid,
}

impl OperationContext {
    /// Creates a context for the given organization and actor.
    pub fn new(organization_id: Uuid, actor_id: Uuid) -> Self {
        Self {
            organization_id,
            actor_id,
        }
    }
}
