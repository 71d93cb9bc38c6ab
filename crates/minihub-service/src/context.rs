//! Request context carrying the acting painter's identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minihub_core::types::PainterId;

/// Context for the current request.
///
/// Extracted by the API layer and passed into service methods so that
/// every operation knows *who* is acting. Authentication itself happens
/// upstream; services only enforce ownership against this identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting painter's ID.
    pub painter_id: PainterId,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(painter_id: PainterId) -> Self {
        Self {
            painter_id,
            request_time: Utc::now(),
        }
    }
}
