use serde::Serialize;

use crate::domain::owner::Owner;

/// JSON body returned by `/api/v1/owners`.
#[derive(Debug, Serialize)]
pub struct OwnersResponse {
    /// Total number of owners matching the filter.
    pub total: usize,
    pub total_pages: usize,
    /// One-based page echoed back to the caller.
    pub page: usize,
    pub owners: Vec<Owner>,
}
