use serde::Serialize;

use crate::models::property::PropertyKind;

/// Outcome of counting one collection against one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub property: String,
    pub total: usize,
    pub matching: usize,
}

impl CountReport {
    pub fn new(kind: PropertyKind, total: usize, matching: usize) -> Self {
        Self { property: kind.name().to_string(), total, matching }
    }

    pub fn to_json(&self) -> crate::errors::TallyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
