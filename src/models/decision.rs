//! The decision artifact handed to the content population step.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::insight::QualityInsight;
use super::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub template_id: String,
    /// Section name -> selected variant id. Sections with no satisfying
    /// variant are simply absent.
    pub sections: BTreeMap<String, String>,
    /// Outstanding clarifying questions, ordered by priority.
    pub questions: Vec<Question>,
    pub insight: QualityInsight,
}

impl Decision {
    /// Digest of the canonical JSON serialization. Two runs over identical
    /// inputs must produce identical fingerprints.
    pub fn fingerprint(&self) -> Result<String> {
        let data = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&data);
        Ok(format!("{:x}", digest))
    }
}
