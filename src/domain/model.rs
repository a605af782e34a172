use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the pathway array. Source records carry more keys
/// (name, prevalence, tier, abundances); only these three survive
/// into the output, the rest are ignored at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayRecord {
    pub id: RecordId,
    pub category: String,
    pub subcategory: String,
}

/// Pathway ids are strings in practice ('VALSYN-PWY') but the literal
/// syntax also permits bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<PathwayRecord>,
    pub tsv_output: String,
}
