use serde::{Deserialize, Serialize};

/// Security-code to company-name mapping entry.
///
/// Used only to label analysis output; never read by any computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListedInfo {
    pub code: String,
    pub company_name: String,
}
