use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "fee_type.ts")]
pub struct FeeType {
    pub type_id: i64,
    pub type_name: String,
}
