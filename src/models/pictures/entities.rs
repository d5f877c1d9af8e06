use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "picture.ts")]
pub struct Picture {
    pub id: i64,
    pub student_id: i64,
    pub image_url: String,
}
