use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct Subject {
    // 科目ID
    pub subject_id: i64,
    // 科目名称
    pub subject_name: String,
    // 任课教师
    pub teacher_id: Option<i64>,
    // 描述
    pub description: Option<String>,
}
