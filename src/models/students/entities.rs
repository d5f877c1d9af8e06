use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 父亲姓名
    pub father_name: Option<String>,
    // 父亲身份证号
    pub father_cnic: Option<String>,
    // 母亲姓名
    pub mother_name: Option<String>,
    // 母亲身份证号
    pub mother_cnic: Option<String>,
    // 联系电话
    pub phone: Option<String>,
    // 邮箱
    pub email: Option<String>,
    // 住址
    pub address: Option<String>,
    // 学号
    pub roll_no: String,
    // 所属班级
    pub class_id: Option<i64>,
    // 当前费用记录
    pub fee_id: Option<i64>,
    // 头像 URL
    pub profile_pic: Option<String>,
    // 入学日期
    pub admission_date: Option<chrono::NaiveDate>,
}
