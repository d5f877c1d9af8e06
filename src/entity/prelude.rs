//! 预导入模块，方便使用

pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendances, Model as AttendanceModel,
};
pub use super::class::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::fee::{ActiveModel as FeeActiveModel, Entity as Fees, Model as FeeModel};
pub use super::fee_types::{
    ActiveModel as FeeTypeActiveModel, Entity as FeeTypes, Model as FeeTypeModel,
};
pub use super::pictures::{
    ActiveModel as PictureActiveModel, Entity as Pictures, Model as PictureModel,
};
pub use super::student::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subject::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teacher::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
