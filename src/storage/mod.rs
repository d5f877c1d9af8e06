use std::sync::Arc;

use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
        responses::AttendanceListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    fee_types::{
        entities::FeeType,
        requests::{FeeTypeListQuery, FeeTypeRequest},
        responses::FeeTypeListResponse,
    },
    fees::{
        entities::Fee,
        requests::{CreateFeeRequest, FeeListQuery, UpdateFeeRequest},
        responses::FeeListResponse,
    },
    pictures::{
        entities::Picture,
        requests::{CreatePictureRequest, PictureListQuery},
        responses::PictureListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{TeacherListQuery, TeacherRequest},
        responses::TeacherListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 数据库连通性检查
    async fn ping(&self) -> Result<()>;
    /// 数据库后端名称
    fn backend_name(&self) -> &'static str;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 费用类型管理方法
    async fn create_fee_type(&self, fee_type: FeeTypeRequest) -> Result<FeeType>;
    async fn get_fee_type_by_id(&self, type_id: i64) -> Result<Option<FeeType>>;
    async fn list_fee_types_with_pagination(
        &self,
        query: FeeTypeListQuery,
    ) -> Result<FeeTypeListResponse>;
    async fn update_fee_type(
        &self,
        type_id: i64,
        update: FeeTypeRequest,
    ) -> Result<Option<FeeType>>;
    async fn delete_fee_type(&self, type_id: i64) -> Result<bool>;

    /// 费用管理方法
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<Fee>;
    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<Fee>>;
    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse>;
    async fn update_fee(&self, fee_id: i64, update: UpdateFeeRequest) -> Result<Option<Fee>>;
    async fn delete_fee(&self, fee_id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: TeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: TeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 考勤管理方法
    async fn create_attendance(&self, attendance: CreateAttendanceRequest) -> Result<Attendance>;
    async fn get_attendance_by_id(&self, attendance_id: i64) -> Result<Option<Attendance>>;
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    async fn update_attendance(
        &self,
        attendance_id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>>;
    async fn delete_attendance(&self, attendance_id: i64) -> Result<bool>;

    /// 图片管理方法
    async fn create_picture(&self, picture: CreatePictureRequest) -> Result<Picture>;
    async fn get_picture_by_id(&self, picture_id: i64) -> Result<Option<Picture>>;
    async fn list_pictures_with_pagination(
        &self,
        query: PictureListQuery,
    ) -> Result<PictureListResponse>;
    async fn delete_picture(&self, picture_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
