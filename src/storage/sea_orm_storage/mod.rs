//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod classes;
mod fee_types;
mod fees;
mod pictures;
mod students;
mod subjects;
mod teachers;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolSysError};
use crate::models::PaginationInfo;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按给定数据库配置建立连接池并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", redact_url(&db_url));

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.timeout))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let mut pool = SqlitePoolOptions::new()
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));

        if in_memory {
            // 内存库随连接关闭而销毁，只保留一个常驻连接
            pool = pool
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("wal_autocheckpoint", "1000");
            pool = pool
                .max_connections(config.pool_size)
                .idle_timeout(Duration::from_secs(config.idle_timeout));
        }

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 隐藏 URL 中的密码
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

/// 组装分页信息
pub(crate) fn pagination_info(page: u64, size: u64, total: u64, pages: u64) -> PaginationInfo {
    PaginationInfo {
        page: page as i64,
        page_size: size as i64,
        total: total as i64,
        total_pages: pages as i64,
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("数据库不可用: {e}")))
    }

    fn backend_name(&self) -> &'static str {
        match self.db.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => "postgres",
            sea_orm::DatabaseBackend::MySql => "mysql",
            sea_orm::DatabaseBackend::Sqlite => "sqlite",
            _ => "unknown",
        }
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 费用类型模块
    async fn create_fee_type(&self, fee_type: FeeTypeRequest) -> Result<FeeType> {
        self.create_fee_type_impl(fee_type).await
    }

    async fn get_fee_type_by_id(&self, type_id: i64) -> Result<Option<FeeType>> {
        self.get_fee_type_by_id_impl(type_id).await
    }

    async fn list_fee_types_with_pagination(
        &self,
        query: FeeTypeListQuery,
    ) -> Result<FeeTypeListResponse> {
        self.list_fee_types_with_pagination_impl(query).await
    }

    async fn update_fee_type(
        &self,
        type_id: i64,
        update: FeeTypeRequest,
    ) -> Result<Option<FeeType>> {
        self.update_fee_type_impl(type_id, update).await
    }

    async fn delete_fee_type(&self, type_id: i64) -> Result<bool> {
        self.delete_fee_type_impl(type_id).await
    }

    // 费用模块
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<Fee> {
        self.create_fee_impl(fee).await
    }

    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_id_impl(fee_id).await
    }

    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse> {
        self.list_fees_with_pagination_impl(query).await
    }

    async fn update_fee(&self, fee_id: i64, update: UpdateFeeRequest) -> Result<Option<Fee>> {
        self.update_fee_impl(fee_id, update).await
    }

    async fn delete_fee(&self, fee_id: i64) -> Result<bool> {
        self.delete_fee_impl(fee_id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: TeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: TeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool> {
        self.delete_teacher_impl(teacher_id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, update).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    // 考勤模块
    async fn create_attendance(&self, attendance: CreateAttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(attendance).await
    }

    async fn get_attendance_by_id(&self, attendance_id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(attendance_id).await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn update_attendance(
        &self,
        attendance_id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(attendance_id, update).await
    }

    async fn delete_attendance(&self, attendance_id: i64) -> Result<bool> {
        self.delete_attendance_impl(attendance_id).await
    }

    // 图片模块
    async fn create_picture(&self, picture: CreatePictureRequest) -> Result<Picture> {
        self.create_picture_impl(picture).await
    }

    async fn get_picture_by_id(&self, picture_id: i64) -> Result<Option<Picture>> {
        self.get_picture_by_id_impl(picture_id).await
    }

    async fn list_pictures_with_pagination(
        &self,
        query: PictureListQuery,
    ) -> Result<PictureListResponse> {
        self.list_pictures_with_pagination_impl(query).await
    }

    async fn delete_picture(&self, picture_id: i64) -> Result<bool> {
        self.delete_picture_impl(picture_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@h:5432/d").unwrap(),
            "postgres://u:p@h:5432/d"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }

    #[test]
    fn test_redact_url() {
        assert_eq!(
            redact_url("postgres://school:secret@db:5432/app"),
            "postgres://school:***@db:5432/app"
        );
        assert_eq!(redact_url("sqlite://school.db"), "sqlite://school.db");
    }

    async fn memory_storage() -> SeaOrmStorage {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
            idle_timeout: 30,
        };
        SeaOrmStorage::connect(&config).await.unwrap()
    }

    fn student(name: &str, roll_no: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_student_search_matches_name_or_roll_no() {
        let storage = memory_storage().await;
        storage.create_student(student("Ali Raza", "R-100")).await.unwrap();
        storage.create_student(student("Fatima", "R-200")).await.unwrap();
        storage.create_student(student("Omar", "X-300")).await.unwrap();

        let by_name = storage
            .list_students_with_pagination(StudentListQuery {
                search: Some("Fatima".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name.pagination.total, 1);
        assert_eq!(by_name.items[0].roll_no, "R-200");

        let by_roll = storage
            .list_students_with_pagination(StudentListQuery {
                search: Some("R-".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_roll.pagination.total, 2);

        // 百分号按字面匹配
        let literal = storage
            .list_students_with_pagination(StudentListQuery {
                search: Some("%".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(literal.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_page_past_end_keeps_total() {
        let storage = memory_storage().await;
        for i in 0..3 {
            storage
                .create_student(student(&format!("Student {i}"), &format!("R-{i}")))
                .await
                .unwrap();
        }

        let page = storage
            .list_students_with_pagination(StudentListQuery {
                page: Some(5),
                size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_update_class_partial_and_missing() {
        let storage = memory_storage().await;
        let class = storage
            .create_class(CreateClassRequest {
                class_name: "Grade 1".to_string(),
                section: "A".to_string(),
            })
            .await
            .unwrap();

        let updated = storage
            .update_class(
                class.id,
                UpdateClassRequest {
                    class_name: None,
                    section: Some(" B ".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.class_name, "Grade 1");
        assert_eq!(updated.section, "B");

        let missing = storage
            .update_class(
                class.id + 1,
                UpdateClassRequest {
                    class_name: Some("Grade 2".to_string()),
                    section: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
        assert!(!storage.delete_class(class.id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_attendance_listed_newest_first() {
        let storage = memory_storage().await;
        let class = storage
            .create_class(CreateClassRequest {
                class_name: "Grade 3".to_string(),
                section: "A".to_string(),
            })
            .await
            .unwrap();
        let pupil = storage.create_student(student("Hina", "R-1")).await.unwrap();

        for day in ["2025-01-05", "2025-01-07", "2025-01-06"] {
            storage
                .create_attendance(CreateAttendanceRequest {
                    student_id: pupil.id,
                    class_id: class.id,
                    date: day.parse().unwrap(),
                    status: AttendanceStatus::Present,
                    remarks: None,
                })
                .await
                .unwrap();
        }

        let list = storage
            .list_attendance_with_pagination(AttendanceListQuery {
                student_id: Some(pupil.id),
                ..Default::default()
            })
            .await
            .unwrap();
        let dates: Vec<String> = list.items.iter().map(|a| a.date.to_string()).collect();
        assert_eq!(dates, ["2025-01-07", "2025-01-06", "2025-01-05"]);

        // 同一学生同一天重复记录
        let duplicate = storage
            .create_attendance(CreateAttendanceRequest {
                student_id: pupil.id,
                class_id: class.id,
                date: "2025-01-05".parse().unwrap(),
                status: AttendanceStatus::Late,
                remarks: None,
            })
            .await;
        assert!(matches!(duplicate, Err(SchoolSysError::Conflict(_))));
    }
}
