// 业务错误码（写入 ApiResponse.code）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    ReferencedRecordNotFound = 1100,
    RecordStillReferenced = 1101,
    RecordCreationFailed = 1200,
    RecordUpdateFailed = 1201,
    RecordDeleteFailed = 1202,

    // 文件与媒体
    FileUploadFailed = 3000,
    FileNotFound = 3001,
    FileTypeNotAllowed = 3002,
    FileSizeExceeded = 3003,
    MultifileUploadNotAllowed = 3004,
    MediaUploadFailed = 3005,

    // 学生
    StudentNotFound = 4000,
    StudentAlreadyExists = 4001,

    // 班级
    ClassNotFound = 4100,
    ClassAlreadyExists = 4101,

    // 费用
    FeeNotFound = 4200,
    FeeAmountInvalid = 4201,

    // 费用类型
    FeeTypeNotFound = 4300,
    FeeTypeAlreadyExists = 4301,

    // 教师
    TeacherNotFound = 4400,

    // 科目
    SubjectNotFound = 4500,

    // 考勤
    AttendanceNotFound = 4600,
    AttendanceAlreadyRecorded = 4601,

    // 图片
    PictureNotFound = 4700,

    InternalServerError = 5000,
    ServiceUnavailable = 5003,
}
