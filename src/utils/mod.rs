pub mod extractor;
pub mod file_magic;
pub mod multipart;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAttendanceIdI64, SafeClassIdI64, SafeFeeIdI64, SafeFeeTypeIdI64, SafePictureIdI64,
    SafeStudentIdI64, SafeSubjectIdI64, SafeTeacherIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{contains_pattern, escape_like_pattern};
