pub mod attendance;
pub mod classes;
pub(crate) mod common;
pub mod fee_types;
pub mod fees;
pub mod files;
pub mod pictures;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;

pub use attendance::AttendanceService;
pub use classes::ClassService;
pub use fee_types::FeeTypeService;
pub use fees::FeeService;
pub use files::FileService;
pub use pictures::PictureService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
