pub mod attendance;

pub mod classes;

pub mod fee_types;

pub mod fees;

pub mod files;

pub mod pictures;

pub mod students;

pub mod subjects;

pub mod system;

pub mod teachers;

pub use attendance::configure_attendance_routes;
pub use classes::configure_classes_routes;
pub use fee_types::configure_fee_types_routes;
pub use fees::configure_fees_routes;
pub use files::configure_file_routes;
pub use pictures::configure_pictures_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
