use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Class::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Class::ClassName).string().not_null())
                    .col(ColumnDef::new(Class::Section).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teacher::TeacherId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teacher::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建费用类型表
        manager
            .create_table(
                Table::create()
                    .table(FeeTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeTypes::TypeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeeTypes::TypeName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表（fee_id 外键由后续迁移补充）
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Name).string().not_null())
                    .col(ColumnDef::new(Student::FatherName).string().null())
                    .col(ColumnDef::new(Student::FatherCnic).string().null())
                    .col(ColumnDef::new(Student::MotherName).string().null())
                    .col(ColumnDef::new(Student::MotherCnic).string().null())
                    .col(ColumnDef::new(Student::Phone).string().null())
                    .col(ColumnDef::new(Student::Email).string().null())
                    .col(ColumnDef::new(Student::Address).text().null())
                    .col(ColumnDef::new(Student::RollNo).string().not_null())
                    .col(ColumnDef::new(Student::ClassId).big_integer().null())
                    .col(ColumnDef::new(Student::FeeId).big_integer().null())
                    .col(ColumnDef::new(Student::ProfilePic).text().null())
                    .col(ColumnDef::new(Student::AdmissionDate).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Student::Table, Student::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建费用表
        manager
            .create_table(
                Table::create()
                    .table(Fee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fee::FeeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fee::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Fee::Amount).double().not_null())
                    .col(ColumnDef::new(Fee::DueDate).date().not_null())
                    .col(ColumnDef::new(Fee::Status).string().not_null())
                    .col(ColumnDef::new(Fee::TypeId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Fee::Table, Fee::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Fee::Table, Fee::TypeId)
                            .to(FeeTypes::Table, FeeTypes::TypeId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subject::SubjectId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subject::SubjectName).string().not_null())
                    .col(ColumnDef::new(Subject::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Subject::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subject::Table, Subject::TeacherId)
                            .to(Teacher::Table, Teacher::TeacherId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::Date).date().not_null())
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(ColumnDef::new(Attendance::Remarks).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建图片表
        manager
            .create_table(
                Table::create()
                    .table(Pictures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pictures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pictures::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Pictures::ImageUrl).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Pictures::Table, Pictures::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_name_section")
                    .table(Class::Table)
                    .col(Class::ClassName)
                    .col(Class::Section)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_class_id")
                    .table(Student::Table)
                    .col(Student::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_fee_id")
                    .table(Student::Table)
                    .col(Student::FeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fee_student_id")
                    .table(Fee::Table)
                    .col(Fee::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subject_teacher_id")
                    .table(Subject::Table)
                    .col(Subject::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 同一学生同一天只能有一条考勤记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_student_date")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pictures_student_id")
                    .table(Pictures::Table)
                    .col(Pictures::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pictures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Class {
    #[sea_orm(iden = "class")]
    Table,
    Id,
    ClassName,
    Section,
}

#[derive(DeriveIden)]
enum Teacher {
    #[sea_orm(iden = "teacher")]
    Table,
    TeacherId,
    Name,
}

#[derive(DeriveIden)]
enum FeeTypes {
    #[sea_orm(iden = "fee_types")]
    Table,
    TypeId,
    TypeName,
}

#[derive(DeriveIden)]
pub(crate) enum Student {
    #[sea_orm(iden = "student")]
    Table,
    Id,
    Name,
    FatherName,
    FatherCnic,
    MotherName,
    MotherCnic,
    Phone,
    Email,
    Address,
    RollNo,
    ClassId,
    FeeId,
    ProfilePic,
    AdmissionDate,
}

#[derive(DeriveIden)]
pub(crate) enum Fee {
    #[sea_orm(iden = "fee")]
    Table,
    FeeId,
    StudentId,
    Amount,
    DueDate,
    Status,
    TypeId,
}

#[derive(DeriveIden)]
enum Subject {
    #[sea_orm(iden = "subject")]
    Table,
    SubjectId,
    SubjectName,
    TeacherId,
    Description,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    StudentId,
    ClassId,
    Date,
    Status,
    Remarks,
}

#[derive(DeriveIden)]
enum Pictures {
    #[sea_orm(iden = "pictures")]
    Table,
    Id,
    StudentId,
    ImageUrl,
}
