use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use crate::m20250301_000001_create_tables::{Fee, Student};

#[derive(DeriveMigrationName)]
pub struct Migration;

const FK_STUDENT_FEE: &str = "fk_student_fee_id";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite 不支持 ALTER TABLE ADD CONSTRAINT，student.fee_id 保持为普通索引列
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            return Ok(());
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_FEE)
                    .from(Student::Table, Student::FeeId)
                    .to(Fee::Table, Fee::FeeId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            return Ok(());
        }

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_FEE)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await
    }
}
