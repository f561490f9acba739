//! Create `customer` table.
//!
//! The unique index on `email` is the source of truth for email uniqueness;
//! the service-level check only exists to produce a friendly error early.
use sea_orm_migration::{prelude::*, schema::*};

pub const EMAIL_UNIQUE_INDEX: &str = "customer_email_unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(text(Customer::Name))
                    .col(text(Customer::Email))
                    .col(integer(Customer::Age))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(EMAIL_UNIQUE_INDEX)
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(EMAIL_UNIQUE_INDEX).table(Customer::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, Name, Email, Age }
