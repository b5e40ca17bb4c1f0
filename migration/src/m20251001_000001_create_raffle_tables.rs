use sea_orm_migration::prelude::*;

/// Users (已登记学生)
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    StudentId,
    Name,
    ReceivedAward,
    CreatedAt,
    UpdatedAt,
}

/// Raffle Items (奖品库存)
#[derive(DeriveIden)]
enum RaffleItems {
    Table,
    Id,
    Name,
    Quantity,
    ItemPic,
    CreatedAt,
    UpdatedAt,
}

/// Raffle Logs (中奖记录, 只追加)
#[derive(DeriveIden)]
enum RaffleLogs {
    Table,
    Id,
    StudentId,
    ItemId,
    Timestamp,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// raffle_logs.item_id 不建立外键: 奖品被删除后历史记录仍需保留
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 学生表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::StudentId).string_len(8).not_null())
                    .col(ColumnDef::new(Users::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::ReceivedAward)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_student_id_unique")
                    .table(Users::Table)
                    .col(Users::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 奖品表
        manager
            .create_table(
                Table::create()
                    .table(RaffleItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RaffleItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RaffleItems::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(RaffleItems::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(RaffleItems::ItemPic).text().null())
                    .col(
                        ColumnDef::new(RaffleItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RaffleItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 中奖记录表
        manager
            .create_table(
                Table::create()
                    .table(RaffleLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RaffleLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RaffleLogs::StudentId)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RaffleLogs::ItemId).integer().not_null())
                    .col(
                        ColumnDef::new(RaffleLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_raffle_logs_timestamp")
                    .table(RaffleLogs::Table)
                    .col(RaffleLogs::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaffleLogs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RaffleItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
