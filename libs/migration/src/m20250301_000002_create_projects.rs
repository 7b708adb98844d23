use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(ProjectStatus::Enum)
                    .values([
                        ProjectStatus::Active,
                        ProjectStatus::OnHold,
                        ProjectStatus::Completed,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string(Projects::Name))
                    .col(text_null(Projects::Description))
                    .col(
                        ColumnDef::new(Projects::Status)
                            .enumeration(
                                ProjectStatus::Enum,
                                [
                                    ProjectStatus::Active,
                                    ProjectStatus::OnHold,
                                    ProjectStatus::Completed,
                                ],
                            )
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Projects::StartDate))
                    .col(timestamp_with_time_zone_null(Projects::EndDate))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProjectStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectStatus {
    #[sea_orm(iden = "project_status")]
    Enum,
    #[sea_orm(iden = "Active")]
    Active,
    #[sea_orm(iden = "On Hold")]
    OnHold,
    #[sea_orm(iden = "Completed")]
    Completed,
}
