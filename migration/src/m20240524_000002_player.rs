use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240524_000001_club::Club;

static IDX_PLAYER_CLUB_ID: &str = "idx_player_club_id";
static FK_PLAYER_CLUB_ID: &str = "fk_player_club_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string(Player::Position))
                    .col(integer(Player::ClubId))
                    .col(integer(Player::Goals).default(0))
                    .col(integer(Player::Assists).default(0))
                    .col(integer(Player::Appearances).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_CLUB_ID)
                    .table(Player::Table)
                    .col(Player::ClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_CLUB_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::ClubId)
                    .to_tbl(Club::Table)
                    .to_col(Club::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_CLUB_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_CLUB_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Position,
    ClubId,
    Goals,
    Assists,
    Appearances,
}
