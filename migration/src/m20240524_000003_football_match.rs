use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240524_000001_club::Club;

static IDX_FOOTBALL_MATCH_HOME_CLUB_ID: &str = "idx_football_match_home_club_id";
static IDX_FOOTBALL_MATCH_AWAY_CLUB_ID: &str = "idx_football_match_away_club_id";
static FK_FOOTBALL_MATCH_HOME_CLUB_ID: &str = "fk_football_match_home_club_id";
static FK_FOOTBALL_MATCH_AWAY_CLUB_ID: &str = "fk_football_match_away_club_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FootballMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(FootballMatch::Id))
                    .col(integer(FootballMatch::HomeClubId))
                    .col(integer(FootballMatch::AwayClubId))
                    .col(timestamp(FootballMatch::Date))
                    .col(integer(FootballMatch::HomeGoals).default(0))
                    .col(integer(FootballMatch::AwayGoals).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOTBALL_MATCH_HOME_CLUB_ID)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::HomeClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOTBALL_MATCH_AWAY_CLUB_ID)
                    .table(FootballMatch::Table)
                    .col(FootballMatch::AwayClubId)
                    .to_owned(),
            )
            .await?;

        // Clubs with recorded fixtures cannot be removed out from under a match
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOOTBALL_MATCH_HOME_CLUB_ID)
                    .from_tbl(FootballMatch::Table)
                    .from_col(FootballMatch::HomeClubId)
                    .to_tbl(Club::Table)
                    .to_col(Club::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOOTBALL_MATCH_AWAY_CLUB_ID)
                    .from_tbl(FootballMatch::Table)
                    .from_col(FootballMatch::AwayClubId)
                    .to_tbl(Club::Table)
                    .to_col(Club::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOOTBALL_MATCH_AWAY_CLUB_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOOTBALL_MATCH_HOME_CLUB_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOTBALL_MATCH_AWAY_CLUB_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOTBALL_MATCH_HOME_CLUB_ID)
                    .table(FootballMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FootballMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FootballMatch {
    Table,
    Id,
    HomeClubId,
    AwayClubId,
    Date,
    HomeGoals,
    AwayGoals,
}
