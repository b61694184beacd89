use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240524_000002_player::Player, m20240524_000003_football_match::FootballMatch,
};

static IDX_EVENT_MATCH_ID: &str = "idx_event_match_id";
static IDX_EVENT_PLAYER_ID: &str = "idx_event_player_id";
static FK_EVENT_MATCH_ID: &str = "fk_event_match_id";
static FK_EVENT_PLAYER_ID: &str = "fk_event_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::MatchId))
                    .col(integer(Event::PlayerId))
                    .col(string(Event::EventType))
                    .col(timestamp(Event::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_MATCH_ID)
                    .table(Event::Table)
                    .col(Event::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_PLAYER_ID)
                    .table(Event::Table)
                    .col(Event::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_MATCH_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::MatchId)
                    .to_tbl(FootballMatch::Table)
                    .to_col(FootballMatch::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_PLAYER_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
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
                    .name(FK_EVENT_PLAYER_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_MATCH_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_PLAYER_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_MATCH_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    MatchId,
    PlayerId,
    EventType,
    Timestamp,
}
