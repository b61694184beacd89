pub use sea_orm_migration::prelude::*;

mod m20240524_000001_club;
mod m20240524_000002_player;
mod m20240524_000003_football_match;
mod m20240524_000004_event;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240524_000001_club::Migration),
            Box::new(m20240524_000002_player::Migration),
            Box::new(m20240524_000003_football_match::Migration),
            Box::new(m20240524_000004_event::Migration),
        ]
    }
}
