pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_events;
mod m20251101_000002_create_households;
mod m20251101_000003_create_family_members;
mod m20251101_000004_create_event_registrations;
mod m20251101_000005_create_missions;
mod m20251101_000006_create_mission_completions;
mod m20251101_000007_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_events::Migration),
            Box::new(m20251101_000002_create_households::Migration),
            Box::new(m20251101_000003_create_family_members::Migration),
            Box::new(m20251101_000004_create_event_registrations::Migration),
            Box::new(m20251101_000005_create_missions::Migration),
            Box::new(m20251101_000006_create_mission_completions::Migration),
            Box::new(m20251101_000007_add_lookup_indexes::Migration),
        ]
    }
}
