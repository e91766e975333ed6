pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_users_table;
mod m20251101_000002_create_students_table;
mod m20251101_000003_create_alumni_table;
mod m20251101_000004_create_projects_table;
mod m20251101_000005_create_collaboration_requests_table;
mod m20251101_000006_create_jobs_table;
mod m20251101_000007_create_job_applications_table;
mod m20251101_000008_create_events_table;
mod m20251101_000009_create_event_registrations_table;
mod m20251101_000010_create_mentorships_table;
mod m20251101_000011_create_mentorship_requests_table;
mod m20251101_000012_create_recommendation_requests_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_users_table::Migration),
            Box::new(m20251101_000002_create_students_table::Migration),
            Box::new(m20251101_000003_create_alumni_table::Migration),
            Box::new(m20251101_000004_create_projects_table::Migration),
            Box::new(m20251101_000005_create_collaboration_requests_table::Migration),
            Box::new(m20251101_000006_create_jobs_table::Migration),
            Box::new(m20251101_000007_create_job_applications_table::Migration),
            Box::new(m20251101_000008_create_events_table::Migration),
            Box::new(m20251101_000009_create_event_registrations_table::Migration),
            Box::new(m20251101_000010_create_mentorships_table::Migration),
            Box::new(m20251101_000011_create_mentorship_requests_table::Migration),
            Box::new(m20251101_000012_create_recommendation_requests_table::Migration),
        ]
    }
}
