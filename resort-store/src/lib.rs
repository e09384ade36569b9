pub mod app_config;
pub mod database;
pub mod content_repo;

pub use database::DbClient;
pub use content_repo::PgContentRepository;
