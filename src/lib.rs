pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod repl;
pub mod runner;
pub mod server;
pub mod store;

pub use catalog::{validate_catalog, QueryCatalog, QueryDef, ValidationIssue, TOP_PROVIDERS_KEY};
pub use config::AppConfig;
pub use error::{FoodLensError, Result};
pub use filter::FilterSpec;
pub use render::render_table;
pub use repl::{parse_selection, ConsoleMenu, Selection};
pub use runner::{provider_contacts, substitute_today, ProviderContact, QueryRunner};
pub use server::{DashboardState, ErrorResponse, QueryInfo, RunRequest, RunResponse};
pub use store::{connect, DataStore, MockStore, MySqlStore, ResultSet, SqliteStore};
