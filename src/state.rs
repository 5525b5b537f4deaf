use crate::config::AppConfig;
use crate::db::DocumentStore;

pub struct AppState {
    pub store: DocumentStore,
    pub config: AppConfig,
}
