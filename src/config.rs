use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub brand_name: String,
    pub study_guide_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "lessonbook.db".to_string()),
            brand_name: env::var("BRAND_NAME").unwrap_or_else(|_| "Geaux Driving".to_string()),
            study_guide_url: env::var("STUDY_GUIDE_URL")
                .unwrap_or_else(|_| "https://www.zutobi.com/".to_string()),
        }
    }
}
