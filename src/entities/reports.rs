#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Report {
    pub id: i64,
    pub title: Option<String>,
    pub descr: Option<String>,
    pub info: Option<String>,
    pub cats: Option<String>,
    pub admin_response: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateReportArgs {
    pub title: Option<String>,
    pub descr: Option<String>,
    pub info: Option<String>,
    pub cats: Option<String>,
}
