use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::reports::CreateReportArgs;
use crate::models::reports::Report;
use sqlx::mysql::MySqlDatabaseError;
use tracing::{error, warn};

/// `ER_TRUNCATED_WRONG_VALUE_FOR_FIELD`
const MYSQL_TRUNCATED_WRONG_VALUE: u16 = 1366;
const CATEGORY_COLUMN_FIX: &str = "ALTER TABLE reports MODIFY COLUMN cats VARCHAR(255);";

pub async fn create<C: Context>(ctx: &C, args: CreateReportArgs) -> ServiceResult<i64> {
    match ctx.db().create_report(args).await {
        Ok(report_id) => Ok(report_id),
        Err(e) => {
            error!("Error inserting complaint: {e}");
            let details = match e.as_database_error() {
                Some(db_error) => {
                    let code = db_error
                        .try_downcast_ref::<MySqlDatabaseError>()
                        .map(MySqlDatabaseError::number);
                    if is_category_column_mismatch(code, db_error.message()) {
                        warn!("The cats column needs to be a VARCHAR. Run: {CATEGORY_COLUMN_FIX}");
                    }
                    db_error.message().to_owned()
                }
                None => e.to_string(),
            };
            Err(AppError::ReportsCreateFailed(details))
        }
    }
}

pub async fn fetch_page<C: Context>(
    ctx: &C,
    offset: i64,
    limit: i64,
) -> ServiceResult<Vec<Report>> {
    match ctx.db().fetch_reports_page(offset, limit).await {
        Ok(reports) => Ok(reports.into_iter().map(Report::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Returns how many of `ids` actually existed.
pub async fn delete_many<C: Context>(ctx: &C, ids: &[i64]) -> ServiceResult<u64> {
    if ids.is_empty() {
        return Err(AppError::ReportsNoIds);
    }
    match ctx.db().delete_reports(ids).await {
        Ok(deleted) => Ok(deleted),
        Err(e) => unexpected(e),
    }
}

pub async fn set_admin_response<C: Context>(
    ctx: &C,
    report_id: i64,
    response: &str,
) -> ServiceResult<()> {
    if response.is_empty() {
        return Err(AppError::ReportsResponseRequired);
    }
    match ctx.db().set_admin_response(report_id, response).await {
        Ok(0) => Err(AppError::ReportsNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

/// A `cats` column typed as an integer rejects textual categories with 1366.
fn is_category_column_mismatch(code: Option<u16>, message: &str) -> bool {
    code == Some(MYSQL_TRUNCATED_WRONG_VALUE) && message.contains("cats")
}
