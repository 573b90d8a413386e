use crate::entities::reports::{CreateReportArgs, Report};
use async_trait::async_trait;
use sqlx::{MySql, Pool, QueryBuilder};

const TABLE_NAME: &str = "reports";
const READ_FIELDS: &str = "id, title, descr, info, cats, admin_response";

#[async_trait]
pub trait ReportsRepository: Send + Sync {
    /// Returns the id assigned by the store.
    async fn create_report(&self, args: CreateReportArgs) -> sqlx::Result<i64>;

    /// Newest first.
    async fn fetch_reports_page(&self, offset: i64, limit: i64) -> sqlx::Result<Vec<Report>>;

    /// Returns the number of rows removed.
    async fn delete_reports(&self, ids: &[i64]) -> sqlx::Result<u64>;

    /// Returns the number of rows updated.
    async fn set_admin_response(&self, report_id: i64, response: &str) -> sqlx::Result<u64>;
}

#[async_trait]
impl ReportsRepository for Pool<MySql> {
    async fn create_report(&self, args: CreateReportArgs) -> sqlx::Result<i64> {
        const QUERY: &str = const_str::concat!(
            "INSERT INTO ",
            TABLE_NAME,
            " (title, descr, info, cats) VALUES (?, ?, ?, ?)"
        );
        let res = sqlx::query(QUERY)
            .bind(args.title)
            .bind(args.descr)
            .bind(args.info)
            .bind(args.cats)
            .execute(self)
            .await?;
        Ok(res.last_insert_id() as _)
    }

    async fn fetch_reports_page(&self, offset: i64, limit: i64) -> sqlx::Result<Vec<Report>> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            " FROM ",
            TABLE_NAME,
            " ORDER BY id DESC LIMIT ? OFFSET ?"
        );
        sqlx::query_as(QUERY)
            .bind(limit)
            .bind(offset)
            .fetch_all(self)
            .await
    }

    async fn delete_reports(&self, ids: &[i64]) -> sqlx::Result<u64> {
        let mut query = QueryBuilder::<MySql>::new(const_str::concat!(
            "DELETE FROM ",
            TABLE_NAME,
            " WHERE id IN ("
        ));
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
        let res = query.build().execute(self).await?;
        Ok(res.rows_affected())
    }

    async fn set_admin_response(&self, report_id: i64, response: &str) -> sqlx::Result<u64> {
        const QUERY: &str = const_str::concat!(
            "UPDATE ",
            TABLE_NAME,
            " SET admin_response = ? WHERE id = ?"
        );
        let res = sqlx::query(QUERY)
            .bind(response)
            .bind(report_id)
            .execute(self)
            .await?;
        Ok(res.rows_affected())
    }
}
