use async_trait::async_trait;

use super::{PositionRepository, RepositoryResult, ShapedPage, SqlRepository};
use crate::database::models::Position;
use crate::features::positions::{GetPositionsQuery, PagedPositionsQuery};
use crate::specification::position;

#[async_trait]
impl PositionRepository for SqlRepository<Position> {
    async fn is_unique_position_number(&self, position_number: &str) -> RepositoryResult<bool> {
        let existing: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM positions WHERE position_number = ?")
                .bind(position_number)
                .fetch_one(self.pool())
                .await?;
        Ok(existing == 0)
    }

    async fn get_position_response(
        &self,
        query: &GetPositionsQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = position::by_filters(query);
        self.shaped_page(spec, query.fields.as_deref().unwrap_or_default())
            .await
    }

    async fn get_paged_position_response(
        &self,
        query: &PagedPositionsQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = position::by_keyword(query);
        self.shaped_page(spec, query.request.fields()).await
    }
}
