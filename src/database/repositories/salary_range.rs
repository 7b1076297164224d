use async_trait::async_trait;

use super::{RepositoryResult, SalaryRangeRepository, ShapedPage, SqlRepository};
use crate::database::models::SalaryRange;
use crate::features::salary_ranges::GetSalaryRangesQuery;
use crate::specification::salary_range;

#[async_trait]
impl SalaryRangeRepository for SqlRepository<SalaryRange> {
    async fn get_salary_range_response(
        &self,
        query: &GetSalaryRangesQuery,
    ) -> RepositoryResult<ShapedPage> {
        let spec = salary_range::by_filters(query);
        self.shaped_page(spec, query.fields.as_deref().unwrap_or_default())
            .await
    }
}
