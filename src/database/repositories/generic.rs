use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{GenericRepository, RecordsCount, RepositoryResult, ShapedPage};
use crate::database::entity::Entity;
use crate::database::value::{SqlValue, bind_values};
use crate::shaping::{DataShaper, ShapedRow};
use crate::specification::{SelectQuery, Specification, SpecificationEvaluator};

/// SQLite-backed repository for any entity.
pub struct SqlRepository<T> {
    pool: SqlitePool,
    shaper: DataShaper<T>,
}

impl<T> Clone for SqlRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            shaper: DataShaper::default(),
        }
    }
}

impl<T: Entity> SqlRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            shaper: DataShaper::new(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn shaper(&self) -> &DataShaper<T> {
        &self.shaper
    }

    async fn fetch_all(&self, query: SelectQuery) -> RepositoryResult<Vec<T>> {
        let (sql, binds) = query.into_parts();
        log::debug!("{}", sql);
        let rows = bind_values!(sqlx::query_as::<_, T>(&sql), binds)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_count(&self, query: SelectQuery) -> RepositoryResult<i64> {
        let (sql, binds) = query.into_parts();
        log::debug!("{}", sql);
        let count = bind_values!(sqlx::query_scalar::<_, i64>(&sql), binds)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Runs `spec` for one page of shaped rows, counting the filtered and
    /// unfiltered totals alongside it.
    pub async fn shaped_page(
        &self,
        spec: Specification<T>,
        fields: &str,
    ) -> RepositoryResult<ShapedPage> {
        // Reject bad projections before touching the store.
        self.shaper.select_fields(fields)?;

        let filtered = spec.clone().without_paging();
        let total = Specification::<T>::default();
        let (data, records_filtered, records_total) =
            futures::try_join!(self.list(&spec), self.count(&filtered), self.count(&total))?;

        let rows = self.shaper.shape_data(&data, fields)?;
        Ok((
            rows,
            RecordsCount {
                records_filtered,
                records_total,
            },
        ))
    }
}

fn insert_sql(table: &str, values: &[(&'static str, SqlValue)]) -> String {
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let placeholders = vec!["?"; columns.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[async_trait]
impl<T: Entity> GenericRepository<T> for SqlRepository<T> {
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {}.id = ?",
            T::select_list().join(", "),
            T::TABLE,
            T::TABLE
        );
        let entity = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(entity)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<T>> {
        self.list(&Specification::default()).await
    }

    async fn add(&self, mut entity: T) -> RepositoryResult<T> {
        entity.stamp(Utc::now(), true);
        let values = entity.values();
        let sql = insert_sql(T::TABLE, &values);

        bind_values!(sqlx::query(&sql), values.into_iter().map(|(_, value)| value))
            .execute(&self.pool)
            .await?;

        log::debug!("Inserted {} {}", T::NAME, entity.id());
        Ok(entity)
    }

    async fn update(&self, mut entity: T) -> RepositoryResult<()> {
        entity.stamp(Utc::now(), false);
        let values: Vec<(&'static str, SqlValue)> = entity
            .values()
            .into_iter()
            .filter(|(column, _)| *column != "id" && *column != "created_at")
            .collect();
        let assignments: Vec<String> = values
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            T::TABLE,
            assignments.join(", ")
        );

        let result = bind_values!(sqlx::query(&sql), values.into_iter().map(|(_, value)| value))
            .bind(entity.id())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            log::debug!("Update of {} {} matched no rows", T::NAME, entity.id());
        }
        Ok(())
    }

    async fn delete(&self, entity: &T) -> RepositoryResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        sqlx::query(&sql)
            .bind(entity.id())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<T>) -> RepositoryResult<()> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for mut entity in entities {
            entity.stamp(now, true);
            let values = entity.values();
            let sql = insert_sql(T::TABLE, &values);
            bind_values!(sqlx::query(&sql), values.into_iter().map(|(_, value)| value))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self, spec: &Specification<T>) -> RepositoryResult<Vec<T>> {
        let query = SpecificationEvaluator::get_query(spec)?;
        self.fetch_all(query).await
    }

    async fn first_or_default(&self, spec: &Specification<T>) -> RepositoryResult<Option<T>> {
        let first = spec.clone().paging(spec.skip().unwrap_or(0), 1);
        let query = SpecificationEvaluator::get_query(&first)?;
        Ok(self.fetch_all(query).await?.into_iter().next())
    }

    async fn count(&self, spec: &Specification<T>) -> RepositoryResult<i64> {
        let query = SpecificationEvaluator::get_count_query(spec)?;
        self.fetch_count(query).await
    }

    async fn get_paged_response(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> RepositoryResult<Vec<T>> {
        let spec = Specification::default().page(page_number, page_size);
        self.list(&spec).await
    }

    async fn get_shaped_response(
        &self,
        order_by: &str,
        fields: &str,
    ) -> RepositoryResult<Vec<ShapedRow>> {
        self.shaper.select_fields(fields)?;
        let spec = Specification::default().order_by(order_by);
        let entities = self.list(&spec).await?;
        self.shaper.shape_data(&entities, fields)
    }
}
