//! Executes a resolved [`ExecutionPlan`] against SQLite.
//!
//! Plans are rendered to raw parameterized SQL because the set of joins,
//! predicates and the ordering are only known at run time. Identifier text
//! in the rendered statements always originates from a `const`
//! [`QuerySpec`]; request input is only ever bound as a parameter.

use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_query;
use diesel::sql_types::{BigInt, Bool, Text, Timestamp};
use diesel::sqlite::{Sqlite, SqliteConnection};
use diesel::{QueryableByName, RunQueryDsl};

use crate::pagination::PageResult;
use crate::query::plan::{BindValue, ExecutionPlan};
use crate::query::{ListQuery, PlannerConfig, QuerySpec};
use crate::repository::errors::RepositoryResult;

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

fn bind_all(
    query: BoxedSqlQuery<'static, Sqlite, SqlQuery>,
    binds: Vec<BindValue>,
) -> BoxedSqlQuery<'static, Sqlite, SqlQuery> {
    binds.into_iter().fold(query, |query, bind| match bind {
        BindValue::Text(value) => query.bind::<Text, _>(value),
        BindValue::Int(value) => query.bind::<BigInt, _>(value),
        BindValue::Bool(value) => query.bind::<Bool, _>(value),
        BindValue::Timestamp(value) => query.bind::<Timestamp, _>(value),
    })
}

/// Runs the full list pipeline for one entity: resolve, count, fetch.
///
/// The count runs first so an empty page still reports an accurate total.
pub(crate) fn run_list_query<T>(
    conn: &mut SqliteConnection,
    spec: &QuerySpec,
    query: &ListQuery,
    config: &PlannerConfig,
) -> RepositoryResult<PageResult<T>>
where
    T: QueryableByName<Sqlite> + 'static,
{
    let plan = ExecutionPlan::resolve(spec, query, config);

    let (count_sql, count_binds) = plan.count_sql();
    log::debug!("list count: {count_sql}");
    let total = bind_all(sql_query(count_sql).into_boxed(), count_binds)
        .get_result::<CountRow>(conn)?
        .count;

    let (items_sql, item_binds) = plan.items_sql();
    log::debug!("list items: {items_sql}");
    let items = bind_all(sql_query(items_sql).into_boxed(), item_binds).load::<T>(conn)?;

    Ok(PageResult::new(
        items,
        plan.page,
        plan.per_page,
        total as usize,
    ))
}
