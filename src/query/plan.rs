//! Resolution of a [`ListQuery`] against a [`QuerySpec`] into an
//! executable plan, and rendering of that plan to parameterized SQL.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::query::date_range::normalize_date_range;
use crate::query::fulltext::build_boolean_query;
use crate::query::{
    DeletedVisibility, FilterKind, ListQuery, PlannerConfig, QuerySpec, SortDir,
};

/// A value bound positionally into the rendered SQL.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

/// One resolved WHERE condition. Predicates at the top level of the plan
/// are AND-combined; [`Predicate::AnyOf`] groups OR-combined alternatives.
#[derive(Clone, Debug)]
pub enum Predicate {
    Like { column: String, pattern: String },
    InSet { column: String, values: Vec<String> },
    Flag { column: String, value: bool },
    DateBetween {
        column: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    IsNull { column: String },
    IsNotNull { column: String },
    /// Boolean-mode full-text match, only planned when the backing store
    /// declares the capability.
    Fulltext { columns: Vec<String>, query: String },
    /// Existential sub-condition scoped to a related table, used to extend
    /// substring search into relation columns without joining.
    ExistsRelated {
        table: String,
        foreign_key: String,
        base_table: String,
        local_key: String,
        likes: Vec<(String, String)>,
    },
    AnyOf(Vec<Predicate>),
}

/// A left join required by a sort key, a qualified filter column or an
/// eager projection. Added at most once per related table.
#[derive(Clone, Debug, PartialEq)]
pub struct Join {
    pub table: String,
    pub foreign_key: String,
    pub base_table: String,
    pub local_key: String,
}

/// Fully resolved query: ready to render and execute, nothing left to
/// validate. Request-local and consumed once.
#[derive(Clone, Debug)]
pub struct ExecutionPlan {
    pub base_table: String,
    /// Extra projected columns, rendered as `table.column AS alias`.
    pub projection: Vec<(String, String)>,
    pub joins: Vec<Join>,
    pub predicates: Vec<Predicate>,
    pub order_by: Vec<(String, SortDir)>,
    pub page: usize,
    pub per_page: usize,
}

impl ExecutionPlan {
    /// Resolves the request against the entity declaration.
    ///
    /// All identifier text comes from the `const` [`QuerySpec`], never from
    /// the request; request values only ever become bind parameters.
    pub fn resolve(spec: &QuerySpec, query: &ListQuery, config: &PlannerConfig) -> Self {
        let per_page = query
            .per_page
            .filter(|n| *n > 0)
            .unwrap_or(config.default_per_page)
            .min(config.max_per_page);
        let page = query.page.max(1);

        let mut plan = Self {
            base_table: spec.table.to_string(),
            projection: Vec::new(),
            joins: Vec::new(),
            predicates: Vec::new(),
            order_by: Vec::new(),
            page,
            per_page,
        };

        for relation in spec.relations {
            for (column, alias) in relation.projected {
                plan.ensure_join(spec, relation.table);
                plan.projection
                    .push((format!("{}.{}", relation.table, column), (*alias).to_string()));
            }
        }

        plan.resolve_order(spec, query);
        plan.resolve_soft_delete(spec);
        plan.resolve_search(spec, query, config);
        plan.resolve_filters(spec, query, config);

        plan
    }

    fn qualify(&self, column: &str) -> String {
        if column.contains('.') {
            column.to_string()
        } else {
            format!("{}.{}", self.base_table, column)
        }
    }

    /// Adds the join for `table` exactly once.
    fn ensure_join(&mut self, spec: &QuerySpec, table: &str) -> bool {
        if self.joins.iter().any(|j| j.table == table) {
            return true;
        }
        match spec.relation(table) {
            Some(relation) => {
                self.joins.push(Join {
                    table: relation.table.to_string(),
                    foreign_key: relation.foreign_key.to_string(),
                    base_table: spec.table.to_string(),
                    local_key: relation.local_key.to_string(),
                });
                true
            }
            None => {
                log::warn!("query spec for {} has no relation to {table}", spec.table);
                false
            }
        }
    }

    /// Joins needed when a resolved column points into a related table.
    fn ensure_join_for_column(&mut self, spec: &QuerySpec, column: &str) -> bool {
        match column.split_once('.') {
            Some((table, _)) if table != spec.table => self.ensure_join(spec, table),
            _ => true,
        }
    }

    fn resolve_order(&mut self, spec: &QuerySpec, query: &ListQuery) {
        // Unknown sort keys silently fall back to the declared default,
        // ascending.
        let mut column = spec
            .sortable_column(spec.default_sort)
            .unwrap_or(spec.id_column);
        let mut dir = SortDir::Asc;
        if let Some(requested) = query
            .sort_by
            .as_deref()
            .and_then(|key| spec.sortable_column(key))
            && self.ensure_join_for_column(spec, requested)
        {
            column = requested;
            dir = query.sort_dir;
        }

        let column = self.qualify(column);
        let id_column = self.qualify(spec.id_column);
        self.order_by.push((column.clone(), dir));
        // Implicit tiebreaker keeps pagination reproducible across requests.
        if column != id_column {
            self.order_by.push((id_column, SortDir::Asc));
        }
    }

    fn resolve_soft_delete(&mut self, spec: &QuerySpec) {
        if let Some(policy) = spec.soft_delete {
            let column = self.qualify(policy.column);
            match policy.visibility {
                DeletedVisibility::Include => {}
                DeletedVisibility::Exclude => self.predicates.push(Predicate::IsNull { column }),
                DeletedVisibility::Only => self.predicates.push(Predicate::IsNotNull { column }),
            }
        }
    }

    fn resolve_search(&mut self, spec: &QuerySpec, query: &ListQuery, config: &PlannerConfig) {
        let Some(term) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
        else {
            return;
        };

        if config.capabilities.boolean_fulltext && !spec.fulltext.is_empty() {
            self.predicates.push(Predicate::Fulltext {
                columns: spec.fulltext.iter().map(|c| self.qualify(c)).collect(),
                query: build_boolean_query(term),
            });
            return;
        }

        let pattern = format!("%{term}%");
        let mut alternatives: Vec<Predicate> = spec
            .searchable
            .iter()
            .map(|column| Predicate::Like {
                column: self.qualify(column),
                pattern: pattern.clone(),
            })
            .collect();

        for relation in spec.relations {
            if relation.searchable.is_empty() {
                continue;
            }
            alternatives.push(Predicate::ExistsRelated {
                table: relation.table.to_string(),
                foreign_key: relation.foreign_key.to_string(),
                base_table: spec.table.to_string(),
                local_key: relation.local_key.to_string(),
                likes: relation
                    .searchable
                    .iter()
                    .map(|column| {
                        (format!("{}.{}", relation.table, column), pattern.clone())
                    })
                    .collect(),
            });
        }

        // No searchable columns declared: the search input is ignored.
        match alternatives.len() {
            0 => {}
            1 => self.predicates.push(alternatives.pop().expect("one element")),
            _ => self.predicates.push(Predicate::AnyOf(alternatives)),
        }
    }

    fn resolve_filters(&mut self, spec: &QuerySpec, query: &ListQuery, config: &PlannerConfig) {
        // Iterating the declared rules, not the request map, keeps predicate
        // order deterministic and drops unknown filter keys on the floor.
        for rule in spec.filters {
            let Some(raw) = query.filters.get(rule.key) else {
                continue;
            };
            if !self.ensure_join_for_column(spec, rule.column) {
                continue;
            }
            let column = self.qualify(rule.column);

            let predicate = match rule.kind {
                FilterKind::InSet => {
                    let values = scalar_strings(raw);
                    (!values.is_empty()).then_some(Predicate::InSet { column, values })
                }
                FilterKind::BoolFlag => coerce_values(raw)
                    .first()
                    .and_then(parse_loose_bool)
                    .map(|value| Predicate::Flag { column, value }),
                FilterKind::DateRange => normalize_date_range(raw, config.tz_offset)
                    .map(|(start, end)| Predicate::DateBetween { column, start, end }),
                FilterKind::Member(allowed) => {
                    // The predicate stays even when every value was dropped;
                    // an all-undeclared filter matches zero rows, not all of
                    // them.
                    let values: Vec<String> = scalar_strings(raw)
                        .into_iter()
                        .filter(|v| allowed.contains(&v.as_str()))
                        .collect();
                    Some(Predicate::InSet { column, values })
                }
            };

            if let Some(predicate) = predicate {
                self.predicates.push(predicate);
            }
        }
    }

    /// Renders the item-selection statement.
    pub fn items_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = format!("SELECT {}.*", self.base_table);
        for (column, alias) in &self.projection {
            sql.push_str(&format!(", {column} AS {alias}"));
        }
        sql.push_str(&format!(" FROM {}", self.base_table));
        self.push_joins(&mut sql);

        let mut binds = Vec::new();
        self.push_where(&mut sql, &mut binds);

        let order: Vec<String> = self
            .order_by
            .iter()
            .map(|(column, dir)| format!("{column} {}", dir.as_sql()))
            .collect();
        sql.push_str(&format!(" ORDER BY {}", order.join(", ")));

        let limit = self.per_page as i64;
        let offset = (self.page as i64 - 1) * limit;
        sql.push_str(&format!(" LIMIT {limit} OFFSET {offset}"));

        (sql, binds)
    }

    /// Renders the matching-row count statement.
    pub fn count_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = format!("SELECT COUNT(*) AS count FROM {}", self.base_table);
        self.push_joins(&mut sql);
        let mut binds = Vec::new();
        self.push_where(&mut sql, &mut binds);
        (sql, binds)
    }

    fn push_joins(&self, sql: &mut String) {
        for join in &self.joins {
            sql.push_str(&format!(
                " LEFT JOIN {t} ON {t}.{fk} = {b}.{lk}",
                t = join.table,
                fk = join.foreign_key,
                b = join.base_table,
                lk = join.local_key,
            ));
        }
    }

    fn push_where(&self, sql: &mut String, binds: &mut Vec<BindValue>) {
        if self.predicates.is_empty() {
            return;
        }
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|p| render_predicate(p, binds))
            .collect();
        sql.push_str(&format!(" WHERE {}", clauses.join(" AND ")));
    }
}

fn render_predicate(predicate: &Predicate, binds: &mut Vec<BindValue>) -> String {
    match predicate {
        Predicate::Like { column, pattern } => {
            binds.push(BindValue::Text(pattern.clone()));
            format!("{column} LIKE ?")
        }
        Predicate::InSet { column, values } => {
            if values.is_empty() {
                return "1 = 0".to_string();
            }
            let placeholders = vec!["?"; values.len()].join(", ");
            binds.extend(values.iter().cloned().map(BindValue::Text));
            format!("{column} IN ({placeholders})")
        }
        Predicate::Flag { column, value } => {
            binds.push(BindValue::Bool(*value));
            format!("{column} = ?")
        }
        Predicate::DateBetween { column, start, end } => {
            binds.push(BindValue::Timestamp(*start));
            binds.push(BindValue::Timestamp(*end));
            format!("{column} BETWEEN ? AND ?")
        }
        Predicate::IsNull { column } => format!("{column} IS NULL"),
        Predicate::IsNotNull { column } => format!("{column} IS NOT NULL"),
        Predicate::Fulltext { columns, query } => {
            binds.push(BindValue::Text(query.clone()));
            format!("MATCH({}) AGAINST (? IN BOOLEAN MODE)", columns.join(", "))
        }
        Predicate::ExistsRelated {
            table,
            foreign_key,
            base_table,
            local_key,
            likes,
        } => {
            let conditions: Vec<String> = likes
                .iter()
                .map(|(column, pattern)| {
                    binds.push(BindValue::Text(pattern.clone()));
                    format!("{column} LIKE ?")
                })
                .collect();
            format!(
                "EXISTS (SELECT 1 FROM {table} WHERE {table}.{foreign_key} = \
                 {base_table}.{local_key} AND ({}))",
                conditions.join(" OR ")
            )
        }
        Predicate::AnyOf(alternatives) => {
            let clauses: Vec<String> = alternatives
                .iter()
                .map(|p| render_predicate(p, binds))
                .collect();
            format!("({})", clauses.join(" OR "))
        }
    }
}

/// Coerces a raw filter value to an array: arrays pass through, scalars
/// are wrapped as a single element.
fn coerce_values(raw: &Value) -> Vec<Value> {
    match raw {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

fn scalar_strings(raw: &Value) -> Vec<String> {
    coerce_values(raw)
        .into_iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// Loose boolean parsing for flag filters. Unparseable input yields `None`
/// and the predicate is dropped.
fn parse_loose_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterRule, RelationSpec, SoftDelete, StoreCapabilities};
    use serde_json::json;

    const ORDERS_SPEC: QuerySpec = QuerySpec {
        table: "orders",
        id_column: "id",
        default_sort: "id",
        searchable: &["reference"],
        fulltext: &["reference"],
        sortable: &[
            ("id", "id"),
            ("total", "total"),
            ("client_name", "clients.name"),
        ],
        filters: &[
            FilterRule {
                key: "status",
                column: "status",
                kind: FilterKind::Member(&["draft", "confirmed"]),
            },
            FilterRule {
                key: "settled",
                column: "settled",
                kind: FilterKind::BoolFlag,
            },
            FilterRule {
                key: "issued_at",
                column: "issued_at",
                kind: FilterKind::DateRange,
            },
        ],
        relations: &[RelationSpec {
            table: "clients",
            local_key: "client_id",
            foreign_key: "id",
            projected: &[],
            searchable: &["name", "email"],
        }],
        soft_delete: Some(SoftDelete {
            column: "deleted_at",
            visibility: DeletedVisibility::Exclude,
        }),
    };

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn default_plan_orders_by_id_with_limit() {
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &ListQuery::new(), &config());
        let (sql, binds) = plan.items_sql();
        assert_eq!(
            sql,
            "SELECT orders.* FROM orders WHERE orders.deleted_at IS NULL \
             ORDER BY orders.id ASC LIMIT 10 OFFSET 0"
        );
        assert!(binds.is_empty());
    }

    #[test]
    fn unknown_sort_key_falls_back_to_default() {
        let query = ListQuery::new().sort("not_a_real_column", SortDir::Desc);
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        assert_eq!(plan.order_by, vec![("orders.id".to_string(), SortDir::Asc)]);
        assert!(plan.joins.is_empty());
    }

    #[test]
    fn virtual_sort_key_adds_join_once_and_tiebreaker() {
        let query = ListQuery::new()
            .sort("client_name", SortDir::Desc)
            .filter("status", json!(["draft"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        assert_eq!(plan.joins.len(), 1);
        let (sql, _) = plan.items_sql();
        assert!(sql.contains("LEFT JOIN clients ON clients.id = orders.client_id"));
        assert!(sql.contains("ORDER BY clients.name DESC, orders.id ASC"));
        assert_eq!(sql.matches("LEFT JOIN").count(), 1);
    }

    #[test]
    fn search_is_or_combined_and_extends_into_relations() {
        let query = ListQuery::new().search("acme");
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, binds) = plan.items_sql();
        assert!(sql.contains(
            "(orders.reference LIKE ? OR EXISTS (SELECT 1 FROM clients WHERE \
             clients.id = orders.client_id AND (clients.name LIKE ? OR clients.email LIKE ?)))"
        ));
        assert_eq!(
            binds,
            vec![
                BindValue::Text("%acme%".to_string()),
                BindValue::Text("%acme%".to_string()),
                BindValue::Text("%acme%".to_string()),
            ]
        );
    }

    #[test]
    fn fulltext_capability_switches_search_strategy() {
        let mut config = config();
        config.capabilities = StoreCapabilities {
            boolean_fulltext: true,
        };
        let query = ListQuery::new().search("steel rod");
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config);
        let (sql, binds) = plan.items_sql();
        assert!(sql.contains("MATCH(orders.reference) AGAINST (? IN BOOLEAN MODE)"));
        assert_eq!(binds, vec![BindValue::Text("+steel* +rod*".to_string())]);
    }

    #[test]
    fn blank_search_adds_no_predicate() {
        let query = ListQuery::new().search("   ");
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        assert_eq!(plan.predicates.len(), 1); // soft-delete only
    }

    #[test]
    fn search_without_searchable_columns_is_ignored() {
        const BARE: QuerySpec = QuerySpec {
            table: "movements",
            id_column: "id",
            default_sort: "id",
            searchable: &[],
            fulltext: &[],
            sortable: &[("id", "id")],
            filters: &[],
            relations: &[],
            soft_delete: None,
        };
        let query = ListQuery::new().search("anything");
        let plan = ExecutionPlan::resolve(&BARE, &query, &config());
        assert!(plan.predicates.is_empty());
    }

    #[test]
    fn enum_filter_drops_undeclared_values() {
        let query = ListQuery::new().filter("status", json!(["draft", "bogus"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, binds) = plan.count_sql();
        assert!(sql.contains("orders.status IN (?)"));
        assert_eq!(binds, vec![BindValue::Text("draft".to_string())]);

        // Nothing declared survives: the filter matches zero rows instead
        // of disappearing.
        let query = ListQuery::new().filter("status", json!(["bogus"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, binds) = plan.count_sql();
        assert!(sql.contains("1 = 0"));
        assert!(binds.is_empty());
    }

    #[test]
    fn scalar_filter_value_is_coerced_to_array() {
        let query = ListQuery::new().filter("status", json!("draft"));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, _) = plan.count_sql();
        assert!(sql.contains("orders.status IN (?)"));
    }

    #[test]
    fn unparseable_bool_flag_is_omitted() {
        let query = ListQuery::new().filter("settled", json!(["maybe"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, _) = plan.count_sql();
        assert!(!sql.contains("settled"));

        let query = ListQuery::new().filter("settled", json!(["1"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, binds) = plan.count_sql();
        assert!(sql.contains("orders.settled = ?"));
        assert_eq!(binds, vec![BindValue::Bool(true)]);
    }

    #[test]
    fn malformed_date_range_disables_the_predicate() {
        let query = ListQuery::new().filter("issued_at", json!([null, 123]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, _) = plan.count_sql();
        assert!(!sql.contains("issued_at"));
    }

    #[test]
    fn date_range_renders_between_with_day_bounds() {
        let query = ListQuery::new().filter("issued_at", json!([0, 0]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        let (sql, binds) = plan.count_sql();
        assert!(sql.contains("orders.issued_at BETWEEN ? AND ?"));
        assert_eq!(binds.len(), 2);
    }

    #[test]
    fn unknown_filter_keys_are_ignored() {
        let query = ListQuery::new().filter("no_such_filter", json!(["x"]));
        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &query, &config());
        assert_eq!(plan.predicates.len(), 1); // soft-delete only
    }

    #[test]
    fn per_page_is_defaulted_and_capped() {
        let plan = ExecutionPlan::resolve(
            &ORDERS_SPEC,
            &ListQuery::new().per_page(10_000).page(3),
            &config(),
        );
        assert_eq!(plan.per_page, 100);
        let (sql, _) = plan.items_sql();
        assert!(sql.ends_with("LIMIT 100 OFFSET 200"));

        let plan = ExecutionPlan::resolve(&ORDERS_SPEC, &ListQuery::new().page(0), &config());
        assert_eq!(plan.page, 1);
        assert_eq!(plan.per_page, 10);
    }

    #[test]
    fn loose_bool_parsing() {
        assert_eq!(parse_loose_bool(&json!(true)), Some(true));
        assert_eq!(parse_loose_bool(&json!(0)), Some(false));
        assert_eq!(parse_loose_bool(&json!("Yes")), Some(true));
        assert_eq!(parse_loose_bool(&json!("off")), Some(false));
        assert_eq!(parse_loose_bool(&json!("2")), None);
        assert_eq!(parse_loose_bool(&json!(null)), None);
    }
}
