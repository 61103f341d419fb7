//! Generic list-query engine.
//!
//! Every listing endpoint in the application is served by the same machinery:
//! a static [`QuerySpec`] describes what an entity allows (searchable columns,
//! sortable keys, filter rules, relations, soft-delete visibility), a
//! per-request [`ListQuery`] carries what the caller asked for, and
//! [`plan::ExecutionPlan`] resolves the two into joins, predicates and
//! ordering that the repository layer renders to SQL.

use std::collections::HashMap;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod date_range;
pub mod fulltext;
pub mod plan;

/// Requested sort direction. Defaults to ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Comparison semantics of a declared filter.
#[derive(Clone, Copy, Debug)]
pub enum FilterKind {
    /// Record matches when the column value is one of the given values.
    InSet,
    /// First element of the value array parsed as a loose boolean;
    /// unparseable input drops the predicate.
    BoolFlag,
    /// Two-element array of millisecond timestamps normalized to an
    /// inclusive start-of-day/end-of-day interval.
    DateRange,
    /// Like [`FilterKind::InSet`] but values outside the closed
    /// enumeration are discarded. A filter emptied this way matches
    /// nothing.
    Member(&'static [&'static str]),
}

/// One filter the entity accepts: request key, target column, semantics.
///
/// The column may be qualified (`clients.name`) to point into a declared
/// relation, which makes the planner add the join on demand.
#[derive(Clone, Copy, Debug)]
pub struct FilterRule {
    pub key: &'static str,
    pub column: &'static str,
    pub kind: FilterKind,
}

/// A many-to-one relation the entity can reach.
#[derive(Clone, Copy, Debug)]
pub struct RelationSpec {
    /// Related table name.
    pub table: &'static str,
    /// Foreign-key column on the base table (e.g. `client_id`).
    pub local_key: &'static str,
    /// Referenced column on the related table, normally `id`.
    pub foreign_key: &'static str,
    /// Related columns projected into every listed row as `(column, alias)`.
    /// A non-empty projection makes the join unconditional.
    pub projected: &'static [(&'static str, &'static str)],
    /// Related columns the free-text search extends into through an
    /// existential sub-condition.
    pub searchable: &'static [&'static str],
}

/// Whether listings show logically deleted rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletedVisibility {
    Include,
    Exclude,
    Only,
}

/// Soft-delete marker column and the entity's declared visibility policy.
#[derive(Clone, Copy, Debug)]
pub struct SoftDelete {
    pub column: &'static str,
    pub visibility: DeletedVisibility,
}

/// Static, per-entity declaration of everything the list engine may use.
///
/// Declared once per entity as a `const` and shared by all requests.
#[derive(Clone, Copy, Debug)]
pub struct QuerySpec {
    pub table: &'static str,
    /// Primary-key column, used for the fallback sort and the implicit
    /// secondary tiebreaker.
    pub id_column: &'static str,
    /// Sortable key applied when the requested one is not declared.
    pub default_sort: &'static str,
    /// Columns matched by substring search, in declaration order.
    pub searchable: &'static [&'static str],
    /// Columns covered by a boolean-mode full-text index, when the backing
    /// store has one.
    pub fulltext: &'static [&'static str],
    /// Sortable key -> column. The column may be qualified into a relation.
    pub sortable: &'static [(&'static str, &'static str)],
    pub filters: &'static [FilterRule],
    pub relations: &'static [RelationSpec],
    pub soft_delete: Option<SoftDelete>,
}

impl QuerySpec {
    /// Resolves a requested sort key against the declared sortable set.
    pub fn sortable_column(&self, key: &str) -> Option<&'static str> {
        self.sortable
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, col)| *col)
    }

    pub fn relation(&self, table: &str) -> Option<&RelationSpec> {
        self.relations.iter().find(|r| r.table == table)
    }
}

/// What the backing store can do beyond plain SQL.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreCapabilities {
    /// Boolean-mode full-text matching (`MATCH ... AGAINST`). SQLite
    /// deployments leave this off and fall back to substring search.
    pub boolean_fulltext: bool,
}

/// Planner configuration, passed explicitly instead of living in globals.
#[derive(Clone, Copy, Debug)]
pub struct PlannerConfig {
    /// Fixed UTC offset used to anchor date-range day boundaries.
    pub tz_offset: FixedOffset,
    pub capabilities: StoreCapabilities,
    pub default_per_page: usize,
    /// Ceiling applied to the requested page size.
    pub max_per_page: usize,
}

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tz_offset: FixedOffset::east_opt(0).expect("zero offset is valid"),
            capabilities: StoreCapabilities::default(),
            default_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_per_page: MAX_ITEMS_PER_PAGE,
        }
    }
}

/// One request's pagination, sorting, search and filter parameters.
///
/// Values arrive untrusted from the caller; the planner validates each of
/// them and silently falls back rather than erroring, so a list endpoint
/// always produces a page.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub page: usize,
    pub per_page: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
    pub search: Option<String>,
    pub filters: HashMap<String, Value>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort(mut self, key: impl Into<String>, dir: SortDir) -> Self {
        self.sort_by = Some(key.into());
        self.sort_dir = dir;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.filters.insert(key.into(), value);
        self
    }
}
