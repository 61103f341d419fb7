//! End-to-end listing behavior through the Diesel repository.

use chrono::Utc;
use meridian_erp::domain::client::{ClientType, NewClient};
use meridian_erp::domain::order::NewSalesOrder;
use meridian_erp::domain::product::{MovementKind, NewProduct, NewStockMovement};
use meridian_erp::query::{ListQuery, SortDir};
use meridian_erp::repository::{
    ClientReader, ClientWriter, DieselRepository, InventoryReader, InventoryWriter, ProductWriter,
    SalesOrderReader, SalesOrderWriter,
};
use serde_json::json;

mod common;

fn seed_clients(repo: &DieselRepository, names: &[(&str, ClientType)]) {
    let clients: Vec<NewClient> = names
        .iter()
        .map(|(name, client_type)| {
            NewClient::new(name.to_string(), None, None, None, *client_type)
        })
        .collect();
    repo.create_clients(&clients).unwrap();
}

#[test]
fn unknown_sort_key_falls_back_to_id_ascending() {
    let test_db = common::TestDb::new("test_unknown_sort_fallback.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Zeta", ClientType::Individual),
            ("Alpha", ClientType::Individual),
        ],
    );

    // "nonsense" is not sortable; the requested DESC direction is dropped
    // along with the key.
    let page = repo
        .list_clients(ListQuery::new().sort("nonsense", SortDir::Desc))
        .unwrap();
    assert_eq!(page.items[0].name, "Zeta");
    assert_eq!(page.items[1].name, "Alpha");
}

#[test]
fn declared_sort_key_orders_results() {
    let test_db = common::TestDb::new("test_declared_sort.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Zeta", ClientType::Individual),
            ("Alpha", ClientType::Individual),
            ("Mid", ClientType::Individual),
        ],
    );

    let page = repo
        .list_clients(ListQuery::new().sort("name", SortDir::Asc))
        .unwrap();
    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn pagination_clamps_out_of_range_input() {
    let test_db = common::TestDb::new("test_pagination_clamps.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(&repo, &[("Alice", ClientType::Individual)]);

    let page = repo
        .list_clients(ListQuery::new().page(0).per_page(500))
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 100);

    let page = repo
        .list_clients(ListQuery::new().page(99).per_page(10))
        .unwrap();
    assert_eq!(page.total, 1);
    assert!(page.items.is_empty());
}

#[test]
fn pagination_walks_pages_deterministically() {
    let test_db = common::TestDb::new("test_pagination_walk.db");
    let repo = DieselRepository::new(test_db.pool());
    let names: Vec<String> = (1..=5).map(|i| format!("Client {i:02}")).collect();
    let clients: Vec<NewClient> = names
        .iter()
        .map(|name| NewClient::new(name.clone(), None, None, None, ClientType::Individual))
        .collect();
    repo.create_clients(&clients).unwrap();

    let first = repo
        .list_clients(ListQuery::new().page(1).per_page(2))
        .unwrap();
    let second = repo
        .list_clients(ListQuery::new().page(2).per_page(2))
        .unwrap();
    let third = repo
        .list_clients(ListQuery::new().page(3).per_page(2))
        .unwrap();

    assert_eq!(first.last_page, 3);
    let seen: Vec<String> = first
        .items
        .iter()
        .chain(second.items.iter())
        .chain(third.items.iter())
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(seen, names);
}

#[test]
fn member_filter_drops_undeclared_values() {
    let test_db = common::TestDb::new("test_member_filter.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Alice", ClientType::Individual),
            ("Corp", ClientType::Company),
        ],
    );

    let page = repo
        .list_clients(ListQuery::new().filter("client_type", json!(["company", "bogus"])))
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Corp");

    // Every value undeclared: the filter matches zero rows.
    let page = repo
        .list_clients(ListQuery::new().filter("client_type", json!(["bogus"])))
        .unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[test]
fn malformed_date_range_disables_the_filter() {
    let test_db = common::TestDb::new("test_malformed_date_range.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(&repo, &[("Alice", ClientType::Individual)]);

    let page = repo
        .list_clients(ListQuery::new().filter("created_at", json!(["not-a-date", "either"])))
        .unwrap();
    assert_eq!(page.total, 1);

    // A well-formed range far in the past excludes today's rows.
    let page = repo
        .list_clients(ListQuery::new().filter("created_at", json!(["2001-01-01", "2001-01-02"])))
        .unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn date_range_covers_whole_days() {
    let test_db = common::TestDb::new("test_date_range_days.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(&repo, &[("Alice", ClientType::Individual)]);

    // A single-day range built from today's date must include rows
    // created at any time of that day.
    let today = Utc::now().date_naive();
    let iso = today.format("%Y-%m-%d").to_string();
    let page = repo
        .list_clients(ListQuery::new().filter("created_at", json!([iso.clone(), iso])))
        .unwrap();
    assert_eq!(page.total, 1);
}

#[test]
fn search_is_ignored_without_searchable_columns() {
    let test_db = common::TestDb::new("test_search_ignored.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct {
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            category: "tools".to_string(),
            price: 1.0,
            stock: 0,
        })
        .unwrap();
    repo.adjust_stock(&NewStockMovement::new(
        product.id,
        MovementKind::Inbound,
        5,
        None,
    ))
    .unwrap();

    // Movements declare no searchable columns, so the term has no effect.
    let page = repo
        .list_stock_movements(product.id, ListQuery::new().search("anything"))
        .unwrap();
    assert_eq!(page.total, 1);
}

#[test]
fn blank_search_matches_everything() {
    let test_db = common::TestDb::new("test_blank_search.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Alice", ClientType::Individual),
            ("Bob", ClientType::Individual),
        ],
    );

    let page = repo.list_clients(ListQuery::new().search("   ")).unwrap();
    assert_eq!(page.total, 2);
}

#[test]
fn search_reaches_related_tables() {
    let test_db = common::TestDb::new("test_related_search.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Corp Industries", ClientType::Company),
            ("Alice", ClientType::Individual),
        ],
    );
    let clients = repo.list_clients(ListQuery::new()).unwrap().items;
    let corp = clients.iter().find(|c| c.name == "Corp Industries").unwrap();
    let alice = clients.iter().find(|c| c.name == "Alice").unwrap();

    let now = Utc::now().naive_utc();
    repo.create_sales_order(&NewSalesOrder::draft(corp.id, 100.0, now))
        .unwrap();
    repo.create_sales_order(&NewSalesOrder::draft(alice.id, 50.0, now))
        .unwrap();

    // The term misses every order reference but matches the joined
    // client name through the existential sub-condition.
    let page = repo
        .list_sales_orders(ListQuery::new().search("Industries"))
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].client_name.as_deref(), Some("Corp Industries"));
}

#[test]
fn sorting_by_projected_relation_column() {
    let test_db = common::TestDb::new("test_virtual_sort.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_clients(
        &repo,
        &[
            ("Zeta Corp", ClientType::Company),
            ("Alpha Ltd", ClientType::Company),
        ],
    );
    let clients = repo.list_clients(ListQuery::new()).unwrap().items;

    let now = Utc::now().naive_utc();
    for client in &clients {
        repo.create_sales_order(&NewSalesOrder::draft(client.id, 10.0, now))
            .unwrap();
    }

    let page = repo
        .list_sales_orders(ListQuery::new().sort("client_name", SortDir::Asc))
        .unwrap();
    let names: Vec<Option<&str>> = page
        .items
        .iter()
        .map(|o| o.client_name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Alpha Ltd"), Some("Zeta Corp")]);
}
