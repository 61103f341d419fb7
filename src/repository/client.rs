use chrono::Utc;
use diesel::prelude::*;

use crate::domain::client::{CLIENT_TYPES, Client, NewClient, UpdateClient};
use crate::pagination::PageResult;
use crate::query::{
    DeletedVisibility, FilterKind, FilterRule, ListQuery, QuerySpec, SoftDelete,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::list::run_list_query;
use crate::repository::{ClientReader, ClientWriter, DieselRepository};

/// Listing declaration for clients. Soft-deleted rows stay visible so
/// historical documents keep resolving their counterparty.
pub const CLIENT_SPEC: QuerySpec = QuerySpec {
    table: "clients",
    id_column: "id",
    default_sort: "id",
    searchable: &["name", "email", "phone", "identification"],
    fulltext: &["name", "email", "identification"],
    sortable: &[
        ("id", "id"),
        ("name", "name"),
        ("email", "email"),
        ("created_at", "created_at"),
    ],
    filters: &[
        FilterRule {
            key: "client_type",
            column: "client_type",
            kind: FilterKind::Member(CLIENT_TYPES),
        },
        FilterRule {
            key: "created_at",
            column: "created_at",
            kind: FilterKind::DateRange,
        },
    ],
    relations: &[],
    soft_delete: Some(SoftDelete {
        column: "deleted_at",
        visibility: DeletedVisibility::Include,
    }),
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_clients(&self, query: ListQuery) -> RepositoryResult<PageResult<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = self.conn()?;
        let page = run_list_query::<DbClient>(&mut conn, &CLIENT_SPEC, &query, self.planner())?;
        Ok(page.map(Into::into))
    }
}

impl ClientWriter for DieselRepository {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize> {
        use crate::models::client::NewClient as DbNewClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewClient> = new_clients.iter().map(Into::into).collect();
        let affected = diesel::insert_into(clients::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id))
            .set((&db_updates, clients::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_client(&self, client_id: i32) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        diesel::update(clients::table.find(client_id))
            .set((
                clients::deleted_at.eq(Some(now)),
                clients::updated_at.eq(now),
            ))
            .execute(&mut conn)?;
        Ok(())
    }
}
