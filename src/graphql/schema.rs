use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Response, Schema};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Catalog;

use super::types::{Tutorial, TutorialId};

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema over a fully populated catalog.
///
/// The catalog is installed as shared schema data; it is never mutated, so
/// concurrent query execution needs no locking.
pub fn build_schema(catalog: Catalog) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(Arc::new(catalog))
        .finish()
}

/// Run one query and fold a non-empty error list into a single fatal error.
///
/// A by-id miss is not an error: it resolves to a null tutorial inside a
/// successful response.
pub async fn execute(schema: &CatalogSchema, query: &str) -> Result<Response> {
    debug!(%query, "executing query");
    let response = schema.execute(query).await;

    if response.errors.is_empty() {
        Ok(response)
    } else {
        let messages: Vec<String> = response.errors.iter().map(|e| e.message.clone()).collect();
        Err(Error::Execution(messages.join("; ")))
    }
}

/// Serialize a response the way the binary prints it.
pub fn render(response: &Response) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

fn get_catalog(ctx: &Context<'_>) -> Arc<Catalog> {
    Arc::clone(ctx.data::<Arc<Catalog>>().unwrap())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a tutorial by id, or null when the id is unknown, missing, or
    /// not an integer
    async fn tutorial(&self, ctx: &Context<'_>, id: Option<TutorialId>) -> Option<Tutorial> {
        let catalog = get_catalog(ctx);
        let id = id.and_then(TutorialId::get)?;
        catalog.find(id).map(Tutorial::from)
    }

    /// All tutorials, in catalog order
    async fn list(&self, ctx: &Context<'_>) -> Vec<Tutorial> {
        let catalog = get_catalog(ctx);
        catalog.all().iter().map(Tutorial::from).collect()
    }
}
