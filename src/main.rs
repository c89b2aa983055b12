use anyhow::Result;
use tracing::info;

use tutoriq::graphql::{build_schema, execute, render};
use tutoriq::model::Catalog;

const LIST_QUERY: &str = "{ list { id title } }";
const LIST_WITH_COMMENTS_QUERY: &str = "{ list { id title comments { body } } }";
const TUTORIAL_BY_ID_QUERY: &str = "{ tutorial(id: 1) { title } }";

fn main() -> Result<()> {
    tutoriq::logging::init();

    let catalog = Catalog::populate();
    info!(tutorials = catalog.len(), "catalog ready");

    let schema = build_schema(catalog);

    let runtime = tokio::runtime::Runtime::new()?;
    for query in [LIST_QUERY, LIST_WITH_COMMENTS_QUERY, TUTORIAL_BY_ID_QUERY] {
        let response = runtime.block_on(execute(&schema, query))?;
        println!("{}", render(&response)?);
    }

    Ok(())
}
