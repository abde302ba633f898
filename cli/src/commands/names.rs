use tally_common::config::Config;
use tally_core::database::SqlxQueryExecutor;
use tally_core::names::NameQueryService;
use tracing::info;

use crate::terminal::print;

pub async fn names(cfg: &Config, unique: bool) -> anyhow::Result<()> {
    anyhow::ensure!(
        !cfg.database_url.is_empty(),
        "no database configured; pass --database-url or set DATABASE_URL"
    );

    let executor = SqlxQueryExecutor::connect(cfg).await?;
    let service = NameQueryService::new(&executor);

    let result = if unique {
        service.get_unique_names().await
    } else {
        service.get_names().await
    };
    executor.pool().close().await;
    let names: Vec<String> = result?;

    print::header(if unique { "unique names" } else { "names" });
    if names.is_empty() {
        print::print_status("The users table is empty");
    }
    for (idx, name) in names.iter().enumerate() {
        print::entry(idx, name, None);
    }
    print::end_of_program();

    info!("{} name(s) listed", names.len());
    Ok(())
}
