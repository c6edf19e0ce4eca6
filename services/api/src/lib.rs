mod cli;
mod infra;
mod report;
mod routes;
mod server;

use research_scholar::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
