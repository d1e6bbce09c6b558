mod cli;
mod export;
mod infra;
mod report;
mod routes;
mod server;

use intern_insights::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
