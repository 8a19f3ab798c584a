mod cli;
mod commands;
mod infra;

use admission_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
