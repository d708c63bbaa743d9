mod cli;
mod demo;
mod render;
mod terminal;

use career_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
