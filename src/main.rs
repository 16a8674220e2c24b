use crate::cli::Cli;
use brew_ratio::errors::AppResult;
use brew_ratio::models::csv_models::query::OutputRow;
use brew_ratio::scaler::RatioScaler;
use brew_ratio::services::csv_service::{check_amount, run_from_csv_path, write_rows};
use clap::Parser;
use log::info;
use std::io;

mod cli;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();

    let scaler = RatioScaler::new(args.ratio_options())?;

    let rows = match (&args.input, args.by, args.amount) {
        (Some(path), _, _) => run_from_csv_path(path, &scaler)?,
        (None, Some(by), Some(amount)) => {
            let amount = check_amount(amount)?;
            vec![OutputRow::from((by, amount, &scaler.by(by, amount)))]
        }
        _ => {
            // no query, emit the base recipe
            vec![OutputRow::base(&scaler.base().as_result())]
        }
    };

    let out = io::stdout();
    write_rows(&rows, out.lock())
}
