//! Dashboard main entry point

mod render;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fintech_dashboard_core::models::loan::LoanRequest;
use fintech_dashboard_core::models::selection::{SortKey, TypeFilter};
use fintech_dashboard_core::models::settings::Settings;
use fintech_dashboard_core::Dashboard;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(version = "0.1.0")]
#[command(about = "Account overview, loan management and transaction history in the terminal", long_about = None)]
struct Args {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the account overview
    Overview,

    /// List loans, optionally requesting a new one
    Loans {
        /// Amount of the new loan
        #[arg(long)]
        amount: Option<Decimal>,

        /// Tenure of the new loan in months
        #[arg(long)]
        tenure: Option<u32>,

        /// Purpose of the new loan
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Show the transaction history
    Transactions {
        /// Filter by type: all, credit or debit
        #[arg(long = "type", default_value = "all")]
        type_filter: TypeFilter,

        /// Start of the date range (YYYY-MM-DD); needs --to as well
        #[arg(long)]
        from: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD); needs --from as well
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Sort column: date, amount or type. Repeating a column flips its order.
        #[arg(long)]
        sort: Vec<SortKey>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    let rt = Runtime::new()?;
    rt.block_on(run(args.command, settings))
}

async fn run(command: Command, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::new(settings)?;
    let currency = dashboard.settings().currency_symbol.clone();
    log::debug!("Dashboard ready: {dashboard:?}");

    match command {
        Command::Overview => {
            let view = dashboard.open_account_overview().await;
            print!("{}", render::render_overview(view.state(), &currency));
        }
        Command::Loans {
            amount,
            tenure,
            purpose,
        } => {
            let mut view = dashboard.open_loan_management().await;

            if amount.is_some() || tenure.is_some() || purpose.is_some() {
                let request = LoanRequest::new(
                    amount.unwrap_or_default(),
                    tenure.unwrap_or_default(),
                    purpose.unwrap_or_default(),
                );
                let loan = dashboard.request_loan(&mut view, &request).await?;
                println!("Loan request submitted (id {}).\n", loan.id);
            }

            print!("{}", render::render_loans(view.state(), &currency));
        }
        Command::Transactions {
            type_filter,
            from,
            to,
            sort,
        } => {
            let mut view = dashboard.open_transaction_history().await;
            view.set_type_filter(type_filter);
            view.set_date_range(from, to);
            for key in sort {
                view.select_sort(key);
            }

            print!(
                "{}",
                render::render_transactions(&view.display(), view.selection(), &currency)
            );
        }
    }

    Ok(())
}
