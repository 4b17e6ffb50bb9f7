//! fincalc CLI
//!
//! Command-line access to every calculator. `--json` prints the same JSON the
//! HTTP API returns.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use fincalc::credit::{estimate_credit_score, CreditScoreInput};
use fincalc::currency::convert_currency;
use fincalc::deposit::{compute_fd_maturity, compute_rd_maturity, DEFAULT_COMPOUNDING_PER_YEAR};
use fincalc::loan::{amortization_schedule, batch, compare_loans, LoanTerms};
use fincalc::tax::{compute_gst, GstMode};
use fincalc::ReferenceData;

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Loan, tax, deposit, credit and currency calculators")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing currency_rates.csv / bank_holidays.csv
    #[arg(long, global = true, env = "FINCALC_REFERENCE_DIR")]
    reference_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// EMI, total payment and total interest for a loan
    Emi {
        principal: f64,
        annual_rate_percent: f64,
        months: i64,
    },
    /// Compare two loans side by side
    Compare {
        p1: f64,
        r1: f64,
        m1: i64,
        p2: f64,
        r2: f64,
        m2: i64,
    },
    /// Month-by-month amortization schedule
    Schedule {
        principal: f64,
        annual_rate_percent: f64,
        months: i64,
    },
    /// Add or remove GST
    Gst {
        amount: f64,
        gst_rate: f64,
        /// "add" adds tax to the amount; anything else removes it
        #[arg(long, default_value = "add")]
        mode: String,
    },
    /// Fixed deposit maturity
    Fd {
        principal: f64,
        annual_rate: f64,
        years: f64,
        #[arg(long, default_value_t = DEFAULT_COMPOUNDING_PER_YEAR, value_parser = clap::value_parser!(u32).range(1..))]
        comp_per_year: u32,
    },
    /// Recurring deposit maturity
    Rd {
        monthly_installment: f64,
        annual_rate: f64,
        months: i64,
    },
    /// Demo credit score heuristic (not a real scoring model)
    CreditScore {
        #[arg(long)]
        payment_history_pct: f64,
        #[arg(long)]
        utilization_pct: f64,
        #[arg(long)]
        credit_age_years: f64,
        #[arg(long)]
        inquiries: i64,
        #[arg(long)]
        dti_pct: f64,
    },
    /// Convert between currencies using the static table or a custom rate
    Convert {
        amount: f64,
        from_code: String,
        to_code: String,
        #[arg(long)]
        custom_rate: Option<f64>,
    },
    /// List bank holidays (upcoming only with --upcoming)
    Holidays {
        #[arg(long)]
        upcoming: bool,
    },
    /// Evaluate loan scenarios from a CSV file (id,principal,annual_rate_percent,months)
    Batch {
        input: PathBuf,
        /// Output CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let reference = ReferenceData::load(cli.reference_dir.as_deref())
        .context("failed to load reference data")?;

    match cli.command {
        Command::Emi { principal, annual_rate_percent, months } => {
            let summary = LoanTerms::new(principal, annual_rate_percent, months).summary();
            if cli.json {
                return print_json(&summary);
            }
            println!("EMI:            {:>14.2}", summary.emi);
            println!("Total payment:  {:>14.2}", summary.total_payment);
            println!("Total interest: {:>14.2}", summary.total_interest);
        }

        Command::Compare { p1, r1, m1, p2, r2, m2 } => {
            let cmp = compare_loans(&LoanTerms::new(p1, r1, m1), &LoanTerms::new(p2, r2, m2));
            if cli.json {
                return print_json(&cmp);
            }
            println!("{:<16} {:>14} {:>14}", "", "Loan A", "Loan B");
            println!("{}", "-".repeat(46));
            println!("{:<16} {:>14.2} {:>14.2}", "EMI", cmp.loan_a.emi, cmp.loan_b.emi);
            println!(
                "{:<16} {:>14.2} {:>14.2}",
                "Total payment", cmp.loan_a.total_payment, cmp.loan_b.total_payment
            );
            println!(
                "{:<16} {:>14.2} {:>14.2}",
                "Total interest", cmp.loan_a.total_interest, cmp.loan_b.total_interest
            );
        }

        Command::Schedule { principal, annual_rate_percent, months } => {
            let rows = amortization_schedule(principal, annual_rate_percent, months)?;
            if cli.json {
                return print_json(&rows);
            }
            println!(
                "{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}",
                "Month", "Opening", "Payment", "Interest", "Principal", "Closing"
            );
            println!("{}", "-".repeat(74));
            for row in &rows {
                println!(
                    "{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                    row.month,
                    row.opening_balance,
                    row.emi,
                    row.interest,
                    row.principal,
                    row.closing_balance
                );
            }
        }

        Command::Gst { amount, gst_rate, mode } => {
            let result = compute_gst(amount, gst_rate, GstMode::from_mode_str(&mode));
            if cli.json {
                return print_json(&result);
            }
            println!("Base:  {:>14.2}", result.base);
            println!("GST:   {:>14.2}", result.gst);
            println!("Gross: {:>14.2}", result.gross);
        }

        Command::Fd { principal, annual_rate, years, comp_per_year } => {
            let result = compute_fd_maturity(principal, annual_rate, years, comp_per_year);
            if cli.json {
                return print_json(&result);
            }
            println!("Maturity: {:>14.2}", result.maturity);
            println!("Interest: {:>14.2}", result.interest);
        }

        Command::Rd { monthly_installment, annual_rate, months } => {
            let result = compute_rd_maturity(monthly_installment, annual_rate, months);
            if cli.json {
                return print_json(&result);
            }
            println!("Maturity: {:>14.2}", result.maturity);
            println!("Interest: {:>14.2}", result.interest);
        }

        Command::CreditScore {
            payment_history_pct,
            utilization_pct,
            credit_age_years,
            inquiries,
            dti_pct,
        } => {
            let result = estimate_credit_score(&CreditScoreInput {
                payment_history_pct,
                utilization_pct,
                credit_age_years,
                inquiries,
                dti_pct,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Score: {} ({})", result.score, result.band);
            println!("Note: demo heuristic only, not a real credit bureau score");
        }

        Command::Convert { amount, from_code, to_code, custom_rate } => {
            let result = convert_currency(&reference.rates, amount, &from_code, &to_code, custom_rate)?;
            if cli.json {
                return print_json(&result);
            }
            println!(
                "{} {} = {:.4} {}",
                amount,
                from_code.to_uppercase(),
                result.converted,
                to_code.to_uppercase()
            );
            println!("Rate used: {} ({})", result.rate_used, result.note.as_str());
        }

        Command::Holidays { upcoming } => {
            let calendar = &reference.holidays;
            let today = chrono::Local::now().date_naive();
            let holidays = if upcoming {
                calendar.upcoming(today)
            } else {
                calendar.holidays()
            };
            if cli.json {
                return print_json(&holidays);
            }
            println!("Bank holidays: {} {} (today {})", calendar.country(), calendar.year(), today);
            println!("{}", "-".repeat(46));
            for h in holidays {
                println!("{}  {}", h.date, h.name);
            }
        }

        Command::Batch { input, output } => {
            let scenarios = batch::load_scenarios(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            let results = batch::evaluate_scenarios(&scenarios);

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    batch::write_results(file, &results)?;
                    eprintln!("Wrote {} results to {}", results.len(), path.display());
                }
                None => batch::write_results(io::stdout().lock(), &results)?,
            }
        }
    }

    Ok(())
}
