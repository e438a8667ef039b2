//! fincalc CLI
//!
//! One subcommand per instrument. Arguments are taken as text and go through
//! the same validation as any other caller; omitted arguments use the
//! calculator defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fincalc::advisory::RatioResult;
use fincalc::amortization::EmiResult;
use fincalc::calculator::emi_schedule;
use fincalc::compounding::{FixedDepositResult, RecurringDepositResult, SipResult};
use fincalc::format::{abbreviate_inr, format_inr, format_inr_precise, format_percent};
use fincalc::retirement::RetirementResult;
use fincalc::validation::{
    FixedDepositInput, LoanInput, RatioInput, RecurringDepositInput, RetirementInput, SipInput,
};
use fincalc::{evaluate, Assumptions, CalculationOutcome, CalculationRequest, CalculationResult};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Loan, deposit, SIP and retirement calculators")]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly installment for a loan
    Emi {
        #[arg(long)]
        principal: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Also write the month-by-month schedule as CSV to this path
        #[arg(long)]
        schedule: Option<PathBuf>,
    },
    /// Future value of a monthly SIP
    Sip {
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
    },
    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Compounding periods per year (1, 2, 4, 12) or yearly/half-yearly/quarterly/monthly
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Recurring deposit maturity
    Rd {
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        #[arg(long)]
        months: Option<String>,
    },
    /// Retirement corpus and monthly saving
    Retirement {
        #[arg(long)]
        current_age: Option<String>,
        #[arg(long)]
        retirement_age: Option<String>,
        #[arg(long)]
        life_expectancy: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        expense: Option<String>,
    },
    /// Gold/silver price ratio advisory
    Ratio {
        #[arg(long)]
        gold: Option<String>,
        #[arg(long)]
        silver: Option<String>,
    },
    /// Print a request pre-filled with defaults, for use with run_batch
    Template {
        /// emi, sip, fixed_deposit, recurring_deposit, retirement or ratio
        instrument: String,
    },
}

fn or_default(value: Option<String>, default: String) -> String {
    value.unwrap_or(default)
}

/// Request for an instrument subcommand; `None` for `template`
fn build_request(command: Command) -> Option<CalculationRequest> {
    let request = match command {
        Command::Emi { principal, rate, years, .. } => {
            let d = LoanInput::default();
            CalculationRequest::Emi(LoanInput {
                principal: or_default(principal, d.principal),
                annual_rate_percent: or_default(rate, d.annual_rate_percent),
                tenure_years: or_default(years, d.tenure_years),
            })
        }
        Command::Sip { monthly, rate, years } => {
            let d = SipInput::default();
            CalculationRequest::Sip(SipInput {
                monthly_investment: or_default(monthly, d.monthly_investment),
                annual_return_percent: or_default(rate, d.annual_return_percent),
                duration_years: or_default(years, d.duration_years),
            })
        }
        Command::Fd { principal, rate, years, frequency } => {
            let d = FixedDepositInput::default();
            CalculationRequest::FixedDeposit(FixedDepositInput {
                principal: or_default(principal, d.principal),
                annual_rate_percent: or_default(rate, d.annual_rate_percent),
                tenure_years: or_default(years, d.tenure_years),
                compounding_frequency: or_default(frequency, d.compounding_frequency),
            })
        }
        Command::Rd { monthly, rate, years, months } => {
            let d = RecurringDepositInput::default();
            CalculationRequest::RecurringDeposit(RecurringDepositInput {
                monthly_amount: or_default(monthly, d.monthly_amount),
                annual_rate_percent: or_default(rate, d.annual_rate_percent),
                tenure_years: or_default(years, d.tenure_years),
                tenure_months: or_default(months, d.tenure_months),
            })
        }
        Command::Retirement { current_age, retirement_age, life_expectancy, rate, expense } => {
            let d = RetirementInput::default();
            CalculationRequest::Retirement(RetirementInput {
                current_age: or_default(current_age, d.current_age),
                retirement_age: or_default(retirement_age, d.retirement_age),
                life_expectancy: or_default(life_expectancy, d.life_expectancy),
                post_retirement_return_percent: or_default(rate, d.post_retirement_return_percent),
                current_annual_expense: or_default(expense, d.current_annual_expense),
            })
        }
        Command::Ratio { gold, silver } => {
            let d = RatioInput::default();
            CalculationRequest::Ratio(RatioInput {
                price_a: or_default(gold, d.price_a),
                price_b: or_default(silver, d.price_b),
            })
        }
        Command::Template { .. } => return None,
    };
    Some(request)
}

fn amount_line(label: &str, amount: f64) -> String {
    let tag = abbreviate_inr(amount);
    if tag.is_empty() {
        format!("  {:<28} {}", label, format_inr(amount))
    } else {
        format!("  {:<28} {} {}", label, format_inr(amount), tag)
    }
}

fn print_emi(r: &EmiResult) {
    println!("Loan EMI");
    println!("  {:<28} {}", "Monthly EMI", format_inr_precise(r.emi));
    println!("{}", amount_line("Principal", r.principal));
    println!("{}", amount_line("Total interest", r.total_interest));
    println!("{}", amount_line("Total payment", r.total_payment));
}

fn print_sip(r: &SipResult) {
    println!("SIP");
    println!("{}", amount_line("Future value", r.future_value));
    println!("{}", amount_line("Total invested", r.total_invested));
    println!("{}", amount_line("Estimated returns", r.estimated_returns));
}

fn print_fixed_deposit(r: &FixedDepositResult) {
    println!("Fixed deposit");
    println!("{}", amount_line("Maturity amount", r.maturity_amount));
    println!("{}", amount_line("Principal", r.principal));
    println!("{}", amount_line("Interest earned", r.interest_earned));
    println!("  {:<28} {}", "Effective annual yield", format_percent(r.effective_yield_percent));
}

fn print_recurring_deposit(r: &RecurringDepositResult) {
    println!("Recurring deposit");
    println!("{}", amount_line("Maturity amount", r.maturity_amount));
    println!("{}", amount_line("Total invested", r.total_invested));
    println!("{}", amount_line("Interest earned", r.interest_earned));
}

fn print_retirement(r: &RetirementResult) {
    println!(
        "Retirement in {} years, lasting {} years",
        r.years_to_retirement, r.years_in_retirement
    );
    println!("{}", amount_line("Corpus needed", r.corpus));
    println!("{}", amount_line("Monthly saving", r.monthly_saving));
    println!("{}", amount_line("Annual expense at retirement", r.annual_expense_at_retirement));
    println!("  {:<28} {}", "Real return", format_percent(r.real_return_rate * 100.0));
}

fn print_ratio(r: &RatioResult) {
    println!("Gold/silver ratio: {:.2}", r.ratio);
    println!("  {} {}", r.icon, r.label);
}

fn print_result(result: &CalculationResult) {
    match result {
        CalculationResult::Emi(r) => print_emi(r),
        CalculationResult::Sip(r) => print_sip(r),
        CalculationResult::FixedDeposit(r) => print_fixed_deposit(r),
        CalculationResult::RecurringDeposit(r) => print_recurring_deposit(r),
        CalculationResult::Retirement(r) => print_retirement(r),
        CalculationResult::Ratio(r) => print_ratio(r),
    }
}

fn write_schedule(input: &LoanInput, path: &Path) -> Result<()> {
    let table = emi_schedule(input)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    table.write_csv(file)?;

    let summary = table.summary();
    log::info!(
        "wrote {} schedule rows to {} (interest {:.2})",
        summary.total_months,
        path.display(),
        summary.total_interest
    );
    Ok(())
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = Assumptions::from_env();

    if let Command::Template { instrument } = &cli.command {
        let request = CalculationRequest::defaults(instrument)?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(ExitCode::SUCCESS);
    }

    let schedule_path = match &cli.command {
        Command::Emi { schedule, .. } => schedule.clone(),
        _ => None,
    };

    let Some(request) = build_request(cli.command) else {
        return Ok(ExitCode::SUCCESS);
    };
    let evaluated = evaluate(&request, &assumptions);
    let succeeded = evaluated.is_ok();

    if let (true, Some(path), CalculationRequest::Emi(input)) = (succeeded, &schedule_path, &request) {
        write_schedule(input, path)?;
    }

    if cli.json {
        let outcome = CalculationOutcome::from(evaluated);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &evaluated {
            Ok(result) => print_result(result),
            Err(errors) => {
                eprintln!("Invalid input:");
                for e in errors.errors() {
                    eprintln!("  {}", e);
                }
            }
        }
    }

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
