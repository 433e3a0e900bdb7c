//! Jobs CLI
//!
//! Command-line interface over the job salary derivations:
//! - Load configuration from environment (and `.env`)
//! - Build the reference repository and the converter
//! - Run one derivation and print it as text or JSON

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use jobs_hex::{JobDerivationService, RateConverter};
use jobs_repo::{InMemoryJobRepo, build_repo};
use jobs_types::{AppError, CurrencyCode, CurrencyConverter, JobId, JobSummary};

type Service = JobDerivationService<InMemoryJobRepo, RateConverter>;

#[derive(Parser)]
#[command(name = "jobs")]
#[command(author, version, about = "Job salary lookup CLI", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Currency salaries are stored in (USD, EUR, GBP, INR)
    #[arg(long, global = true, env = "JOBS_SOURCE_CURRENCY")]
    from: Option<CurrencyCode>,

    /// Currency to convert salaries to (USD, EUR, GBP, INR)
    #[arg(long, global = true, env = "JOBS_TARGET_CURRENCY")]
    to: Option<CurrencyCode>,

    /// Explicit exchange rate, overriding the fixed table
    #[arg(long, global = true, env = "JOBS_EXCHANGE_RATE")]
    rate: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all jobs
    List,
    /// Show one job
    Show {
        /// Job ID
        id: String,
    },
    /// Salary of a job (0 if it does not exist)
    Salary { id: String },
    /// Salary converted to the target currency (0 if the job does not exist)
    Convert { id: String },
    /// Check whether a job belongs to an organisation (case-sensitive)
    Org {
        id: String,
        /// Organisation name
        name: String,
    },
    /// Sum of two salaries (absent unless both jobs exist)
    Sum { first: String, second: String },
    /// Gap between the best-paid job and this one
    Gap { id: String },
    /// Every derived value for one job
    Summary { id: String },
    /// Print the walkthrough scenario
    Demo,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jobs_cli=debug,jobs_hex=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_job_id(s: &str) -> Result<JobId, AppError> {
    s.parse::<JobId>().map_err(AppError::from)
}

/// Salary in the target currency; a converter failure becomes invalid input.
fn converted_salary(service: &Service, id: &JobId) -> Result<f64, AppError> {
    service.salary_in_other_currency(id).map_err(AppError::from)
}

/// Renders an optional amount, spelling out absence.
fn amount_text(amount: Option<f64>) -> String {
    amount.map_or_else(|| "absent".to_string(), |a| format!("{:.2}", a))
}

fn summary_text(s: &JobSummary) -> String {
    format!(
        "#{} {} at {}\n  salary:    {:.2}\n  converted: {}{:.2}\n  gap:       {:.2}",
        s.id,
        s.role,
        s.company,
        s.salary,
        s.currency.symbol(),
        s.converted_salary,
        s.gap_vs_max
    )
}

fn print_output(json: bool, text: String, value: serde_json::Value) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn run_demo(service: &Service, as_json: bool) -> Result<()> {
    let two = JobId::from("2");
    let four = JobId::from("4");
    let five = JobId::from("5");
    let one = JobId::from("1");
    let missing = JobId::from("42");
    let currency = service.converter().target_currency();

    let salary = service.salary_of(&two);
    let converted = converted_salary(service, &two)?;
    let gap = service.salary_gap_vs_max(&four);
    let from_apple = service.is_from_organization(&five, "Apple");
    let sum = service.sum_of_two_salaries(&one, &missing);

    let text = [
        format!("Salary of job {}: {:.2}", two, salary),
        format!("Salary of job {} in {}: {:.2}", two, currency, converted),
        format!(
            "Gap between job {} and the best-paid job: {}",
            four,
            amount_text(gap)
        ),
        format!("Job {} is at Apple: {}", five, from_apple),
        format!("Sum of jobs {} and {}: {}", one, missing, amount_text(sum)),
    ]
    .join("\n");

    print_output(
        as_json,
        text,
        json!({
            "salary_of": { "id": two, "value": salary },
            "salary_in_other_currency": { "id": two, "currency": currency, "value": converted },
            "salary_gap_vs_max": { "id": four, "value": gap },
            "is_from_organization": { "id": five, "name": "Apple", "value": from_apple },
            "sum_of_two_salaries": { "ids": [one, missing], "value": sum },
        }),
    )
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = config::Config::from_env()?.with_overrides(cli.from, cli.to, cli.rate);
    tracing::debug!(?config, "Configuration loaded");

    let repo = build_repo()?;
    let converter = config.converter()?;
    tracing::debug!(
        from = %converter.source_currency(),
        to = %converter.target_currency(),
        rate = converter.rate(),
        "Converter ready"
    );

    let service = JobDerivationService::new(repo, converter);

    match cli.command {
        Commands::List => {
            let jobs = service.jobs();
            let text = jobs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            print_output(cli.json, text, json!(jobs))?;
        }

        Commands::Show { id } => {
            let id = parse_job_id(&id)?;
            let job = service.job(&id)?;
            print_output(cli.json, job.to_string(), json!(job))?;
        }

        Commands::Salary { id } => {
            let id = parse_job_id(&id)?;
            let salary = service.salary_of(&id);
            print_output(
                cli.json,
                format!("{:.2}", salary),
                json!({ "id": id, "salary": salary }),
            )?;
        }

        Commands::Convert { id } => {
            let id = parse_job_id(&id)?;
            let currency = service.converter().target_currency();
            let converted = converted_salary(&service, &id)?;
            print_output(
                cli.json,
                format!("{}{:.2}", currency.symbol(), converted),
                json!({ "id": id, "currency": currency, "salary": converted }),
            )?;
        }

        Commands::Org { id, name } => {
            let id = parse_job_id(&id)?;
            let matches = service.is_from_organization(&id, &name);
            print_output(
                cli.json,
                matches.to_string(),
                json!({ "id": id, "organization": name, "matches": matches }),
            )?;
        }

        Commands::Sum { first, second } => {
            let (first, second) = (parse_job_id(&first)?, parse_job_id(&second)?);
            let sum = service.sum_of_two_salaries(&first, &second);
            print_output(
                cli.json,
                amount_text(sum),
                json!({ "ids": [first, second], "sum": sum }),
            )?;
        }

        Commands::Gap { id } => {
            let id = parse_job_id(&id)?;
            let gap = service.salary_gap_vs_max(&id);
            print_output(
                cli.json,
                amount_text(gap),
                json!({ "id": id, "gap_vs_max": gap }),
            )?;
        }

        Commands::Summary { id } => {
            let id = parse_job_id(&id)?;
            let summary = service.summary(&id).map_err(AppError::from)?;
            let text = summary
                .as_ref()
                .map_or_else(|| "absent".to_string(), summary_text);
            print_output(cli.json, text, json!(summary))?;
        }

        Commands::Demo => run_demo(&service, cli.json)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use jobs_repo::Dataset;
    use jobs_types::{ExchangeError, Job};

    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["jobs", "sum", "1", "42", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Sum { ref first, ref second } if first == "1" && second == "42"
        ));
    }

    #[test]
    fn test_converter_flags_read_env() {
        let command = Cli::command();
        let env_of = |name: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == name)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("from").as_deref(), Some("JOBS_SOURCE_CURRENCY"));
        assert_eq!(env_of("to").as_deref(), Some("JOBS_TARGET_CURRENCY"));
        assert_eq!(env_of("rate").as_deref(), Some("JOBS_EXCHANGE_RATE"));
    }

    #[test]
    fn test_blank_job_id_is_invalid_input() {
        assert!(matches!(parse_job_id("  "), Err(AppError::InvalidInput(_))));
        assert_eq!(parse_job_id(" 5 ").unwrap(), JobId::from("5"));
    }

    #[test]
    fn test_conversion_failure_is_invalid_input() {
        let dataset = Dataset::from_jobs([Job::new("n", "Acme", "Welder", -1.0)]).unwrap();
        let service =
            JobDerivationService::new(InMemoryJobRepo::new(dataset), RateConverter::default());

        let err = converted_salary(&service, &JobId::from("n")).unwrap_err();

        assert!(matches!(
            err,
            AppError::InvalidInput(ref msg)
                if *msg == ExchangeError::InvalidAmount(Some(-1.0)).to_string()
        ));
    }

    #[test]
    fn test_cli_parses_currency_override() {
        let cli = Cli::try_parse_from(["jobs", "convert", "2", "--to", "gbp"]).unwrap();
        assert_eq!(cli.to, Some(CurrencyCode::GBP));
    }

    #[test]
    fn test_cli_rejects_unknown_currency() {
        assert!(Cli::try_parse_from(["jobs", "convert", "2", "--to", "XYZ"]).is_err());
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(Some(35000.0)), "35000.00");
        assert_eq!(amount_text(None), "absent");
    }
}
