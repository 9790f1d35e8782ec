use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Client CLI for the Arithmetic Operations API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Add two numbers
    Add { num1: String, num2: String },
    /// Subtract the second number from the first
    Subtract { num1: String, num2: String },
    /// Multiply two numbers
    Multiply { num1: String, num2: String },
    /// Divide the first number by the second
    Divide { num1: String, num2: String },
    /// Raise a base to an exponent
    Exponentiate { base: String, exponent: String },
    /// Take the square root of a number
    Squareroot { num: String },
    /// Compute dividend mod divisor
    Modulo { dividend: String, divisor: String },
    /// Take the absolute value of a number
    Abs { num: String },
}

impl Commands {
    /// Path and query string for the target endpoint.
    fn path_and_query(&self) -> String {
        match self {
            Commands::Health => "/health".to_string(),
            Commands::Add { num1, num2 } => {
                format!("/add?num1={num1}&num2={num2}")
            }
            Commands::Subtract { num1, num2 } => {
                format!("/subtract?num1={num1}&num2={num2}")
            }
            Commands::Multiply { num1, num2 } => {
                format!("/multiply?num1={num1}&num2={num2}")
            }
            Commands::Divide { num1, num2 } => {
                format!("/divide?num1={num1}&num2={num2}")
            }
            Commands::Exponentiate { base, exponent } => {
                format!("/exponentiate?base={base}&exponent={exponent}")
            }
            Commands::Squareroot { num } => {
                format!("/squareroot?num={num}")
            }
            Commands::Modulo { dividend, divisor } => {
                format!("/modulo?dividend={dividend}&divisor={divisor}")
            }
            Commands::Abs { num } => {
                format!("/abs?num={num}")
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}{}", cli.url, cli.command.path_and_query()))
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {status}");
        eprintln!("Response: {body}");
        std::process::exit(1);
    }

    println!("{body}");
    Ok(())
}
