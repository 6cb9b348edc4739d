use clap::{Parser, Subcommand};
use coolpay::{ClientConfig, CoolpayClient, DEFAULT_API_URL};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root URL of the Coolpay API
    #[arg(long, env = "COOLPAY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Account username
    #[arg(long, env = "COOLPAY_USERNAME", default_value = "")]
    username: String,

    /// Account API key
    #[arg(long, env = "COOLPAY_APIKEY", default_value = "", hide_env_values = true)]
    apikey: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage recipients
    #[command(subcommand)]
    Recipients(RecipientsCommand),
    /// Manage payments
    #[command(subcommand)]
    Payments(PaymentsCommand),
}

#[derive(Subcommand)]
enum RecipientsCommand {
    /// Register a new recipient
    Add { name: String },
    /// List recipients, optionally filtered by name
    List {
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum PaymentsCommand {
    /// Send a payment to a recipient
    Create {
        amount: Decimal,
        currency: String,
        recipient_id: String,
    },
    /// List payments
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig {
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let client = config.connect().into_diagnostic()?;
    client
        .authenticate(&cli.username, &cli.apikey)
        .await
        .into_diagnostic()?;

    run(&client, cli.command).await
}

async fn run(client: &CoolpayClient, command: Command) -> Result<()> {
    match command {
        Command::Recipients(RecipientsCommand::Add { name }) => {
            let recipient = client.add_recipient(&name).await.into_diagnostic()?;
            print_json(&recipient)
        }
        Command::Recipients(RecipientsCommand::List { name }) => {
            let recipients = client
                .get_recipients(name.as_deref())
                .await
                .into_diagnostic()?;
            recipients.iter().try_for_each(print_json)
        }
        Command::Payments(PaymentsCommand::Create {
            amount,
            currency,
            recipient_id,
        }) => {
            let payment = client
                .create_payment(amount, &currency, &recipient_id)
                .await
                .into_diagnostic()?;
            print_json(&payment)
        }
        Command::Payments(PaymentsCommand::List) => {
            let payments = client.get_payments().await.into_diagnostic()?;
            payments.iter().try_for_each(print_json)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let line = serde_json::to_string(value).into_diagnostic()?;
    println!("{}", line);
    Ok(())
}
