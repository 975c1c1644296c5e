use clap::{Parser, Subcommand};
use relay_sdk::{RelayClient, RelayEnvelope, SdkError, SendFileByUrlRequest, SendMessageRequest};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Command-line client for the Green API relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Instance identifier.
    #[arg(short, long)]
    id_instance: String,

    /// Instance access token.
    #[arg(short = 't', long)]
    api_token_instance: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show instance settings
    GetSettings,
    /// Show instance authorization state
    GetStateInstance,
    /// Send a text message
    SendMessage {
        /// Chat ID, e.g. 79001234567@c.us
        #[arg(long)]
        chat_id: String,
        #[arg(long)]
        message: String,
    },
    /// Send a file by URL
    SendFileByUrl {
        #[arg(long)]
        chat_id: String,
        #[arg(long)]
        url_file: String,
        #[arg(long)]
        file_name: String,
        #[arg(long)]
        caption: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RelayClient::new(&cli.url, &cli.id_instance, &cli.api_token_instance);

    let (label, outcome) = match cli.command {
        Commands::GetSettings => ("getSettings", client.get_settings().await),
        Commands::GetStateInstance => ("getStateInstance", client.get_state_instance().await),
        Commands::SendMessage { chat_id, message } => {
            let req = SendMessageRequest {
                chat_id,
                message,
                quoted_message_id: None,
            };
            ("sendMessage", client.send_message(&req).await)
        }
        Commands::SendFileByUrl {
            chat_id,
            url_file,
            file_name,
            caption,
        } => {
            let req = SendFileByUrlRequest {
                chat_id,
                url_file,
                file_name,
                caption,
            };
            ("sendFileByUrl", client.send_file_by_url(&req).await)
        }
    };

    print_envelope(label, outcome)
}

fn print_envelope(
    label: &str,
    outcome: Result<RelayEnvelope, SdkError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        Ok(envelope) => {
            if let Some(error) = &envelope.error {
                eprintln!("{} Error: {}", label, error);
            }
            println!("{}:\n{}", label, serde_json::to_string_pretty(&envelope)?);
            Ok(())
        }
        Err(SdkError::Rejected { status, message }) => {
            eprintln!("Error: relay returned status {}", status);
            eprintln!("Response: {}", message);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
