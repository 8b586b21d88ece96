//! Companion sender: fires one beacon callback at a receiver.
//!
//! Defaults to the local machine's hostname and the `USER` environment
//! variable, matching what an implant would report.

use clap::Parser;

#[derive(Parser)]
#[command(name = "beacon-send")]
#[command(about = "Send a test beacon callback to a receiver", long_about = None)]
struct Cli {
    /// Receiver host.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Receiver port.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Hostname to report; defaults to this machine's hostname.
    #[arg(long)]
    hostname: Option<String>,

    /// Username to report; defaults to $USER.
    #[arg(long)]
    username: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let reported_hostname = match cli.hostname {
        Some(name) => name,
        None => hostname::get()?.to_string_lossy().into_owned(),
    };
    let reported_username = match cli.username {
        Some(name) => name,
        None => std::env::var("USER").unwrap_or_default(),
    };

    let url = format!("http://{}:{}/", cli.host, cli.port);
    let client = reqwest::Client::new();

    let response = client
        .get(&url)
        .query(&[
            ("hostname", reported_hostname.as_str()),
            ("username", reported_username.as_str()),
        ])
        .send()
        .await?;

    println!(
        "{} -> {} (hostname={}, username={})",
        url,
        response.status(),
        reported_hostname,
        reported_username
    );

    Ok(())
}
