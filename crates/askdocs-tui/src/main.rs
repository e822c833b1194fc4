//! AskDocs chat widget — terminal client for the AskDocs proxy.

use clap::Parser;

use askdocs_sdk::ChatProxyClient;

mod app;
mod markdown;
mod panel;
mod tui;
mod ui;

/// Terminal chat widget for the AskDocs assistant.
#[derive(Parser, Debug)]
#[command(name = "askdocs", about = "Chat with the docs assistant")]
struct Args {
    /// Base URL of the AskDocs proxy.
    #[arg(long, default_value = "http://localhost:3002")]
    proxy_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = ChatProxyClient::new(&args.proxy_url);

    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new(250);
    let app = app::App::new(client, events.sender());

    let result = app.run(&mut terminal, &mut events).await;
    tui::restore()?;
    result
}
