use std::{
    io::{self, BufReader},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{config::API_BASE_URL, DonationClient};
use donation_form::{
    controller::{events::UserNotice, form::FormInput, orchestration::FormController},
    ui::terminal::Terminal,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Register a donation to one of the listed institutions")]
struct Args {
    #[arg(long, default_value = API_BASE_URL)]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let client = DonationClient::with_base_url(&args.server_url)
        .with_context(|| format!("invalid --server-url '{}'", args.server_url))?;
    let controller = FormController::new(Arc::new(client));
    let mut term = Terminal::new(BufReader::new(io::stdin()), io::stdout());

    match run(&controller, &mut term).await {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::info!("input closed; exiting");
            Ok(())
        }
        other => other.context("terminal i/o failed"),
    }
}

async fn run(
    controller: &FormController,
    term: &mut Terminal<BufReader<io::Stdin>, io::Stdout>,
) -> io::Result<()> {
    let panel = controller.load_institutions().await;
    term.render_panel(&panel)?;
    if panel.cards().is_empty() {
        return Ok(());
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut form = FormInput::default();
    loop {
        let panel = controller.panel().await;
        if let Some(index) = term.choose_institution(&panel)? {
            match controller.select_institution(index).await {
                Ok(id) => term.render_notice(&UserNotice::info(format!(
                    "Selected institution {id}"
                )))?,
                Err(err) => term.render_notice(&UserNotice::error(err.to_string()))?,
            }
        }

        form = term.fill_form(&form, &today)?;
        let outcome = controller.submit(&form).await;
        term.render_notice(outcome.notice())?;

        let question = if outcome.clears_form() {
            form.clear();
            "Register another donation?"
        } else {
            "Try again?"
        };
        if !term.confirm(question)? {
            return Ok(());
        }
        term.render_panel(&controller.panel().await)?;
    }
}
