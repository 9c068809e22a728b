pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use anyhow::{Context, Result};
use app::events::AppEvent;
use app::state::{AppState, Command, parse_command};
use cli::Cli;
use data::Provider;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing();
    cli.validate()?;

    if cli.one_shot {
        run_one_shot(&cli).await
    } else {
        run_interactive(cli).await
    }
}

/// Logs go to stderr so they never interleave with rendered output.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run_one_shot(cli: &Cli) -> Result<()> {
    let city = cli.city_query().unwrap_or_default();
    let provider = Provider::from_cli(cli);
    let report = provider
        .lookup(city)
        .await
        .with_context(|| format!("weather lookup for '{city}' failed"))?;
    println!(
        "{}",
        ui::render_report(&report, cli.units.into(), cli.icon_mode(), None)
    );
    Ok(())
}

async fn run_interactive(cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let mut app = AppState::new(&cli);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    info!(demo = app.demo, "starting interactive session");
    if let Some(city) = cli.city_query() {
        app.handle_event(AppEvent::Command(Command::Lookup(city.to_string())), &tx);
    }
    print_screen(&app);

    while app.running {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line.context("failed to read stdin")? {
                    Some(line) => app.handle_event(AppEvent::Command(parse_command(&line)), &tx),
                    None => {
                        debug!("stdin closed");
                        stdin_open = false;
                    }
                }
            }
            Some(event) = rx.recv() => app.handle_event(event, &tx),
            else => break,
        }

        if app.running {
            print_screen(&app);
        }
        if !stdin_open && !app.is_loading() {
            break;
        }
    }

    Ok(())
}

fn print_screen(app: &AppState) {
    println!("{}\n", ui::render(app));
}
