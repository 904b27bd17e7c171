use std::env;
use std::io;
use std::process::ExitCode;

use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use menu_cart::csv::{read_commands, write_lines};
use menu_cart::menu::{Catalog, fetch_extras, fetch_menu};
use menu_cart::{Cart, MenuConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: menu-cart <commands.csv>");
        return ExitCode::FAILURE;
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let commands = match read_commands(path.clone()) {
        Ok(commands) => commands,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = MenuConfig::from_env();
    let (categories, extras) = tokio::join!(fetch_menu(&config), fetch_extras(&config));
    let catalog = Catalog::new(categories, extras);
    info!(
        categories = catalog.categories().len(),
        extras = catalog.extras().len(),
        "catalog ready"
    );

    let mut cart = Cart::new();
    let (command_sender, command_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in commands {
            let command = match result {
                Ok(row) => catalog.resolve(row),
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            };
            match command {
                Ok(command) => {
                    if command_sender.send(command).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!("{e}"),
            }
        }
    });

    cart.run(ReceiverStream::new(command_receiver)).await;

    info!(
        lines = cart.len(),
        items = cart.item_count(),
        total = %cart.total(),
        "cart ready"
    );

    match write_lines(cart.lines(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
