use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use vkeyboard::{
    infrastructure::{
        cli::Cli,
        config::Config,
        storage::{load_language, FileStore},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let store = FileStore::in_dir(&config.config.data_dir);
    let language = args.lang.unwrap_or_else(|| load_language(&store));
    log::info!("Starting in {language}");

    let print = args.print || config.keyboard.print_on_exit;
    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        AppRunner::new(&config, args.text, language, Box::new(store), tui)
    };
    runner.run().await?;

    if print {
        println!("{}", runner.text());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
