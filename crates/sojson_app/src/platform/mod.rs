mod app;
mod cli;
mod clipboard;
mod config;
mod effects;
mod logging;
mod render;
mod shell;
mod surface;

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sojson_client::ReqwestClient;
use sojson_logging::sojson_info;

use app::Controller;
use cli::{Cli, Command};
use clipboard::{SelectionFallback, SystemClipboard};
use config::{AppConfig, Overrides, RuntimeSettings, BASE_URL_ENV};
use surface::{BufferSurface, FileSurface, TextSurface};

pub fn run_app() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::initialize(cli.log, sojson_logging::level_for(cli.verbose));

    let file_config = AppConfig::load(cli.config.as_deref())?;
    let operation = match &cli.command {
        Some(Command::Shell { operation, .. }) => *operation,
        Some(Command::Run { operation, .. }) => Some(*operation),
        None => None,
    };
    let settings = config::resolve(
        file_config,
        std::env::var(BASE_URL_ENV).ok(),
        Overrides {
            base_url: cli.base_url.clone(),
            download_dir: cli.download_dir.clone(),
            indent: cli.indent,
            operation,
        },
    );
    sojson_info!("using service at {}", settings.client.base_url);

    match cli.command {
        None => run_shell(&settings, None),
        Some(Command::Shell { file, .. }) => run_shell(&settings, file.as_deref()),
        Some(Command::Run {
            input, in_place, ..
        }) => run_once(&settings, input.as_deref(), in_place),
    }
}

fn build_controller(
    settings: &RuntimeSettings,
    surface: Box<dyn TextSurface>,
) -> anyhow::Result<Controller> {
    let client = ReqwestClient::new(settings.client.clone())
        .with_context(|| format!("cannot use service url `{}`", settings.client.base_url))?;
    let controller = Controller::new(
        settings,
        Arc::new(client),
        surface,
        Box::new(SystemClipboard),
        SelectionFallback::stdout(),
        Box::new(io::stderr()),
    )
    .context("failed to start the request worker")?;
    Ok(controller)
}

fn run_shell(settings: &RuntimeSettings, file: Option<&Path>) -> anyhow::Result<ExitCode> {
    let surface: Box<dyn TextSurface> = match file {
        Some(path) => {
            let surface = FileSurface::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            sojson_info!("shell editing {:?}", surface.path());
            Box::new(surface)
        }
        None => Box::new(BufferSurface::default()),
    };
    build_controller(settings, surface)?.run_shell();
    Ok(ExitCode::SUCCESS)
}

fn run_once(
    settings: &RuntimeSettings,
    input: Option<&Path>,
    in_place: bool,
) -> anyhow::Result<ExitCode> {
    let surface: Box<dyn TextSurface> = match input {
        Some(path) if in_place => Box::new(
            FileSurface::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        ),
        Some(path) => Box::new(BufferSurface::new(
            std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?,
        )),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read stdin")?;
            Box::new(BufferSurface::new(text))
        }
    };

    let report = build_controller(settings, surface)?.run_once();

    if let Some(message) = &report.message {
        eprintln!("{message}");
    }
    if report.success && settings.operation.is_transform() && !in_place {
        let mut stdout = io::stdout().lock();
        stdout.write_all(report.text.as_bytes())?;
        if !report.text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    }

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
