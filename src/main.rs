use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jambo_timesheet::assets::logo_source;
use jambo_timesheet::config::Config;
use jambo_timesheet::duration::estimate_duration;
use jambo_timesheet::export::{ExportMode, ExportOutcome, export};
use jambo_timesheet::store::{FormStore, StoredForm};
use jambo_timesheet::{Error, RenderOptions, TimesheetRecord, render_timesheet};

/// Render an interpreter timesheet to a paginated A4 PDF.
#[derive(Parser, Debug)]
#[command(name = "jambo-timesheet")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Timesheet JSON file, or `-` for stdin
    input: Option<PathBuf>,

    /// Render the empty template (declaration text only)
    #[arg(long)]
    blank: bool,

    /// Hand the PDF to the share command instead of saving it
    #[arg(long)]
    share: bool,

    /// Start from the last saved form, with the input's fields on top
    #[arg(long)]
    restore: bool,

    /// Do not remember this form for the next run
    #[arg(long)]
    no_save: bool,

    /// Logo file or http(s) URL
    #[arg(long)]
    logo: Option<String>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Print the duration between two HH:MM times and exit
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    duration: Option<Vec<String>>,
}

fn read_input(input: Option<&PathBuf>) -> Result<Option<String>, Error> {
    match input {
        None => Ok(None),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
        Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
    }
}

fn run(args: Args) -> Result<(), Error> {
    if let Some(times) = &args.duration {
        if let [start, end] = times.as_slice() {
            println!("{}", estimate_duration(start, end).unwrap_or_default());
        }
        return Ok(());
    }

    let mut config = Config::from_env();
    if args.logo.is_some() {
        config.logo = args.logo.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.state_dir.is_some() {
        config.state_dir = args.state_dir.clone();
    }

    let store = config.state_dir.as_ref().map(FormStore::new);
    let saved = store.as_ref().map(FormStore::load).unwrap_or_default();

    let base = if args.restore {
        saved.form.clone()
    } else {
        TimesheetRecord::default()
    };
    let mut record = match read_input(args.input.as_ref())? {
        Some(json) => base.merged_with_json(&json)?,
        None => base,
    };
    record.refresh_duration();

    let options = RenderOptions {
        blank: args.blank,
        ..RenderOptions::default()
    };
    let logo = logo_source(config.logo.as_deref());
    let rendered = render_timesheet(&record, &options, logo.as_ref())?;

    let mode = if args.share {
        ExportMode::Share
    } else {
        ExportMode::Download
    };
    match export(
        &rendered,
        mode,
        &config.output_dir,
        config.share_command.as_deref(),
    )? {
        ExportOutcome::Saved(path) => println!("{}", path.display()),
        ExportOutcome::Shared(path) => println!("shared {}", path.display()),
    }

    if let Some(store) = store.filter(|_| !args.no_save) {
        store.save(&StoredForm {
            form: record,
            preview_open: saved.preview_open,
        })?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
