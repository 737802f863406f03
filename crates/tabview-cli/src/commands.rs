use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ColorChoice;
use tracing::{info, info_span};

use tabview_cli::logging::redact_value;
use tabview_cli::render::{OutputFormat, RenderOptions, write_view};
use tabview_cli::session::run_session;
use tabview_cli::source::{SourceArgs, load_controller};

use crate::cli::{BrowseArgs, OutputFormatArg, ShowArgs};

pub fn run_show(args: &ShowArgs, color: ColorChoice) -> Result<()> {
    let span = info_span!("show");
    let _guard = span.enter();
    let mut controller = load_controller(&args.source);
    for header in &args.sort {
        let applied = controller.click_header(header);
        info!(header = %header, %applied, "sorted");
    }
    controller.set_filter(args.filter.as_str());
    let view = controller.view();
    info!(
        filter = redact_value(&args.filter),
        visible_rows = view.rows.len(),
        total_rows = controller.rows().len(),
        "rendering"
    );
    let options = RenderOptions {
        format: output_format(args.format),
        color,
        width: args.width,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_view(&view, &options, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}

pub fn run_headers(args: &SourceArgs) -> Result<()> {
    let controller = load_controller(args);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for header in controller.headers() {
        writeln!(out, "{header}").context("write headers")?;
    }
    Ok(())
}

pub fn run_browse(args: &BrowseArgs, color: ColorChoice) -> Result<()> {
    let span = info_span!("browse");
    let _guard = span.enter();
    let mut controller = load_controller(&args.source);
    let options = RenderOptions {
        format: OutputFormat::Table,
        color,
        width: args.width,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(&mut controller, &options, stdin.lock(), &mut out)
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
