//! Scripted interactive sessions.

use clap::ColorChoice;

use tabview_cli::render::{OutputFormat, RenderOptions};
use tabview_cli::session::{PROMPT, run_session};
use tabview_core::{FlattenPlan, NO_MATCHING_DATA, TableController};
use tabview_model::{SortDirection, SourceRecord};

fn controller() -> TableController {
    let records: Vec<SourceRecord> = ["Rome", "Berlin", "Oslo"]
        .into_iter()
        .map(|city| SourceRecord::new().with_field("city", city).with_field("zip", 100))
        .collect();
    let mut controller = TableController::new(FlattenPlan::generic());
    controller.load_batch(&records);
    controller
}

fn run(controller: &mut TableController, script: &str, format: OutputFormat) -> String {
    let options = RenderOptions {
        format,
        color: ColorChoice::Never,
        width: None,
    };
    let mut out = Vec::new();
    run_session(controller, &options, script.as_bytes(), &mut out).expect("session");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn sort_commands_toggle_the_column() {
    let mut controller = controller();
    let output = run(&mut controller, "sort city\nsort city\nquit\n", OutputFormat::Csv);

    assert_eq!(controller.direction("city"), SortDirection::Ascending);
    assert_eq!(controller.direction("zip"), SortDirection::Unsorted);
    let ascending = output.find("city,zip\nBerlin").expect("ascending render");
    let descending = output.rfind("city,zip\nRome").expect("descending render");
    assert!(ascending < descending);
}

#[test]
fn filter_and_clear() {
    let mut controller = controller();
    let output = run(
        &mut controller,
        "filter xyz\nclear\n",
        OutputFormat::Table,
    );
    assert!(output.contains(NO_MATCHING_DATA));
    assert_eq!(controller.filter_term(), "");
    assert!(output.trim_end().ends_with(PROMPT.trim_end()));
}

#[test]
fn unknown_header_and_command_are_reported() {
    let mut controller = controller();
    let output = run(&mut controller, "sort planet\nfly\n", OutputFormat::Csv);
    assert!(output.contains("unknown header: planet"));
    assert!(output.contains("unknown command: fly"));
    assert!(!controller.headers().contains("planet"));
}

#[test]
fn state_lists_every_header() {
    let mut controller = controller();
    let output = run(&mut controller, "sort zip\nstate\nheaders\n", OutputFormat::Csv);
    assert!(output.contains("city: UNSORTED"));
    assert!(output.contains("zip: DESCENDING"));
    assert!(output.contains("filter: \"\""));
}
