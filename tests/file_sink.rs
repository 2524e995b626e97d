use std::fs::{self, File};

use tablog::{Logger, Options, TabHandler, attrs};
use tempfile::TempDir;

#[test]
fn handler_writes_lines_to_a_file_sink() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");

    let file = File::create(&path).unwrap();
    let logger = Logger::new(TabHandler::new(file, Options::new().time_format("")));

    logger.info("started", attrs!["pid" => 4242]);
    logger.warn("low disk", attrs!["free_mb" => 512]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "INFO\tstarted pid=4242\nWARN\tlow disk free_mb=512\n"
    );
}

#[test]
fn derived_lineages_share_one_file_sink() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("shared.log");

    let file = File::create(&path).unwrap();
    let logger = Logger::new(TabHandler::new(file, Options::new().time_format("")));
    let tagged = logger.with_tag("NET");

    logger.info("plain", attrs![]);
    tagged.info("tagged", attrs![]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "INFO\tplain\nINFO\t[NET]\ttagged\n");
}
