use crate::logger::render;

use std::time::{Duration, SystemTime};

use googletest::prelude::*;
use log::Level;

#[test]
fn given_record_location_when_render_then_timestamp_level_and_location_included() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400);

    let line = render(now, Level::Warn, "Export limit reached", Some("src/app.rs"), Some(42));

    assert_that!(
        line,
        eq("[1970-01-02T00:00:00Z - WARN] Export limit reached [src/app.rs:42]")
    );
}

#[test]
fn given_no_record_location_when_render_then_placeholders_used() {
    let line = render(SystemTime::UNIX_EPOCH, Level::Info, "ready", None, None);

    assert_that!(line, ends_with("INFO] ready [unknown:0]"));
}
