// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the diagnostics `skin_cascade` reports through the `log` facade.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use skin_cascade::{
    SheetFragment, StyleContext, StyleKey, StyleSheetDocument, StyleUnitBuilder,
};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn install() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn captured(level: Level, needle: &str) -> bool {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(l, message)| *l == level && message.contains(needle))
}

#[test]
fn circular_include_is_warned() {
    install();
    let doc = StyleSheetDocument::builder()
        .sheet(
            SheetFragment::builder()
                .style(
                    StyleUnitBuilder::selector(".LoopA")
                        .include_style(StyleKey::selector(".LoopB"))
                        .property("color", "red")
                        .build(),
                )
                .style(
                    StyleUnitBuilder::selector(".LoopB")
                        .include_style(StyleKey::selector(".LoopA"))
                        .build(),
                )
                .build(),
        )
        .build();

    let style = doc.resolve_by_selector(&StyleContext::new(), ".LoopA").unwrap();
    assert_eq!(style.property("color"), Some("red"));
    assert!(captured(
        Level::Warn,
        "circular dependency detected in style .LoopA"
    ));
}

#[test]
fn missing_include_is_logged_at_debug() {
    install();
    let doc = StyleSheetDocument::builder()
        .sheet(
            SheetFragment::builder()
                .style(
                    StyleUnitBuilder::selector(".HasMissing")
                        .include_style(StyleKey::name("NoSuchStyle"))
                        .property("color", "red")
                        .build(),
                )
                .build(),
        )
        .build();

    let style = doc
        .resolve_by_selector(&StyleContext::new(), ".HasMissing")
        .unwrap();
    assert_eq!(style.properties().len(), 1);
    assert!(captured(Level::Debug, ".HasMissing: skipping include"));
    assert!(captured(Level::Debug, "NoSuchStyle"));
}
