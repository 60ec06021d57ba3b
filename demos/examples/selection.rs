// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click selection.
//!
//! Loads the sample document, clicks a few regions, and prints the single marked
//! region and the repaint damage after each click.
//!
//! Run:
//! - `cargo run -p parsescope_demos --example selection`

use kurbo::Point;
use parsescope::{DiagnosticLog, DocumentSpec, PathPanel, Visualizer, VizConfig};

const DOCUMENT: &str = include_str!("../documents/program.json");

fn main() {
    let doc = DocumentSpec::from_json(DOCUMENT).expect("sample document parses");
    let mut log = DiagnosticLog::new();
    let mut viz = Visualizer::new(doc.build(), &VizConfig::default(), PathPanel::new(), &mut log)
        .expect("sample document has regions");

    for pt in [
        Point::new(60.0, 10.0),
        Point::new(120.0, 10.0),
        Point::new(120.0, 10.0),
        Point::new(195.0, 10.0),
        Point::new(500.0, 500.0),
    ] {
        let out = viz.click(pt);
        let damage = viz.take_damage();
        let rule = out
            .selected
            .and_then(|r| viz.tree().rule_name(r))
            .unwrap_or("(none)");
        println!(
            "click ({:>5}, {:>5}) -> selected {rule:<10} consumed={} damage={:?}",
            pt.x,
            pt.y,
            out.default_prevented,
            damage.union_rect()
        );
    }

    let marked: Vec<_> = viz
        .tree()
        .document_order()
        .filter(|r| viz.tree().is_marked(*r))
        .filter_map(|r| viz.tree().rule_name(r))
        .collect();
    println!("marked: {marked:?}");
}
