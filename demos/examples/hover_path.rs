// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover path reconstruction.
//!
//! Builds a small `Program > Statement > {Expression, Literal}` document, sweeps
//! the pointer across it, and prints the derivation path each time the innermost
//! region changes. Shows the raw capture → target → bubble sequence once too.
//!
//! Run:
//! - `cargo run -p parsescope_demos --example hover_path`

use kurbo::{Point, Rect};
use parsescope::{DiagnosticLog, PathPanel, Visualizer, VizConfig};
use parsescope_regions::{LocalRegion, RegionTree};
use parsescope_responder::adapters::region_tree::hit_for_region;
use parsescope_responder::router::Router;

fn main() {
    let mut tree = RegionTree::new();
    let program = tree.insert(None, LocalRegion::new("Program", Rect::new(0.0, 0.0, 200.0, 20.0)));
    let statement = tree.insert(
        Some(program),
        LocalRegion::new("Statement", Rect::new(0.0, 0.0, 120.0, 20.0)),
    );
    let expression = tree.insert(
        Some(statement),
        LocalRegion::new("Expression", Rect::new(0.0, 0.0, 60.0, 20.0)),
    );
    let _literal = tree.insert(
        Some(statement),
        LocalRegion::new("Literal", Rect::new(60.0, 0.0, 120.0, 20.0)),
    );

    println!("== Dispatch for Expression ==");
    let router: Router<_> = Router::new();
    if let Some(hit) = hit_for_region(&tree, expression) {
        for d in router.route(&hit) {
            println!(
                "  {:?} {:<10} (depth {})",
                d.phase,
                tree.rule_name(d.node).unwrap_or("?"),
                d.depth_from_target
            );
        }
    }

    let mut log = DiagnosticLog::new();
    let mut viz = Visualizer::new(tree, &VizConfig::default(), PathPanel::new(), &mut log)
        .expect("document has regions");

    println!("== Pointer sweep ==");
    for x in (5..=215).step_by(10) {
        let pt = Point::new(f64::from(x), 10.0);
        match viz.pointer_move(pt) {
            Some(path) => {
                println!("x={x:>3}: {path}");
                print!("{}", viz.output().content());
            }
            None if viz.hovered().is_none() => println!("x={x:>3}: (outside)"),
            None => {}
        }
    }
}
