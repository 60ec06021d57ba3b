// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end hover and click scenarios over a JSON document.

use kurbo::Point;
use parsescope::{
    DiagnosticLog, DocumentSpec, PathFormat, PathPanel, RootPolicy, Visualizer, VizConfig,
    VizError,
};
use parsescope_regions::RegionId;
use rstest::{fixture, rstest};

const PROGRAM: &str = r#"{
    "regions": [
        { "rule": "Program", "bounds": [0, 0, 300, 40], "children": [
            { "rule": "Statement", "bounds": [0, 0, 200, 20], "children": [
                { "rule": "Expression", "bounds": [0, 0, 100, 20], "children": [
                    { "rule": "Literal", "bounds": [0, 0, 40, 20] }
                ] },
                { "rule": "Operator", "bounds": [100, 0, 120, 20] }
            ] },
            { "rule": "Statement", "bounds": [0, 20, 200, 40], "children": [
                { "rule": "Identifier", "bounds": [0, 20, 80, 40] }
            ] }
        ] }
    ]
}"#;

fn visualizer(json: &str, config: &VizConfig) -> Visualizer<PathPanel> {
    let tree = DocumentSpec::from_json(json).unwrap().build();
    let mut log = DiagnosticLog::new();
    Visualizer::new(tree, config, PathPanel::new(), &mut log).unwrap()
}

#[fixture]
fn program() -> Visualizer<PathPanel> {
    visualizer(PROGRAM, &VizConfig::default())
}

fn region_named(viz: &Visualizer<PathPanel>, rule: &str) -> RegionId {
    let tree = viz.tree();
    tree.document_order()
        .find(|r| tree.rule_name(*r) == Some(rule))
        .unwrap()
}

#[rstest]
#[case((20.0, 10.0), "Program > Statement > Expression > Literal")]
#[case((60.0, 10.0), "Program > Statement > Expression")]
#[case((110.0, 10.0), "Program > Statement > Operator")]
#[case((150.0, 10.0), "Program > Statement")]
#[case((40.0, 30.0), "Program > Statement > Identifier")]
#[case((250.0, 30.0), "Program")]
fn hover_reconstructs_derivation_path(
    mut program: Visualizer<PathPanel>,
    #[case] at: (f64, f64),
    #[case] expected: &str,
) {
    let path = program.pointer_move(Point::new(at.0, at.1)).unwrap();
    assert_eq!(path.to_string(), expected);
    assert_eq!(program.last_path(), Some(&path));
}

#[rstest]
fn text_output_indents_one_space_per_level(mut program: Visualizer<PathPanel>) {
    let _ = program.pointer_move(Point::new(60.0, 10.0));
    assert_eq!(
        program.output().content(),
        "Program\n Statement\n  Expression\n"
    );
}

#[rstest]
fn sibling_leaves_share_a_prefix(mut program: Visualizer<PathPanel>) {
    let literal = program.pointer_move(Point::new(20.0, 10.0)).unwrap();
    let operator = program.pointer_move(Point::new(110.0, 10.0)).unwrap();
    assert_eq!(literal.rules()[..2], operator.rules()[..2]);
    assert_ne!(literal.leaf(), operator.leaf());
    assert_eq!(
        program.output().content(),
        "Program\n Statement\n  Operator\n"
    );
}

#[rstest]
fn consecutive_hovers_replace_output(mut program: Visualizer<PathPanel>) {
    for x in [20.0, 110.0, 60.0, 250.0] {
        let _ = program.pointer_move(Point::new(x, 10.0));
    }
    assert_eq!(program.output().replacements(), 4);
    assert_eq!(program.output().content(), "Program\n");
}

#[rstest]
fn html_output_labels_rules() {
    let cfg = VizConfig {
        format: PathFormat::Html,
        ..VizConfig::default()
    };
    let mut viz = visualizer(PROGRAM, &cfg);
    let _ = viz.pointer_move(Point::new(110.0, 10.0));
    assert_eq!(
        viz.output().content(),
        concat!(
            r#"<span class="Program">Program</span><br/>"#,
            r#"&nbsp;<span class="Statement">Statement</span><br/>"#,
            r#"&nbsp;&nbsp;<span class="Operator">Operator</span><br/>"#,
        )
    );
}

#[rstest]
fn click_selects_only_the_innermost(mut program: Visualizer<PathPanel>) {
    let out = program.click(Point::new(20.0, 10.0));
    let literal = region_named(&program, "Literal");
    assert_eq!(out.selected, Some(literal));
    assert!(out.default_prevented);
    let marked: Vec<_> = program
        .tree()
        .document_order()
        .filter(|r| program.tree().is_marked(*r))
        .collect();
    assert_eq!(marked, [literal]);
}

#[rstest]
fn click_a_b_b_leaves_b_marked(mut program: Visualizer<PathPanel>) {
    let a = region_named(&program, "Literal");
    let b = region_named(&program, "Operator");
    let _ = program.click_region(a).unwrap();
    let _ = program.click_region(b).unwrap();
    let _ = program.click_region(b).unwrap();
    assert!(!program.tree().is_marked(a));
    assert!(program.tree().is_marked(b));
    assert_eq!(program.selected(), Some(b));
}

#[rstest]
fn hover_and_click_are_independent(mut program: Visualizer<PathPanel>) {
    let _ = program.pointer_move(Point::new(40.0, 30.0));
    let _ = program.click(Point::new(110.0, 10.0));
    assert_eq!(
        program.output().content(),
        "Program\n Statement\n  Identifier\n"
    );
    assert_eq!(program.selected(), Some(region_named(&program, "Operator")));
}

#[rstest]
#[case("{}")]
#[case(r#"{ "regions": [] }"#)]
fn empty_document_raises_one_diagnostic(#[case] json: &str) {
    let tree = DocumentSpec::from_json(json).unwrap().build();
    let mut log = DiagnosticLog::new();
    let result = Visualizer::new(tree, &VizConfig::default(), PathPanel::new(), &mut log);
    assert!(matches!(result, Err(VizError::NoRegions)));
    assert_eq!(log.alerts().len(), 1);
    assert!(log.alerts()[0].contains("top-level region could not be found"));
}

const TWO_TREES: &str = r#"{
    "regions": [
        { "rule": "Program", "bounds": [0, 0, 100, 20], "children": [
            { "rule": "Statement", "bounds": [0, 0, 50, 20] }
        ] },
        { "rule": "Footer", "bounds": [0, 40, 100, 60], "children": [
            { "rule": "Note", "bounds": [0, 40, 50, 60] }
        ] }
    ]
}"#;

#[rstest]
fn second_tree_never_flushes_under_first_in_document() {
    let mut viz = visualizer(TWO_TREES, &VizConfig::default());
    assert_eq!(viz.pointer_move(Point::new(10.0, 50.0)), None);
    assert_eq!(viz.output().replacements(), 0);
    // The abandoned walk does not leak into the next one.
    let path = viz.pointer_move(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(path.to_string(), "Program > Statement");
}

#[rstest]
fn top_level_policy_covers_every_tree() {
    let cfg = VizConfig {
        root: RootPolicy::TopLevel,
        ..VizConfig::default()
    };
    let mut viz = visualizer(TWO_TREES, &cfg);
    let path = viz.pointer_move(Point::new(10.0, 50.0)).unwrap();
    assert_eq!(path.to_string(), "Footer > Note");
    let path = viz.pointer_move(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(path.to_string(), "Program > Statement");
}

#[rstest]
fn recursive_root_rule_truncates_at_innermost_occurrence() {
    let json = r#"{
        "regions": [
            { "rule": "Block", "bounds": [0, 0, 100, 100], "children": [
                { "rule": "Block", "bounds": [0, 0, 50, 50], "children": [
                    { "rule": "Statement", "bounds": [0, 0, 20, 20] }
                ] }
            ] }
        ]
    }"#;
    let mut viz = visualizer(json, &VizConfig::default());
    let path = viz.pointer_move(Point::new(5.0, 5.0)).unwrap();
    assert_eq!(path.to_string(), "Block > Statement");

    let cfg = VizConfig {
        root: RootPolicy::TopLevel,
        ..VizConfig::default()
    };
    let mut viz = visualizer(json, &cfg);
    let path = viz.pointer_move(Point::new(5.0, 5.0)).unwrap();
    assert_eq!(path.to_string(), "Block > Block > Statement");
}

#[rstest]
fn unpickable_region_passes_hover_to_its_parent() {
    let json = r#"{
        "regions": [
            { "rule": "Program", "bounds": [0, 0, 100, 20], "children": [
                { "rule": "Comment", "bounds": [0, 0, 50, 20], "pickable": false }
            ] }
        ]
    }"#;
    let mut viz = visualizer(json, &VizConfig::default());
    let path = viz.pointer_move(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(path.to_string(), "Program");
}
