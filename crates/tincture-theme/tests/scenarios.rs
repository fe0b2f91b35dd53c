//! End-to-end scenarios: palette string → tree → formatted strings.

use pretty_assertions::assert_eq;
use tincture_color::Color;
use tincture_theme::{
    ColorNode, DistanceMetric, Occupant, Palette, Role, SemanticConfig, ThemeConfig, ThemeError,
    assign_roles, build, format, render,
};

const DRACULA: &str = "282936-e9e9f4-ff5555-ffb86c-f1fa8c-50fa7b-8be9fd-bd93f9-ff79c6";

fn dracula() -> Palette {
    Palette::decode(DRACULA).expect("valid palette")
}

fn with_semantic(json: &str) -> ThemeConfig {
    ThemeConfig::default().with_semantic(SemanticConfig::from_json(json).expect("valid JSON"))
}

fn hex(path: &str, tree: &tincture_theme::ColorTree) -> String {
    tree.color(path)
        .unwrap_or_else(|| panic!("{path} should be a color"))
        .to_hex()
}

// ── Palette ────────────────────────────────────────────────────────────────

#[test]
fn ten_group_string_is_not_a_palette() {
    assert_eq!(
        Palette::decode("282936-e9e9f4-ffffff-ff5555-ffb86c-f1fa8c-50fa7b-8be9fd-bd93f9-ff79c6"),
        None
    );
}

// ── Tree ───────────────────────────────────────────────────────────────────

#[test]
fn original_shade_and_background_are_exact() {
    let tree = build(&dracula(), &ThemeConfig::default()).unwrap();
    assert_eq!(hex("c1.p100", &tree), "#ff5555");
    assert_eq!(hex("background", &tree), "#282936");
    assert!(matches!(tree.get("background"), Some(ColorNode::Leaf(_))));
}

#[test]
fn every_accent_keeps_its_original() {
    let palette = dracula();
    let tree = build(&palette, &ThemeConfig::default()).unwrap();
    for (i, accent) in palette.accents.iter().enumerate() {
        assert_eq!(tree.color(&format!("c{}.p100", i + 1)), Some(*accent));
    }
    assert_eq!(tree.color("foreground.p100"), Some(palette.foreground));
}

#[test]
fn shade_table() {
    let tree = build(&dracula(), &ThemeConfig::default()).unwrap();
    let row = |slot: &str| -> Vec<String> {
        ["p10", "p25", "p50", "p75", "p100", "p125"]
            .iter()
            .map(|shade| hex(&format!("{slot}.{shade}"), &tree))
            .collect()
    };
    assert_eq!(row("foreground"), ["#393a47", "#51525f", "#7b7b88", "#acacb8", "#e9e9f4", "#fefeff"]);
    assert_eq!(row("c2"), ["#3e373d", "#5b4944", "#8c694f", "#c18d5b", "#ffb86c", "#ffed84"]);
    assert_eq!(row("c4"), ["#313c3e", "#395747", "#418555", "#47ba65", "#50fa7b", "#26ff7c"]);
    assert_eq!(row("c5"), ["#333a48", "#405362", "#547d8e", "#6baec0", "#8be9fd", "#95ffff"]);
    assert_eq!(row("c7"), ["#3d3344", "#5b3f58", "#8d5179", "#c3639d", "#ff79c6", "#ff93f5"]);
}

#[test]
fn semantic_error_is_the_red_original() {
    let palette = dracula();
    let tree = build(&palette, &with_semantic(r#"{ "ui": { "error": "red.p100" } }"#)).unwrap();
    let roles = assign_roles(&palette.accents, &ThemeConfig::default().roles);
    assert_eq!(tree.color("ui.error"), Some(palette.accents[roles.slot(Role::Red)]));
    assert_eq!(tree.color("ui.error"), Color::hex("#ff5555"));
}

#[test]
fn reference_before_definition_fails() {
    let err = build(
        &dracula(),
        &with_semantic(r#"{ "ui": { "alert": "ui.error", "error": "red.p100" } }"#),
    )
    .unwrap_err();
    assert!(
        matches!(
            &err,
            ThemeError::UnresolvedReference { key, position: 1, segment, .. }
                if key == "ui.alert" && segment == "error"
        ),
        "{err:?}"
    );
    assert_eq!(
        err.to_string(),
        r#"unresolved reference "ui.error" at "ui.alert": no "error" (segment 1)"#
    );
}

#[test]
fn group_over_role_alias_fails() {
    let err = build(&dracula(), &with_semantic(r#"{ "red": { "p100": "c2.p100" } }"#)).unwrap_err();
    assert!(matches!(
        err,
        ThemeError::AliasConflict {
            existing: Occupant::AliasedSubtree,
            ..
        }
    ));
}

#[test]
fn group_over_role_alias_names_the_role_target() {
    let palette = dracula();
    let roles = assign_roles(&palette.accents, &ThemeConfig::default().roles);
    let err = build(&palette, &with_semantic(r#"{ "red": { "p100": "c2.p100" } }"#)).unwrap_err();
    let ThemeError::AliasConflict { path, existing_path, .. } = &err else {
        panic!("expected AliasConflict, got {err:?}");
    };
    assert_eq!(path, "red");
    assert_eq!(*existing_path, format!("c{}", roles.slot(Role::Red) + 1));
}

#[test]
fn repeated_key_group_then_alias_fails() {
    let err = build(
        &dracula(),
        &with_semantic(r#"{ "ui": { "error": "red.p100" }, "ui": "red.p100" }"#),
    )
    .unwrap_err();
    assert!(
        matches!(
            &err,
            ThemeError::AliasConflict { path, reference, existing: Occupant::OwnedSubtree, existing_path }
                if path == "ui" && reference == "red.p100" && existing_path == "ui"
        ),
        "{err:?}"
    );
}

#[test]
fn repeated_key_alias_then_group_fails() {
    let err = build(
        &dracula(),
        &with_semantic(r#"{ "ui": "red.p100", "ui": { "error": "red.p100" } }"#),
    )
    .unwrap_err();
    assert!(
        matches!(
            &err,
            ThemeError::AliasConflict { path, existing: Occupant::AliasedLeaf, existing_path, .. }
                if path == "ui" && existing_path == "red.p100"
        ),
        "{err:?}"
    );
}

#[test]
fn alias_over_fallback_group_fails() {
    let err = build(&dracula(), &with_semantic(r#"{ "todo": "c1" }"#)).unwrap_err();
    assert!(matches!(
        err,
        ThemeError::AliasConflict {
            existing: Occupant::OwnedSubtree,
            ..
        }
    ));
}

#[test]
fn semantic_group_may_not_contain_itself() {
    let err = build(&dracula(), &with_semantic(r#"{ "ui": { "nested": { "loop": "ui" } } }"#))
        .unwrap_err();
    assert!(matches!(err, ThemeError::CyclicAlias { .. }), "{err:?}");
}

#[test]
fn lch_metric_changes_nothing_for_dracula_roles() {
    let mut config = ThemeConfig::default();
    config.roles.metric = DistanceMetric::LchWeighted;
    let palette = dracula();
    let tree = build(&palette, &config).unwrap();
    assert_eq!(hex("red.p100", &tree), "#ff5555");
    assert_eq!(hex("blue.p100", &tree), "#bd93f9");
    assert_eq!(hex("magenta.p100", &tree), "#ff79c6");
}

// ── Formatting ─────────────────────────────────────────────────────────────

#[test]
fn formatted_tree_feeds_templates() {
    let tree = build(&dracula(), &ThemeConfig::default()).unwrap();
    let view = format(&tree);
    assert_eq!(view.text("ui.error.hex"), Some("ff5555"));
    assert_eq!(view.text("ui.error.hex_bgr"), Some("5555ff"));
    assert_eq!(view.text("ui.error.frac_g"), Some("0.3333333333333333"));
    assert_eq!(view.text("todo.c1.hex"), Some("ff0000"));

    let out = render(
        "background = \"#{{background.hex}}\"\nerror = [{{ui.error.dec_r}}, {{ui.error.dec_g}}, {{ui.error.dec_b}}]\n",
        &view,
    );
    assert_eq!(out, "background = \"#282936\"\nerror = [255, 85, 85]\n");
}

#[test]
fn formatted_tree_serializes_in_insertion_order() {
    let tree = build(&dracula(), &ThemeConfig::default()).unwrap();
    let json = serde_json::to_value(format(&tree)).unwrap();
    let keys: Vec<_> = json.as_object().unwrap().keys().take(4).cloned().collect();
    assert_eq!(keys, ["background", "foreground", "c1", "c2"]);
    assert_eq!(json["green"]["p100"]["hex"], "50fa7b");
}
