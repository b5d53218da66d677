use super::enum_lowering::{js_number, lower_enum};
use ts2js_parser::{NodeKind, parse};

fn lower(source: &str) -> Option<String> {
    let tree = parse("test.ts", source).expect("parse");
    let declaration = tree
        .arena
        .children(tree.root)
        .iter()
        .copied()
        .find(|&c| tree.arena.kind(c) == Some(NodeKind::EnumDeclaration))
        .expect("enum declaration");
    lower_enum(&tree.arena, &tree.source, declaration, "", "    ")
}

#[test]
fn test_js_number() {
    assert_eq!(js_number(0.0), "0");
    assert_eq!(js_number(-0.0), "0");
    assert_eq!(js_number(42.0), "42");
    assert_eq!(js_number(-3.0), "-3");
    assert_eq!(js_number(0.5), "0.5");
    assert_eq!(js_number(f64::NAN), "NaN");
    assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_numeric_and_string_members() {
    let output = lower("enum E { A, B = 5, C, S = \"s\" }").expect("lowered");
    assert_eq!(
        output,
        "var E;\n(function (E) {\n    E[E[\"A\"] = 0] = \"A\";\n    E[E[\"B\"] = 5] = \"B\";\n    E[E[\"C\"] = 6] = \"C\";\n    E[\"S\"] = \"s\";\n})(E || (E = {}));"
    );
}

#[test]
fn test_exported_enum() {
    let output = lower("export enum Dir { Up = 1 }").expect("lowered");
    assert!(output.starts_with("export var Dir;\n"), "{output}");
}

#[test]
fn test_folded_initializers() {
    let output = lower("enum F { A = 1 << 2, B = A | 1, C = -B, D = \"x\" + 1, E = F.A * 2 }").expect("lowered");
    assert!(output.contains("F[F[\"A\"] = 4] = \"A\";"), "{output}");
    assert!(output.contains("F[F[\"B\"] = 5] = \"B\";"), "{output}");
    assert!(output.contains("F[F[\"C\"] = -5] = \"C\";"), "{output}");
    assert!(output.contains("F[\"D\"] = \"x1\";"), "{output}");
    assert!(output.contains("F[F[\"E\"] = 8] = \"E\";"), "{output}");
}

#[test]
fn test_computed_member_keeps_initializer_text() {
    let output = lower("enum G { A = compute(), B = 2 }").expect("lowered");
    assert!(output.contains("G[G[\"A\"] = compute()] = \"A\";"), "{output}");
    assert!(output.contains("G[G[\"B\"] = 2] = \"B\";"), "{output}");
}

#[test]
fn test_implicit_member_after_computed_member_is_not_lowered() {
    assert_eq!(lower("enum H { A = compute(), B }"), None);
}

#[test]
fn test_computed_member_depending_on_member_is_not_lowered() {
    assert_eq!(lower("enum K { A = compute(), B = A.length }"), None);
}

#[test]
fn test_string_member_names_are_quoted() {
    let output = lower("enum Q { \"with space\" = 1 }").expect("lowered");
    assert!(output.contains("Q[Q[\"with space\"] = 1] = \"with space\";"), "{output}");
}
