use super::*;

#[test]
fn test_convert_source_strips_types() {
    let conversion = convert_source(
        "a.ts",
        "import type { A } from \"./a\";\nexport const f = (a: A): number => 1;\n",
        &StripOptions::default(),
    )
    .expect("convert");
    assert_eq!(conversion.code, "export const f = (a) => 1;\n");
    assert!(conversion.warnings.is_empty());
}

#[test]
fn test_convert_source_reports_parse_errors() {
    let err = convert_source("a.ts", "let = ;", &StripOptions::default()).expect_err("invalid");
    assert_eq!(err.line, 1);
}

#[test]
fn test_convert_source_keeps_lexical_diagnostics() {
    let conversion =
        convert_source("a.ts", "const s = \"open;\n", &StripOptions::default()).expect("convert");
    assert_eq!(conversion.code, "const s = \"open;\n");
    assert_eq!(conversion.warnings.len(), 1);
}

#[test]
fn test_empty_import_scenario() {
    let conversion = convert_source(
        "a.ts",
        "import type {A} from \"m\"; import {B} from \"m\";",
        &StripOptions::default(),
    )
    .expect("convert");
    assert_eq!(conversion.code, "import {B} from \"m\";");
}

#[test]
fn test_partial_specifier_scenario() {
    let conversion = convert_source("a.ts", "import {type A, B} from \"m\";", &StripOptions::default())
        .expect("convert");
    assert_eq!(conversion.code, "import {B} from \"m\";");
}
