//! Enum lowering and parameter properties, end to end.

use ts2js_emitter::{StripOptions, print, strip};
use ts2js_parser::parse;

fn convert(source: &str) -> (String, Vec<u32>) {
    let tree = parse("test.ts", source).expect("parse");
    let output = strip(&tree, &StripOptions::default());
    let codes = output.warnings.iter().map(|w| w.code).collect();
    (print(&output.tree, &tree.source), codes)
}

#[test]
fn test_enum_is_lowered_in_place() {
    let (code, warnings) = convert("enum Color { Red, Green }\n");
    assert_eq!(
        code,
        "var Color;\n(function (Color) {\n    Color[Color[\"Red\"] = 0] = \"Red\";\n    Color[Color[\"Green\"] = 1] = \"Green\";\n})(Color || (Color = {}));\n"
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_nested_enum_follows_file_indentation() {
    let (code, _) = convert("function f() {\n  enum E { A }\n  return E;\n}\n");
    assert_eq!(
        code,
        "function f() {\n  var E;\n  (function (E) {\n    E[E[\"A\"] = 0] = \"A\";\n  })(E || (E = {}));\n  return E;\n}\n"
    );
}

#[test]
fn test_declare_enum_is_removed() {
    let (code, _) = convert("declare enum D { A }\nconst a = 1;\n");
    assert_eq!(code, "const a = 1;\n");
}

#[test]
fn test_unlowerable_enum_is_left_with_warning() {
    let source = "enum H { A = compute(), B }\n";
    let (code, warnings) = convert(source);
    assert_eq!(code, source);
    assert_eq!(warnings, vec![9002]);
}

#[test]
fn test_parameter_properties() {
    let (code, _) = convert("class P {\n    constructor(public y: number) {}\n}\n");
    assert_eq!(
        code,
        "class P {\n    constructor(y) {\n        this.y = y;\n    }\n}\n"
    );
}

#[test]
fn test_parameter_properties_after_super_call() {
    let source = "class B extends A {\n    constructor(readonly n: number, private m = 2) {\n        super();\n    }\n}\n";
    let (code, _) = convert(source);
    assert_eq!(
        code,
        "class B extends A {\n    constructor(n, m = 2) {\n        super();\n        this.n = n;\n        this.m = m;\n    }\n}\n"
    );
}

#[test]
fn test_namespace_is_lowered() {
    let source = "\
namespace N {
    export const a: number = 1, b = a + 1;
    const hidden = 2;
    export function f(): number {
        return a + hidden;
    }
    export class C {}
    export interface Shape {}
}
";
    let (code, warnings) = convert(source);
    assert_eq!(
        code,
        "\
var N;
(function (N) {
    const a = N.a = 1, b = N.b = a + 1;
    const hidden = 2;
    function f() {
        return a + hidden;
    }
    N.f = f;
    class C {}
    N.C = C;
})(N || (N = {}));
"
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_nested_namespace_is_lowered() {
    let source = "\
namespace N {
    export namespace M {
        export const z = 1;
    }
}
";
    let (code, warnings) = convert(source);
    assert_eq!(
        code,
        "\
var N;
(function (N) {
    var M;
    (function (M) {
        const z = M.z = 1;
    })(M = N.M || (N.M = {}));
})(N || (N = {}));
"
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_exported_namespace_keeps_export() {
    let (code, warnings) = convert("export namespace N {\n    export const a = 1;\n}\n");
    assert_eq!(
        code,
        "export var N;\n(function (N) {\n    const a = N.a = 1;\n})(N || (N = {}));\n"
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_namespace_that_cannot_be_lowered_is_left_with_warning() {
    let dotted = "namespace A.B {\n    export const x = 1;\n}\n";
    let (code, warnings) = convert(dotted);
    assert_eq!(code, dotted);
    assert_eq!(warnings, vec![9001]);

    let mutable = "namespace N {\n    export let counter = 0;\n}\n";
    let (code, warnings) = convert(mutable);
    assert_eq!(code, mutable);
    assert_eq!(warnings, vec![9001]);

    let (_, warnings) = convert("class K {}\nnamespace K {\n    export const x = 1;\n}\n");
    assert_eq!(warnings, vec![9001]);
}
