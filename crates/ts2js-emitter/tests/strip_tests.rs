//! Integration tests for type stripping: parse, strip, print.

use ts2js_emitter::{StripOptions, print, strip};
use ts2js_parser::{NodeKind, parse};

fn convert_with(file_name: &str, source: &str, options: &StripOptions) -> String {
    let tree = parse(file_name, source).expect("parse");
    let output = strip(&tree, options);
    print(&output.tree, &tree.source)
}

fn convert(source: &str) -> String {
    convert_with("test.ts", source, &StripOptions::default())
}

#[test]
fn test_plain_javascript_is_unchanged() {
    let source = "// entry\nconst a = [1, 2, 3];\nfunction sum(xs) {\n  return xs.reduce((a, b) => a + b, 0);\n}\n";
    assert_eq!(convert(source), source);
}

#[test]
fn test_variable_annotation() {
    assert_eq!(convert("let x: number = 1;\n"), "let x = 1;\n");
    assert_eq!(convert("let y!: string;\n"), "let y;\n");
}

#[test]
fn test_function_signature() {
    assert_eq!(
        convert("function f(a: string, b?: number): void {}\n"),
        "function f(a, b) {}\n"
    );
}

#[test]
fn test_this_parameter() {
    assert_eq!(convert("function g(this: Window, a: number) {}\n"), "function g(a) {}\n");
}

#[test]
fn test_overload_signatures_are_removed() {
    assert_eq!(
        convert("function f(a: string): void;\nfunction f(a: any) {}\n"),
        "function f(a) {}\n"
    );
}

#[test]
fn test_interface_and_type_alias() {
    assert_eq!(convert("interface A { x: number }\nconst a = 1;\n"), "const a = 1;\n");
    assert_eq!(
        convert("const a = 1;\ninterface A {}\nconst b = 2;\n"),
        "const a = 1;\nconst b = 2;\n"
    );
    assert_eq!(convert("const a = 1;\ntype T = string;\n"), "const a = 1;\n");
}

#[test]
fn test_declare_statements() {
    assert_eq!(
        convert("declare const VERSION: string;\nconsole.log(VERSION);\n"),
        "console.log(VERSION);\n"
    );
}

#[test]
fn test_casts() {
    assert_eq!(convert("const n = value as number;\n"), "const n = value;\n");
    assert_eq!(convert("const n = a!.b;\n"), "const n = a.b;\n");
    assert_eq!(convert("const c = { a: 1 } satisfies C;\n"), "const c = { a: 1 };\n");
    assert_eq!(convert("const x = <number>y;\n"), "const x = y;\n");
}

#[test]
fn test_assertion_at_statement_start_keeps_operand_an_expression() {
    assert_eq!(convert("<any>{ a: 1 }.a;\n"), "({ a: 1 }.a);\n");
}

#[test]
fn test_arrow_functions() {
    assert_eq!(
        convert("const f = async (x: number): Promise<number> => x;\n"),
        "const f = async (x) => x;\n"
    );
    assert_eq!(convert("const id = <T>(x: T) => x;\n"), "const id = (x) => x;\n");
}

#[test]
fn test_type_arguments() {
    assert_eq!(convert("const m = new Map<string, number>();\n"), "const m = new Map();\n");
}

#[test]
fn test_import_elision() {
    assert_eq!(
        convert("import { A, b } from \"./m\";\nlet x: A = b;\n"),
        "import { b } from \"./m\";\nlet x = b;\n"
    );
    assert_eq!(
        convert("import { A } from \"./m\";\nconst x: A = 1;\n"),
        "const x = 1;\n"
    );
    assert_eq!(
        convert("import type { T } from \"./t\";\nexport const v = 1;\n"),
        "export const v = 1;\n"
    );
}

#[test]
fn test_side_effect_import_is_kept() {
    assert_eq!(convert("import \"./side\";\n"), "import \"./side\";\n");
}

#[test]
fn test_import_elision_can_be_disabled() {
    let options = StripOptions {
        elide_type_only_imports: false,
        ..StripOptions::default()
    };
    assert_eq!(
        convert_with("test.ts", "import { A } from \"./m\";\nlet x: A;\n", &options),
        "import { A } from \"./m\";\nlet x;\n"
    );
}

#[test]
fn test_export_elision() {
    assert_eq!(
        convert("interface I {}\nconst v = 1;\nexport { I, v };\n"),
        "const v = 1;\nexport { v };\n"
    );
    assert_eq!(
        convert("export type { T } from \"./t\";\nexport { a } from \"./a\";\n"),
        "export { a } from \"./a\";\n"
    );
}

#[test]
fn test_import_equals_and_export_assignment() {
    assert_eq!(convert("import fs = require(\"fs\");\n"), "const fs = require(\"fs\");\n");
    assert_eq!(
        convert("const Foo = 1;\nexport = Foo;\n"),
        "const Foo = 1;\nmodule.exports = Foo;\n"
    );
}

#[test]
fn test_class_members() {
    let source = "abstract class S implements Shape {\n    abstract area(): number;\n    describe(): string { return \"s\"; }\n}\n";
    assert_eq!(
        convert(source),
        "class S {\n    describe() { return \"s\"; }\n}\n"
    );
}

#[test]
fn test_uninitialized_fields() {
    let source = "class A {\n    x: number;\n}\n";
    assert_eq!(convert(source), "class A {\n}\n");

    let options = StripOptions {
        preserve_uninitialized_fields: true,
        ..StripOptions::default()
    };
    assert_eq!(convert_with("test.ts", source, &options), "class A {\n    x;\n}\n");
}

#[test]
fn test_type_only_namespace_is_removed() {
    assert_eq!(
        convert("namespace Types { export interface A {} }\nconst x = 1;\n"),
        "const x = 1;\n"
    );
}

#[test]
fn test_runtime_namespace_is_kept_with_warning() {
    let source = "namespace NS { export let a: number = 1; }\n";
    let tree = parse("test.ts", source).expect("parse");
    let output = strip(&tree, &StripOptions::default());
    assert_eq!(print(&output.tree, &tree.source), "namespace NS { export let a = 1; }\n");
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].code, 9001);
    assert!(output.warnings[0].message_text.contains("NS"));
}

#[test]
fn test_jsx_factory_import_is_kept() {
    let source = "import React from \"react\";\nconst el = <div>{x as any}</div>;\n";
    assert_eq!(
        convert_with("view.tsx", source, &StripOptions::default()),
        "import React from \"react\";\nconst el = <div>{x}</div>;\n"
    );
}

#[test]
fn test_no_type_syntax_survives() {
    let source = "\
import type { Config } from \"./config\";
export interface Options<T> { value: T }
export function run<T extends object>(options: Options<T>, config?: Config): T | undefined {
    const cache = new Map<string, T>();
    return cache.get(\"k\") as T;
}
";
    let tree = parse("test.ts", source).expect("parse");
    let output = strip(&tree, &StripOptions::default());
    assert!(output.warnings.is_empty());
    for kind in [
        NodeKind::InterfaceDeclaration,
        NodeKind::TypeAnnotation,
        NodeKind::TypeParameters,
        NodeKind::TypeArguments,
        NodeKind::KeywordType,
    ] {
        assert_eq!(output.tree.count_kind(kind), 0, "{kind:?}");
    }
    // The original tree is untouched.
    assert!(tree.count_kind(NodeKind::InterfaceDeclaration) > 0);
}

#[test]
fn test_output_is_a_fixed_point() {
    let source = "\
enum Level { Low, High }
class Store<T> {
    constructor(private items: T[] = []) {}
    add(item: T): void { this.items.push(item); }
}
export const store = new Store<number>();
";
    let once = convert(source);
    assert_eq!(convert(&once), once);
}

#[test]
fn test_jsx_type_arguments_and_casts() {
    assert_eq!(
        convert_with(
            "view.tsx",
            "const a = <Foo<string> x={1 as number} />;\n",
            &StripOptions::default()
        ),
        "const a = <Foo x={1} />;\n"
    );
}

#[test]
fn test_const_assertions() {
    assert_eq!(convert("const x = { a: 1 } as const;\n"), "const x = { a: 1 };\n");
    assert_eq!(convert("const xs = [1, 2] as const;\n"), "const xs = [1, 2];\n");
    assert_eq!(convert("const k = 'a' as const;\n"), "const k = 'a';\n");
    assert_eq!(convert("let v = <const>['a'];\n"), "let v = ['a'];\n");
}

#[test]
fn test_assertion_operand_on_next_line_stays_with_return() {
    assert_eq!(
        convert("function f() {\n    return <any>\n        x;\n}\n"),
        "function f() {\n    return (\n        x);\n}\n"
    );
    assert_eq!(
        convert("function g() {\n    throw <Error>\n        e;\n}\n"),
        "function g() {\n    throw (\n        e);\n}\n"
    );
    assert_eq!(
        convert("function* h() {\n    yield <any>\n        v;\n}\n"),
        "function* h() {\n    yield (\n        v);\n}\n"
    );
    assert_eq!(convert("function k() {\n    return <any>x;\n}\n"), "function k() {\n    return x;\n}\n");
}

#[test]
fn test_semicolon_guards_statement_after_removed_declaration() {
    assert_eq!(
        convert("var a = 1\ninterface I {}\n(function(){})()\n"),
        "var a = 1;\n(function(){})()\n"
    );
    assert_eq!(
        convert("let a = 1\ntype T = string\n`x`.length\n"),
        "let a = 1;\n`x`.length\n"
    );
}

#[test]
fn test_semicolon_guards_statement_after_removed_suffix() {
    assert_eq!(
        convert("let a = b as any\n[1].forEach(g)\n"),
        "let a = b;\n[1].forEach(g)\n"
    );
    assert_eq!(
        convert("class A {\n    x = 1\n    private [k] = 2\n}\n"),
        "class A {\n    x = 1;\n    [k] = 2\n}\n"
    );
}

#[test]
fn test_no_semicolon_added_when_line_is_closed() {
    let source = "var a = 1;\ninterface I {}\n(function(){})()\n";
    assert_eq!(convert(source), "var a = 1;\n(function(){})()\n");
    assert_eq!(
        convert("function f() {}\ninterface I {}\n(g)()\n"),
        "function f() {}\n(g)()\n"
    );
    assert_eq!(convert("let a = 1\ninterface I {}\nfoo()\n"), "let a = 1\nfoo()\n");
}
