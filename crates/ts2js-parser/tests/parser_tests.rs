//! Public parsing entry points.

use ts2js_parser::{LanguageVariant, NodeKind, parse, parse_with_variant};

#[test]
fn test_parse_picks_variant_from_extension() {
    assert_eq!(parse("a.ts", "x;").expect("parse").variant, LanguageVariant::Standard);
    assert_eq!(parse("a.tsx", "x;").expect("parse").variant, LanguageVariant::Jsx);
    assert_eq!(parse("a.mts", "x;").expect("parse").variant, LanguageVariant::Standard);
}

#[test]
fn test_parse_error_has_line_and_column() {
    let err = parse("broken.ts", "const a = 1;\nconst b = ;\n").expect_err("should fail");
    assert_eq!(err.line, 2);
    assert!(err.column > 1);
    assert!(err.to_string().starts_with("2:"));
}

#[test]
fn test_unterminated_string_is_a_diagnostic_not_an_error() {
    let tree = parse("a.ts", "const s = \"open;\nconst t = 1;\n").expect("parse");
    assert!(!tree.diagnostics.is_empty());
    assert_eq!(tree.diagnostics[0].code, 1002);
}

#[test]
fn test_tree_queries() {
    let source = "interface A { x: number }\ntype B = A;\nconst c: B = { x: 1 };\n";
    let tree = parse("a.ts", source).expect("parse");
    assert_eq!(tree.count_kind(NodeKind::InterfaceDeclaration), 1);
    assert_eq!(tree.count_kind(NodeKind::TypeAliasDeclaration), 1);
    let statement = tree.arena.children(tree.root)[2];
    assert_eq!(tree.node_text(statement), "const c: B = { x: 1 };");
}

#[test]
fn test_with_arena_keeps_source() {
    let tree = parse("a.ts", "let a = 1;").expect("parse");
    let copy = tree.with_arena(tree.arena.clone());
    assert_eq!(copy.file_name, "a.ts");
    assert_eq!(&*copy.source, "let a = 1;");
    assert_eq!(copy.root, tree.root);
}

#[test]
fn test_parse_typescript_constructs() {
    let source = r#"
import type { Config } from "./config";
import fs = require("fs");
export * as ns from "./ns";
declare module "ext" { export const v: number; }
namespace N.M { export const x = 1; }
enum E { A = 1, B = A << 1 }
abstract class Base<T extends object = {}> implements I {
    #secret?: string;
    static readonly count: number = 0;
    declare tag: string;
    protected constructor(private readonly id: T, public name?: string) { super(); }
    abstract run(): void;
    get value(): T { return this.id; }
    [key: string]: unknown;
}
function assertIsString(v: unknown): asserts v is string {}
let u: A | B & C = null!;
let t: [a: string, b?: number, ...rest: boolean[]];
let m: { readonly [K in keyof T]?: T[K] };
let c: T extends (infer U)[] ? U : never;
let tl: `prefix-${string}`;
const r = f<string>(x)?.y!;
const g = obj satisfies Record<string, number>;
export default class {}
export = Base;
"#;
    let tree = parse("a.ts", source).expect("parse");
    assert!(tree.diagnostics.is_empty());
    assert_eq!(tree.count_kind(NodeKind::ImportEqualsDeclaration), 1);
    assert_eq!(tree.count_kind(NodeKind::MappedType), 1);
    assert_eq!(tree.count_kind(NodeKind::ConditionalType), 1);
    assert_eq!(tree.count_kind(NodeKind::TemplateLiteralType), 1);
    assert_eq!(tree.count_kind(NodeKind::SatisfiesExpression), 1);
}

#[test]
fn test_parse_with_explicit_variant() {
    let tree = parse_with_variant("a.ts", "<div />;", LanguageVariant::Jsx).expect("parse");
    assert_eq!(tree.count_kind(NodeKind::JsxSelfClosingElement), 1);
}

#[test]
fn test_const_assertions() {
    let source = "const a = { x: 1 } as const;\nconst b = [1, 2] as const;\nlet c = <const>['x'];\n";
    let tree = parse("a.ts", source).expect("parse");
    assert!(tree.diagnostics.is_empty());
    assert_eq!(tree.count_kind(NodeKind::AsExpression), 2);
    assert_eq!(tree.count_kind(NodeKind::TypeAssertionExpression), 1);
    assert_eq!(tree.count_kind(NodeKind::KeywordType), 3);
}
