//! Closed set of node kinds.
//!
//! Every token is a `Token` leaf; every grammar production has its own
//! variant. Code that dispatches on `NodeKind` is expected to match
//! exhaustively so that adding a production forces every pass to decide
//! what to do with it.

use ts2js_scanner::SyntaxKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Token(SyntaxKind),

    SourceFile,

    // Names
    QualifiedName,
    ComputedPropertyName,

    // Statements
    Block,
    EmptyStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseBlock,
    CaseClause,
    DefaultClause,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    DebuggerStatement,

    // Declarations
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumMember,
    ModuleDeclaration,
    ModuleBlock,
    ImportDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ImportEqualsDeclaration,
    ExternalModuleReference,
    ImportAttributes,
    ImportAttribute,
    ExportDeclaration,
    NamedExports,
    NamespaceExport,
    ExportSpecifier,
    /// `export = e` and `export default e`
    ExportAssignment,
    /// `export as namespace X`
    NamespaceExportDeclaration,

    // Class members and signatures
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    IndexSignature,
    ClassStaticBlockDeclaration,
    SemicolonClassElement,
    HeritageClause,
    ExpressionWithTypeArguments,
    Decorator,
    /// `(a, b)` of a function-like declaration
    ParameterList,
    Parameter,
    TypeParameter,
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    SpreadElement,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    TemplateSpan,
    YieldExpression,
    ClassExpression,
    MetaProperty,
    /// `<T>e`
    TypeAssertionExpression,
    AsExpression,
    SatisfiesExpression,
    NonNullExpression,
    /// `f<T>` without a call
    InstantiationExpression,

    // JSX
    JsxElement,
    JsxSelfClosingElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpression,
    JsxNamespacedName,

    // Types
    /// `: T` including the colon
    TypeAnnotation,
    /// `<T, U>` on a declaration
    TypeParameters,
    /// `<T, U>` on a call, reference or heritage expression
    TypeArguments,
    KeywordType,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    NamedTupleMember,
    OptionalType,
    RestType,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    ThisType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    TemplateLiteralType,
    TemplateLiteralTypeSpan,
    ImportType,
    TypePredicate,

    /// Text produced by a transform; has no source span of its own.
    SyntheticText,
}

impl NodeKind {
    #[inline]
    pub fn is_token(self) -> bool {
        matches!(self, NodeKind::Token(_))
    }

    #[inline]
    pub fn token(self) -> Option<SyntaxKind> {
        match self {
            NodeKind::Token(kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub fn is_token_of(self, kind: SyntaxKind) -> bool {
        self == NodeKind::Token(kind)
    }

    /// Type nodes: productions that only occur in type positions.
    pub fn is_type_node(self) -> bool {
        matches!(
            self,
            NodeKind::KeywordType
                | NodeKind::TypeReference
                | NodeKind::FunctionType
                | NodeKind::ConstructorType
                | NodeKind::TypeQuery
                | NodeKind::TypeLiteral
                | NodeKind::ArrayType
                | NodeKind::TupleType
                | NodeKind::NamedTupleMember
                | NodeKind::OptionalType
                | NodeKind::RestType
                | NodeKind::UnionType
                | NodeKind::IntersectionType
                | NodeKind::ConditionalType
                | NodeKind::InferType
                | NodeKind::ParenthesizedType
                | NodeKind::ThisType
                | NodeKind::TypeOperator
                | NodeKind::IndexedAccessType
                | NodeKind::MappedType
                | NodeKind::LiteralType
                | NodeKind::TemplateLiteralType
                | NodeKind::TemplateLiteralTypeSpan
                | NodeKind::ImportType
                | NodeKind::TypePredicate
        )
    }

    /// Kinds whose presence has no runtime effect. None of these survive
    /// type stripping.
    pub fn is_type_only(self) -> bool {
        self.is_type_node()
            || matches!(
                self,
                NodeKind::InterfaceDeclaration
                    | NodeKind::TypeAliasDeclaration
                    | NodeKind::TypeAnnotation
                    | NodeKind::TypeParameters
                    | NodeKind::TypeParameter
                    | NodeKind::TypeArguments
                    | NodeKind::IndexSignature
                    | NodeKind::PropertySignature
                    | NodeKind::MethodSignature
                    | NodeKind::CallSignature
                    | NodeKind::ConstructSignature
                    | NodeKind::NamespaceExportDeclaration
                    | NodeKind::TypeAssertionExpression
                    | NodeKind::AsExpression
                    | NodeKind::SatisfiesExpression
                    | NodeKind::NonNullExpression
                    | NodeKind::InstantiationExpression
            )
    }

    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDeclaration
                | NodeKind::FunctionExpression
                | NodeKind::ArrowFunction
                | NodeKind::MethodDeclaration
                | NodeKind::Constructor
                | NodeKind::GetAccessor
                | NodeKind::SetAccessor
        )
    }
}
