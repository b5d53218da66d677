//! Token kinds of the typed superset grammar.
//!
//! Reserved words come first among the keywords so that "can this token be
//! used as an identifier" is a range check, as in tsc.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    JsxText,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    LessThanSlashToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    CaretEqualsToken,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AssertKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,
}

impl SyntaxKind {
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_RESERVED_WORD
    }

    /// Identifier or any keyword that may be used as an identifier.
    #[inline]
    pub fn is_identifier_like(self) -> bool {
        self == SyntaxKind::Identifier || (self > Self::LAST_RESERVED_WORD && self <= Self::LAST_KEYWORD)
    }

    /// Identifier or any keyword (property names accept reserved words).
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword()
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::RegularExpressionLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
        )
    }

    pub fn is_assignment_operator(self) -> bool {
        self >= SyntaxKind::EqualsToken && self <= SyntaxKind::CaretEqualsToken
    }

    /// Modifiers that only carry static meaning and are erased from output.
    pub fn is_type_only_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::DeclareKeyword
        )
    }

    pub fn is_modifier(self) -> bool {
        self.is_type_only_modifier()
            || matches!(
                self,
                SyntaxKind::ExportKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::StaticKeyword
                    | SyntaxKind::AsyncKeyword
                    | SyntaxKind::ConstKeyword
                    | SyntaxKind::AccessorKeyword
                    | SyntaxKind::InKeyword
                    | SyntaxKind::OutKeyword
            )
    }

    /// Fixed source text of punctuation and keywords.
    pub fn text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        let text = match self {
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenParenToken => "(",
            CloseParenToken => ")",
            OpenBracketToken => "[",
            CloseBracketToken => "]",
            DotToken => ".",
            DotDotDotToken => "...",
            SemicolonToken => ";",
            CommaToken => ",",
            QuestionDotToken => "?.",
            LessThanToken => "<",
            LessThanSlashToken => "</",
            GreaterThanToken => ">",
            LessThanEqualsToken => "<=",
            GreaterThanEqualsToken => ">=",
            EqualsEqualsToken => "==",
            ExclamationEqualsToken => "!=",
            EqualsEqualsEqualsToken => "===",
            ExclamationEqualsEqualsToken => "!==",
            EqualsGreaterThanToken => "=>",
            PlusToken => "+",
            MinusToken => "-",
            AsteriskToken => "*",
            AsteriskAsteriskToken => "**",
            SlashToken => "/",
            PercentToken => "%",
            PlusPlusToken => "++",
            MinusMinusToken => "--",
            LessThanLessThanToken => "<<",
            GreaterThanGreaterThanToken => ">>",
            GreaterThanGreaterThanGreaterThanToken => ">>>",
            AmpersandToken => "&",
            BarToken => "|",
            CaretToken => "^",
            ExclamationToken => "!",
            TildeToken => "~",
            AmpersandAmpersandToken => "&&",
            BarBarToken => "||",
            QuestionToken => "?",
            ColonToken => ":",
            AtToken => "@",
            QuestionQuestionToken => "??",
            EqualsToken => "=",
            PlusEqualsToken => "+=",
            MinusEqualsToken => "-=",
            AsteriskEqualsToken => "*=",
            AsteriskAsteriskEqualsToken => "**=",
            SlashEqualsToken => "/=",
            PercentEqualsToken => "%=",
            LessThanLessThanEqualsToken => "<<=",
            GreaterThanGreaterThanEqualsToken => ">>=",
            GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            AmpersandEqualsToken => "&=",
            BarEqualsToken => "|=",
            BarBarEqualsToken => "||=",
            AmpersandAmpersandEqualsToken => "&&=",
            QuestionQuestionEqualsToken => "??=",
            CaretEqualsToken => "^=",
            _ => return keyword_text(self),
        };
        Some(text)
    }
}

macro_rules! keywords {
    ($($text:literal => $kind:ident),+ $(,)?) => {
        /// Map identifier text to its keyword kind.
        pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
            match text {
                $($text => Some(SyntaxKind::$kind),)+
                _ => None,
            }
        }

        fn keyword_text(kind: SyntaxKind) -> Option<&'static str> {
            match kind {
                $(SyntaxKind::$kind => Some($text),)+
                _ => None,
            }
        }
    };
}

keywords! {
    "break" => BreakKeyword,
    "case" => CaseKeyword,
    "catch" => CatchKeyword,
    "class" => ClassKeyword,
    "const" => ConstKeyword,
    "continue" => ContinueKeyword,
    "debugger" => DebuggerKeyword,
    "default" => DefaultKeyword,
    "delete" => DeleteKeyword,
    "do" => DoKeyword,
    "else" => ElseKeyword,
    "enum" => EnumKeyword,
    "export" => ExportKeyword,
    "extends" => ExtendsKeyword,
    "false" => FalseKeyword,
    "finally" => FinallyKeyword,
    "for" => ForKeyword,
    "function" => FunctionKeyword,
    "if" => IfKeyword,
    "import" => ImportKeyword,
    "in" => InKeyword,
    "instanceof" => InstanceOfKeyword,
    "new" => NewKeyword,
    "null" => NullKeyword,
    "return" => ReturnKeyword,
    "super" => SuperKeyword,
    "switch" => SwitchKeyword,
    "this" => ThisKeyword,
    "throw" => ThrowKeyword,
    "true" => TrueKeyword,
    "try" => TryKeyword,
    "typeof" => TypeOfKeyword,
    "var" => VarKeyword,
    "void" => VoidKeyword,
    "while" => WhileKeyword,
    "with" => WithKeyword,
    "implements" => ImplementsKeyword,
    "interface" => InterfaceKeyword,
    "let" => LetKeyword,
    "package" => PackageKeyword,
    "private" => PrivateKeyword,
    "protected" => ProtectedKeyword,
    "public" => PublicKeyword,
    "static" => StaticKeyword,
    "yield" => YieldKeyword,
    "abstract" => AbstractKeyword,
    "accessor" => AccessorKeyword,
    "as" => AsKeyword,
    "asserts" => AssertsKeyword,
    "assert" => AssertKeyword,
    "any" => AnyKeyword,
    "async" => AsyncKeyword,
    "await" => AwaitKeyword,
    "boolean" => BooleanKeyword,
    "constructor" => ConstructorKeyword,
    "declare" => DeclareKeyword,
    "get" => GetKeyword,
    "infer" => InferKeyword,
    "intrinsic" => IntrinsicKeyword,
    "is" => IsKeyword,
    "keyof" => KeyOfKeyword,
    "module" => ModuleKeyword,
    "namespace" => NamespaceKeyword,
    "never" => NeverKeyword,
    "out" => OutKeyword,
    "readonly" => ReadonlyKeyword,
    "require" => RequireKeyword,
    "number" => NumberKeyword,
    "object" => ObjectKeyword,
    "satisfies" => SatisfiesKeyword,
    "set" => SetKeyword,
    "string" => StringKeyword,
    "symbol" => SymbolKeyword,
    "type" => TypeKeyword,
    "undefined" => UndefinedKeyword,
    "unique" => UniqueKeyword,
    "unknown" => UnknownKeyword,
    "using" => UsingKeyword,
    "from" => FromKeyword,
    "global" => GlobalKeyword,
    "bigint" => BigIntKeyword,
    "override" => OverrideKeyword,
    "of" => OfKeyword,
}
