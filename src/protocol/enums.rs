//! Enumerations. Closed ones reject unknown values; `LanguageKind` is open.

integer_enum! {
    pub enum DiagnosticSeverity {
        Error = 1,
        Warning = 2,
        Information = 3,
        Hint = 4,
    }
}

integer_enum! {
    pub enum DiagnosticTag {
        /// Unused or unnecessary code.
        Unnecessary = 1,
        Deprecated = 2,
    }
}

integer_enum! {
    pub enum MessageType {
        Error = 1,
        Warning = 2,
        Info = 3,
        Log = 4,
        Debug = 5,
    }
}

string_enum! {
    pub enum MarkupKind {
        PlainText = "plaintext",
        Markdown = "markdown",
    }
}

string_enum! {
    pub enum TraceValue {
        Off = "off",
        Messages = "messages",
        Verbose = "verbose",
    }
}

open_string_enum! {
    /// Text document language identifier. Clients may send any other
    /// identifier; those are kept as `Custom`.
    pub enum LanguageKind {
        Abap = "abap",
        WindowsBat = "bat",
        BibTeX = "bibtex",
        Clojure = "clojure",
        Coffeescript = "coffeescript",
        C = "c",
        Cpp = "cpp",
        CSharp = "csharp",
        Css = "css",
        Diff = "diff",
        Dart = "dart",
        Dockerfile = "dockerfile",
        Elixir = "elixir",
        Erlang = "erlang",
        FSharp = "fsharp",
        GitCommit = "git-commit",
        GitRebase = "rebase",
        Go = "go",
        Groovy = "groovy",
        Handlebars = "handlebars",
        Haskell = "haskell",
        Html = "html",
        Ini = "ini",
        Java = "java",
        JavaScript = "javascript",
        JavaScriptReact = "javascriptreact",
        Json = "json",
        LaTeX = "latex",
        Less = "less",
        Lua = "lua",
        Makefile = "makefile",
        Markdown = "markdown",
        ObjectiveC = "objective-c",
        ObjectiveCpp = "objective-cpp",
        Perl = "perl",
        Perl6 = "perl6",
        Php = "php",
        Powershell = "powershell",
        Pug = "jade",
        Python = "python",
        R = "r",
        Razor = "razor",
        Ruby = "ruby",
        Rust = "rust",
        Scss = "scss",
        Sass = "sass",
        Scala = "scala",
        ShaderLab = "shaderlab",
        ShellScript = "shellscript",
        Sql = "sql",
        Swift = "swift",
        TypeScript = "typescript",
        TypeScriptReact = "typescriptreact",
        TeX = "tex",
        VisualBasic = "vb",
        Xml = "xml",
        Xsl = "xsl",
        Yaml = "yaml",
    }
}
