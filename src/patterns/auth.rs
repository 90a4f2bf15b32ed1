use once_cell::sync::Lazy;
use regex::Regex;

/// Named-import statements removed wherever they occur. Each entry covers one
/// shape: a single name, or both names in either order, always from the
/// `@/lib/auth/simple-auth` module specifier. The trailing `\s*\n?` deletes
/// the rest of the line along with the statement.
static AUTH_IMPORT_LINES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r#"import\s*\{\s*requireAuth\s*\}\s*from\s*['"]@/lib/auth/simple-auth['"];\s*\n?"#)
            .unwrap(),
        Regex::new(r#"import\s*\{\s*requireAdmin\s*\}\s*from\s*['"]@/lib/auth/simple-auth['"];\s*\n?"#)
            .unwrap(),
        Regex::new(
            r#"import\s*\{\s*requireAuth,\s*requireAdmin\s*\}\s*from\s*['"]@/lib/auth/simple-auth['"];\s*\n?"#,
        )
        .unwrap(),
        Regex::new(
            r#"import\s*\{\s*requireAdmin,\s*requireAuth\s*\}\s*from\s*['"]@/lib/auth/simple-auth['"];\s*\n?"#,
        )
        .unwrap(),
    ]
});

/// Leading guard blocks stripped from exported async functions. The guard must
/// be the very first statement after the opening brace; a guard preceded by any
/// other code is left alone. Group 1 captures the function opening, which the
/// replacement keeps.
static GUARD_BLOCKS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(
            r"(export\s+async\s+function\s+\w+\([^)]*\)\s*\{)\s*const\s+auth\s*=\s*requireAuth\([^)]*\);\s*if\s*\(\s*!auth\.isValid\s*\)\s*\{\s*return\s+auth\.response!\s*;\s*\}",
        )
        .unwrap(),
        Regex::new(
            r"(export\s+async\s+function\s+\w+\([^)]*\)\s*\{)\s*const\s+auth\s*=\s*requireAdmin\([^)]*\);\s*if\s*\(\s*!auth\.isValid\s*\)\s*\{\s*return\s+auth\.response!\s*;\s*\}",
        )
        .unwrap(),
    ]
});

/// A run of three or more newline-separated blank-ish lines.
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Applies the full rewrite pipeline in its fixed order: import removal,
/// guard-block removal, blank-line collapse. Pure text in, text out; the
/// caller decides whether anything changed by comparing with the input.
pub fn strip_auth(content: &str) -> String {
    let content = strip_auth_imports(content);
    let content = strip_guard_blocks(&content);
    collapse_blank_lines(&content)
}

/// Deletes every occurrence of the four recognized auth import statements.
pub fn strip_auth_imports(content: &str) -> String {
    let mut out = content.to_string();
    for pattern in AUTH_IMPORT_LINES.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    out
}

/// Removes the two-statement auth guard idiom from the start of exported
/// async functions, keeping only the function opening.
pub fn strip_guard_blocks(content: &str) -> String {
    let mut out = content.to_string();
    for pattern in GUARD_BLOCKS.iter() {
        out = pattern.replace_all(&out, "$1").into_owned();
    }
    out
}

/// Collapses any run of two or more consecutive blank lines into exactly one.
pub fn collapse_blank_lines(content: &str) -> String {
    BLANK_RUNS.replace_all(content, "\n\n").into_owned()
}
