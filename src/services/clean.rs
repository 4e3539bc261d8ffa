// src/services/clean.rs

//! Text normalizer.
//!
//! Applies an ordered sequence of substitutions to titles and body text.
//! Order matters: later steps assume earlier normalizations have run.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::CleaningConfig;

/// Email-shaped substrings, tagged as `<EMAIL>`.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.-]+@[\w.-]+\.\w+\b").expect("EMAIL regex"));

/// `http(s)://` or `www.` substrings up to the next whitespace, tagged as `<URL>`.
static WEB_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("WEB_URL regex"));

/// Decorative bullet/star/heart marks, deleted outright.
static SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[※■▶★♡♥]").expect("SYMBOLS regex"));

/// Bracketed and parenthesized spans including delimiters. Non-greedy:
/// stops at the first closing delimiter, no nesting of the same kind.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("BRACKETED regex"));

/// Tab and carriage-return characters.
static TAB_CR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\t\r]").expect("TAB_CR regex"));

/// The literal word "네이버뉴스" (portal credit, not article text).
static PORTAL_CREDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b네이버뉴스\b").expect("PORTAL_CREDIT regex"));

/// Any remaining email-shaped substring, removed rather than tagged.
static EMAIL_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("EMAIL_STRIP regex"));

/// Photo-credit fragments as they appear in outlet bylines.
static PHOTO_CREDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"사진=?|=사진|/사진").expect("PHOTO_CREDIT regex"));

/// Three or more consecutive newlines.
static MULTI_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTI_NEWLINE regex"));

/// Two or more consecutive spaces.
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("MULTI_SPACE regex"));

/// Normalize a title or body string.
///
/// The `<EMAIL>`/`<URL>` tokens are stable under re-application; the
/// whitespace steps are idempotent on their own output.
pub fn clean_text(config: &CleaningConfig, text: &str) -> String {
    // 1) HTML entities to literal characters
    let decoded = html_escape::decode_html_entities(text);

    // 2) Typographic double quotes to ASCII
    let t = decoded.replace('“', "\"").replace('”', "\"");

    // 3) Tag emails, 4) tag URLs
    let t = EMAIL.replace_all(&t, "<EMAIL>");
    let t = WEB_URL.replace_all(&t, "<URL>");

    // 5) Decorative symbols, 6) bracketed spans
    let t = SYMBOLS.replace_all(&t, "");
    let t = BRACKETED.replace_all(&t, "");

    // 7) Control characters to spaces
    let t = TAB_CR.replace_all(&t, " ");

    // 8) Optional outlet-credit refinements
    let t = if config.strip_outlet_credits {
        let t = PORTAL_CREDIT.replace_all(&t, "");
        let t = EMAIL_STRIP.replace_all(&t, "");
        PHOTO_CREDIT.replace_all(&t, "").into_owned()
    } else {
        t.into_owned()
    };

    // 9) Collapse runs of newlines and spaces
    let t = MULTI_NEWLINE.replace_all(&t, "\n\n");
    let t = MULTI_SPACE.replace_all(&t, " ");

    // 10) Trim
    t.trim().to_string()
}
