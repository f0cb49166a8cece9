//! Inline text normalization.
//!
//! OneNote stores paragraph text as an HTML fragment. Before a block is
//! emitted, the fragment goes through a fixed pipeline:
//!
//! 1. strip `<span>` open/close tags and `<br>` tags,
//! 2. turn `&nbsp;` into a space,
//! 3. rewrite MathML as LaTeX,
//! 4. substitute unicode symbols from the fallback table,
//! 5. strip span tags that survived (multi-line tags, tags exposed by step 3).
//!
//! The steps must run in this order: the fallback table matches characters
//! the math translator may introduce.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fallback;
use crate::math::mathml_to_latex;

static INLINE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<span.*?>|</span>|<span\nlang=en-US>|<br\s*/?>").unwrap());

static STRAY_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<span.*?>|</span>").unwrap());

/// Normalize text with the built-in MathML translator
pub fn normalize(text: &str) -> String {
    normalize_with(text, &mathml_to_latex)
}

/// Normalize text with a caller-supplied math translator
pub fn normalize_with(text: &str, translate: &dyn Fn(&str) -> String) -> String {
    let text = INLINE_MARKUP.replace_all(text, "");
    let text = text.replace("&nbsp;", " ");
    let text = translate(&text);
    let text = fallback::substitute(&text);
    STRAY_SPAN.replace_all(&text, "").into_owned()
}
