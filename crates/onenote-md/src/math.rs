//! MathML to LaTeX translation.
//!
//! OneNote embeds equations as MathML, usually namespace-prefixed and wrapped
//! in a conditional comment:
//!
//! ```text
//! <!--[if mathML]><mml:math xmlns:mml="..."><mml:mi>x</mml:mi></mml:math><![endif]-->
//! ```
//!
//! Each fragment is parsed on its own and rewritten as `$...$`, or `$$...$$`
//! when it declares `display="block"`. Text outside fragments is untouched,
//! and fragments that fail to parse are left as they are.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use roxmltree::Node;

use crate::fallback::{lookup, push_command, push_literal};

static MATH_FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(?:<!--\[if mathML\]>)?(<(?:[A-Za-z][\w.-]*:)?math\b.*?</(?:[A-Za-z][\w.-]*:)?math\s*>)(?:<!\[endif\]-->)?",
    )
    .unwrap()
});

static ELEMENT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)[A-Za-z][\w.-]*:").unwrap());

static NAMESPACE_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s+xmlns(?::[\w.-]+)?\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});

/// HTML entities OneNote leaves in MathML that XML does not predefine
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&InvisibleTimes;", ""),
    ("&ApplyFunction;", ""),
    ("&it;", ""),
    ("&af;", ""),
    ("&minus;", "−"),
    ("&times;", "×"),
    ("&sdot;", "⋅"),
    ("&le;", "≤"),
    ("&ge;", "≥"),
    ("&ne;", "≠"),
    ("&infin;", "∞"),
    ("&pi;", "π"),
];

const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "cot", "sec", "csc", "arcsin", "arccos", "arctan", "sinh", "cosh",
    "tanh", "coth", "log", "ln", "lg", "exp", "lim", "limsup", "liminf", "max", "min", "sup",
    "inf", "det", "dim", "ker", "deg", "gcd", "arg", "hom", "Pr",
];

/// Operators whose under/over scripts are limits rather than accents
const BIG_OPERATORS: &[&str] = &[
    "\\sum", "\\prod", "\\coprod", "\\int", "\\iint", "\\iiint", "\\oint", "\\bigcup",
    "\\bigcap", "\\lim", "\\limsup", "\\liminf", "\\max", "\\min", "\\sup", "\\inf",
];

/// Rewrite every MathML fragment in `text` as LaTeX math.
///
/// Returns the input unchanged when it holds no MathML.
pub fn mathml_to_latex(text: &str) -> String {
    if !text.contains("math") {
        return text.to_string();
    }

    MATH_FRAGMENT
        .replace_all(text, |caps: &Captures| match translate_fragment(&caps[1]) {
            Some(latex) => latex,
            None => {
                debug!("leaving unparseable MathML fragment in place");
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Translate a single `<math>` element, delimiters included.
///
/// Returns `None` if the markup is not well-formed.
pub fn translate_fragment(markup: &str) -> Option<String> {
    let cleaned = prepare(markup);
    let doc = roxmltree::Document::parse(&cleaned).ok()?;
    let root = doc.root_element();

    let display =
        root.attribute("display") == Some("block") || root.attribute("mode") == Some("display");

    let mut body = String::new();
    convert_children(root, &mut body);
    let body = body.trim();

    if body.is_empty() {
        return Some(String::new());
    }
    Some(if display {
        format!("$${}$$", body)
    } else {
        format!("${}$", body)
    })
}

/// Drop namespace prefixes and declarations, resolve HTML entities
fn prepare(markup: &str) -> String {
    let unprefixed = ELEMENT_PREFIX.replace_all(markup, "<${1}");
    let mut cleaned = NAMESPACE_DECL.replace_all(&unprefixed, "").into_owned();
    for (entity, replacement) in NAMED_ENTITIES {
        if cleaned.contains(entity) {
            cleaned = cleaned.replace(entity, replacement);
        }
    }
    cleaned
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// The first `N` element children, if there are at least that many
fn args<'a, 'input, const N: usize>(node: Node<'a, 'input>) -> Option<[Node<'a, 'input>; N]> {
    let children: Vec<_> = elements(node).take(N).collect();
    children.try_into().ok()
}

fn convert_children(node: Node, out: &mut String) {
    for child in elements(node) {
        convert_node(child, out);
    }
}

/// Convert a node into a fresh string
fn group(node: Node) -> String {
    let mut out = String::new();
    convert_node(node, &mut out);
    out.trim().to_string()
}

fn convert_node(node: Node, out: &mut String) {
    match node.tag_name().name() {
        "mi" => push_identifier(&token_text(node), out),
        "mn" => push_symbols(&token_text(node), out),
        "mo" => push_operator(&token_text(node), out),
        "mtext" | "ms" => push_mtext(&token_text(node), out),
        "mspace" => out.push_str("\\ "),

        "semantics" => {
            if let Some(first) = elements(node).next() {
                convert_node(first, out);
            }
        }
        "annotation" | "annotation-xml" | "none" | "mprescripts" => {}

        "mfrac" => match args::<2>(node) {
            Some([num, den]) => {
                let command = if node.attribute("linethickness") == Some("0") {
                    "\\binom"
                } else {
                    "\\frac"
                };
                push_command(out, &format!("{}{{{}}}{{{}}}", command, group(num), group(den)));
            }
            None => convert_children(node, out),
        },

        "msqrt" => {
            let mut inner = String::new();
            convert_children(node, &mut inner);
            push_command(out, &format!("\\sqrt{{{}}}", inner.trim()));
        }

        "mroot" => match args::<2>(node) {
            Some([base, index]) => {
                push_command(out, &format!("\\sqrt[{}]{{{}}}", group(index), group(base)))
            }
            None => convert_children(node, out),
        },

        "msub" => match args::<2>(node) {
            Some([base, sub]) => {
                push_base(&group(base), out);
                push_script('_', &group(sub), out);
            }
            None => convert_children(node, out),
        },

        "msup" => match args::<2>(node) {
            Some([base, sup]) => {
                push_base(&group(base), out);
                push_script('^', &group(sup), out);
            }
            None => convert_children(node, out),
        },

        "msubsup" => match args::<3>(node) {
            Some([base, sub, sup]) => {
                push_base(&group(base), out);
                push_script('_', &group(sub), out);
                push_script('^', &group(sup), out);
            }
            None => convert_children(node, out),
        },

        "munder" => match args::<2>(node) {
            Some([base, under]) => convert_under(base, under, out),
            None => convert_children(node, out),
        },

        "mover" => match args::<2>(node) {
            Some([base, over]) => convert_over(base, over, out),
            None => convert_children(node, out),
        },

        "munderover" => match args::<3>(node) {
            Some([base, under, over]) => {
                let base_tex = group(base);
                if is_big_operator(&base_tex) {
                    push_base(&base_tex, out);
                    push_script('_', &group(under), out);
                    push_script('^', &group(over), out);
                } else {
                    push_command(
                        out,
                        &format!(
                            "\\overset{{{}}}{{\\underset{{{}}}{{{}}}}}",
                            group(over),
                            group(under),
                            base_tex
                        ),
                    );
                }
            }
            None => convert_children(node, out),
        },

        "mfenced" => convert_fenced(node, out),
        "mtable" => convert_table(node, out),

        "menclose" => {
            let mut inner = String::new();
            convert_children(node, &mut inner);
            let notation = node.attribute("notation").unwrap_or("longdiv");
            if notation.contains("box") {
                push_command(out, &format!("\\boxed{{{}}}", inner.trim()));
            } else {
                push_command(out, inner.trim());
            }
        }

        "mphantom" => {
            let mut inner = String::new();
            convert_children(node, &mut inner);
            push_command(out, &format!("\\phantom{{{}}}", inner.trim()));
        }

        // math, mrow, mstyle, mpadded, merror, mtr, mtd and anything unknown
        _ => convert_children(node, out),
    }
}

fn convert_under(base: Node, under: Node, out: &mut String) {
    let base_tex = group(base);
    if is_big_operator(&base_tex) {
        push_base(&base_tex, out);
        push_script('_', &group(under), out);
        return;
    }

    let accent = match token_text(under).as_str() {
        "_" | "\u{332}" | "‾" | "¯" => Some("\\underline"),
        "⏟" => Some("\\underbrace"),
        _ => None,
    };
    match accent {
        Some(command) => push_command(out, &format!("{}{{{}}}", command, base_tex)),
        None => push_command(
            out,
            &format!("\\underset{{{}}}{{{}}}", group(under), base_tex),
        ),
    }
}

fn convert_over(base: Node, over: Node, out: &mut String) {
    let base_tex = group(base);
    if is_big_operator(&base_tex) {
        push_base(&base_tex, out);
        push_script('^', &group(over), out);
        return;
    }

    let accent = match token_text(over).as_str() {
        "^" | "ˆ" | "\u{302}" => Some("\\hat"),
        "¯" | "‾" | "―" | "_" | "\u{305}" => Some("\\overline"),
        "→" | "\u{20d7}" => Some("\\vec"),
        "~" | "˜" | "\u{303}" => Some("\\tilde"),
        "˙" | "." | "\u{307}" => Some("\\dot"),
        "¨" | ".." | "\u{308}" => Some("\\ddot"),
        "⏞" => Some("\\overbrace"),
        _ => None,
    };
    match accent {
        Some(command) => push_command(out, &format!("{}{{{}}}", command, base_tex)),
        None => push_command(
            out,
            &format!("\\overset{{{}}}{{{}}}", group(over), base_tex),
        ),
    }
}

fn convert_fenced(node: Node, out: &mut String) {
    let open = node.attribute("open").unwrap_or("(");
    let close = node.attribute("close").unwrap_or(")");
    let separators: Vec<char> = node
        .attribute("separators")
        .unwrap_or(",")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut inner = String::new();
    for (i, child) in elements(node).enumerate() {
        if i > 0 {
            if let Some(sep) = separators.get(i - 1).or(separators.last()) {
                inner.push(*sep);
            }
        }
        inner.push_str(&group(child));
    }

    push_command(
        out,
        &format!("\\left{}{}\\right{}", delimiter(open), inner, delimiter(close)),
    );
}

fn convert_table(node: Node, out: &mut String) {
    let rows: Vec<String> = elements(node)
        .filter(|row| matches!(row.tag_name().name(), "mtr" | "mlabeledtr"))
        .map(|row| {
            elements(row)
                .filter(|cell| cell.tag_name().name() == "mtd")
                .map(group)
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect();

    push_command(
        out,
        &format!("\\begin{{matrix}}{}\\end{{matrix}}", rows.join(" \\\\ ")),
    );
}

/// LaTeX spelling of a fence character
fn delimiter(fence: &str) -> String {
    match fence {
        "" => ".".to_string(),
        "{" => "\\{".to_string(),
        "}" => "\\}".to_string(),
        _ => {
            let mut chars = fence.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => lookup(c).map(str::to_string).unwrap_or_else(|| c.to_string()),
                _ => fence.to_string(),
            }
        }
    }
}

fn token_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn push_identifier(text: &str, out: &mut String) {
    if FUNCTIONS.contains(&text) {
        push_command(out, &format!("\\{}", text));
    } else {
        push_symbols(text, out);
    }
}

fn push_operator(text: &str, out: &mut String) {
    push_identifier(text, out);
}

fn push_mtext(text: &str, out: &mut String) {
    if text.is_empty() {
        out.push_str("\\ ");
    } else {
        push_command(out, &format!("\\text{{{}}}", text));
    }
}

fn push_symbols(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            // function application, invisible times/separator/plus, zero width space
            '\u{2061}'..='\u{2064}' | '\u{200b}' => {}
            '\u{a0}' => out.push(' '),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '%' | '#' | '&' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => match lookup(c) {
                Some(latex) => push_command(out, latex),
                None => push_literal(out, c),
            },
        }
    }
}

fn push_base(base: &str, out: &mut String) {
    if needs_braces(base) {
        push_command(out, &format!("{{{}}}", base));
    } else {
        push_command(out, base);
    }
}

fn push_script(marker: char, script: &str, out: &mut String) {
    out.push(marker);
    out.push('{');
    out.push_str(script);
    out.push('}');
}

/// Bases longer than one symbol need a group before a script
fn needs_braces(base: &str) -> bool {
    let mut chars = base.chars();
    match (chars.next(), chars.next()) {
        (None, _) | (Some(_), None) => false,
        (Some('\\'), Some(_)) => !base[1..].chars().all(|c| c.is_ascii_alphabetic()),
        _ => !(base.ends_with(')') || base.ends_with(']') || base.ends_with('}')),
    }
}

fn is_big_operator(tex: &str) -> bool {
    BIG_OPERATORS.contains(&tex)
}
