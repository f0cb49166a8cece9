//! Unicode to LaTeX fallback table.
//!
//! OneNote sometimes stores math symbols as plain characters instead of
//! MathML. The table maps those characters to LaTeX commands. The MathML
//! translator uses it for token text too.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Character to LaTeX notation, in lookup order
pub static UNICODE_FALLBACK: Lazy<IndexMap<char, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        // Greek lowercase
        ('α', "\\alpha"),
        ('β', "\\beta"),
        ('γ', "\\gamma"),
        ('δ', "\\delta"),
        ('ε', "\\varepsilon"),
        ('ϵ', "\\epsilon"),
        ('ζ', "\\zeta"),
        ('η', "\\eta"),
        ('θ', "\\theta"),
        ('ϑ', "\\vartheta"),
        ('ι', "\\iota"),
        ('κ', "\\kappa"),
        ('λ', "\\lambda"),
        ('μ', "\\mu"),
        ('ν', "\\nu"),
        ('ξ', "\\xi"),
        ('π', "\\pi"),
        ('ϖ', "\\varpi"),
        ('ρ', "\\rho"),
        ('ϱ', "\\varrho"),
        ('σ', "\\sigma"),
        ('ς', "\\varsigma"),
        ('τ', "\\tau"),
        ('υ', "\\upsilon"),
        ('φ', "\\varphi"),
        ('ϕ', "\\phi"),
        ('χ', "\\chi"),
        ('ψ', "\\psi"),
        ('ω', "\\omega"),
        // Greek uppercase
        ('Γ', "\\Gamma"),
        ('Δ', "\\Delta"),
        ('Θ', "\\Theta"),
        ('Λ', "\\Lambda"),
        ('Ξ', "\\Xi"),
        ('Π', "\\Pi"),
        ('Σ', "\\Sigma"),
        ('Υ', "\\Upsilon"),
        ('Φ', "\\Phi"),
        ('Ψ', "\\Psi"),
        ('Ω', "\\Omega"),
        // Binary operators
        ('±', "\\pm"),
        ('∓', "\\mp"),
        ('×', "\\times"),
        ('÷', "\\div"),
        ('·', "\\cdot"),
        ('⋅', "\\cdot"),
        ('∘', "\\circ"),
        ('∗', "\\ast"),
        ('−', "-"),
        ('⊕', "\\oplus"),
        ('⊗', "\\otimes"),
        ('∧', "\\wedge"),
        ('∨', "\\vee"),
        ('∩', "\\cap"),
        ('∪', "\\cup"),
        ('∖', "\\setminus"),
        // Relations
        ('≤', "\\leq"),
        ('≥', "\\geq"),
        ('≠', "\\neq"),
        ('≈', "\\approx"),
        ('≡', "\\equiv"),
        ('≅', "\\cong"),
        ('∼', "\\sim"),
        ('≃', "\\simeq"),
        ('∝', "\\propto"),
        ('≪', "\\ll"),
        ('≫', "\\gg"),
        ('∈', "\\in"),
        ('∉', "\\notin"),
        ('∋', "\\ni"),
        ('⊂', "\\subset"),
        ('⊃', "\\supset"),
        ('⊆', "\\subseteq"),
        ('⊇', "\\supseteq"),
        ('⊥', "\\perp"),
        ('∥', "\\parallel"),
        ('∣', "\\mid"),
        ('≔', "\\coloneqq"),
        // Arrows
        ('→', "\\rightarrow"),
        ('←', "\\leftarrow"),
        ('↔', "\\leftrightarrow"),
        ('⇒', "\\Rightarrow"),
        ('⇐', "\\Leftarrow"),
        ('⇔', "\\Leftrightarrow"),
        ('↦', "\\mapsto"),
        ('↑', "\\uparrow"),
        ('↓', "\\downarrow"),
        // Big operators
        ('∑', "\\sum"),
        ('∏', "\\prod"),
        ('∐', "\\coprod"),
        ('∫', "\\int"),
        ('∬', "\\iint"),
        ('∭', "\\iiint"),
        ('∮', "\\oint"),
        ('⋃', "\\bigcup"),
        ('⋂', "\\bigcap"),
        // Logic and sets
        ('∀', "\\forall"),
        ('∃', "\\exists"),
        ('∄', "\\nexists"),
        ('¬', "\\neg"),
        ('∅', "\\emptyset"),
        ('∴', "\\therefore"),
        ('∵', "\\because"),
        // Misc symbols
        ('∞', "\\infty"),
        ('∂', "\\partial"),
        ('∇', "\\nabla"),
        ('√', "\\sqrt"),
        ('∠', "\\angle"),
        ('°', "^\\circ"),
        ('′', "'"),
        ('″', "''"),
        ('…', "\\ldots"),
        ('⋯', "\\cdots"),
        ('⋮', "\\vdots"),
        ('⋱', "\\ddots"),
        ('ℏ', "\\hbar"),
        ('ℓ', "\\ell"),
        ('ℜ', "\\Re"),
        ('ℑ', "\\Im"),
        ('ℵ', "\\aleph"),
        ('⟨', "\\langle"),
        ('⟩', "\\rangle"),
        ('‖', "\\|"),
        ('⌊', "\\lfloor"),
        ('⌋', "\\rfloor"),
        ('⌈', "\\lceil"),
        ('⌉', "\\rceil"),
        // Blackboard bold
        ('ℕ', "\\mathbb{N}"),
        ('ℤ', "\\mathbb{Z}"),
        ('ℚ', "\\mathbb{Q}"),
        ('ℝ', "\\mathbb{R}"),
        ('ℂ', "\\mathbb{C}"),
    ])
});

/// Look up the LaTeX notation for a character
pub fn lookup(c: char) -> Option<&'static str> {
    UNICODE_FALLBACK.get(&c).copied()
}

/// Replace every table character in `text` with its notation.
///
/// Other characters are copied unchanged. A space is inserted after a
/// substituted command when the next character is an ASCII letter, so `αx`
/// becomes `\alpha x`.
pub fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_command = false;
    for c in text.chars() {
        match lookup(c) {
            Some(latex) => {
                if after_command && latex.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    out.push(' ');
                }
                out.push_str(latex);
                after_command = ends_with_control_word(latex);
            }
            None => {
                if after_command && c.is_ascii_alphabetic() {
                    out.push(' ');
                }
                out.push(c);
                after_command = false;
            }
        }
    }
    out
}

/// Append a LaTeX fragment, separating it from a preceding control word
pub(crate) fn push_command(out: &mut String, latex: &str) {
    if latex.starts_with(|c: char| c.is_ascii_alphabetic()) && ends_with_control_word(out) {
        out.push(' ');
    }
    out.push_str(latex);
}

/// Append a literal character, separating it from a preceding control word
pub(crate) fn push_literal(out: &mut String, c: char) {
    if c.is_ascii_alphabetic() && ends_with_control_word(out) {
        out.push(' ');
    }
    out.push(c);
}

/// Check if `s` ends with `\` followed by one or more ASCII letters
pub(crate) fn ends_with_control_word(s: &str) -> bool {
    let trimmed = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    trimmed.len() < s.len() && trimmed.ends_with('\\') && !trimmed.ends_with("\\\\")
}
