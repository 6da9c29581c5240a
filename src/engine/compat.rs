//! Per-engine compatibility probing.
//!
//! Each configured engine is checked independently: first the dialect's
//! feature gate over the token stream, then a real compile under the
//! backend implementing that dialect family. The `regex` crate stands in
//! for RE2 and the host engine; `fancy-regex` stands in for the
//! backtracking dialects (PCRE, Java, JavaScript).
//!
//! Where a dialect accepts syntax its backend does not parse, the text is
//! lowered before compiling: `\Q...\E` quotes become escaped literals for
//! the dialects that support them, and JavaScript lookbehinds are compiled
//! as lookaheads because that dialect allows variable-length lookbehind.

use crate::core::analysis::{CompatibilityMap, RegexEngine};
use crate::engine::syntax::{EscapeKind, GroupKind, PatternSyntax, SyntaxFeatures, TokenKind};
use std::borrow::Cow;
use tracing::debug;

/// Compiled-program ceiling for the automaton backend.
const AUTOMATON_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Probes a pattern under a fixed set of engines.
#[derive(Debug, Clone)]
pub struct CompatibilityProber {
    engines: Vec<RegexEngine>,
}

impl Default for CompatibilityProber {
    fn default() -> Self {
        Self::new(&RegexEngine::ALL)
    }
}

impl CompatibilityProber {
    /// Duplicate engines collapse to a single probe.
    pub fn new(engines: &[RegexEngine]) -> Self {
        let mut engines = engines.to_vec();
        engines.sort();
        engines.dedup();
        Self { engines }
    }

    pub fn engines(&self) -> &[RegexEngine] {
        &self.engines
    }

    pub fn probe(&self, pattern: &str) -> CompatibilityMap {
        self.probe_syntax(&PatternSyntax::parse(pattern))
    }

    pub fn probe_syntax(&self, syntax: &PatternSyntax<'_>) -> CompatibilityMap {
        let features = syntax.features();
        self.engines
            .iter()
            .map(|&engine| (engine, accepts(engine, syntax, &features)))
            .collect()
    }
}

fn accepts(engine: RegexEngine, syntax: &PatternSyntax<'_>, features: &SyntaxFeatures) -> bool {
    if let Err(construct) = dialect_check(engine, features) {
        debug!(%engine, construct, "Dialect rejects pattern construct");
        return false;
    }
    let text = backend_text(engine, syntax);
    let compiled = match engine {
        RegexEngine::Re2 | RegexEngine::Rust => regex::RegexBuilder::new(&text)
            .size_limit(AUTOMATON_SIZE_LIMIT)
            .build()
            .map(drop)
            .map_err(|e| e.to_string()),
        RegexEngine::Pcre | RegexEngine::Java | RegexEngine::Javascript => {
            fancy_regex::Regex::new(&text)
                .map(drop)
                .map_err(|e| e.to_string())
        }
    };
    match compiled {
        Ok(()) => true,
        Err(error) => {
            debug!(%engine, %error, "Pattern failed to compile");
            false
        }
    }
}

/// Pattern text as the backend for `engine` should see it.
fn backend_text<'a>(engine: RegexEngine, syntax: &PatternSyntax<'a>) -> Cow<'a, str> {
    let lower_lookbehind = engine == RegexEngine::Javascript;
    let needs_rewrite = syntax.tokens.iter().any(|t| match t.kind {
        TokenKind::Escape(EscapeKind::Quoted) => true,
        TokenKind::GroupOpen(GroupKind::Lookbehind) => lower_lookbehind,
        _ => false,
    });
    if !needs_rewrite {
        return Cow::Borrowed(syntax.text);
    }

    let mut out = String::with_capacity(syntax.text.len() + 8);
    for token in &syntax.tokens {
        let source = syntax.slice(token);
        match token.kind {
            TokenKind::Escape(EscapeKind::Quoted) => {
                let body = &source[2..];
                out.push_str(&regex::escape(body.strip_suffix("\\E").unwrap_or(body)));
            }
            // `(?<=` and `(?<!` become `(?=` and `(?!`
            TokenKind::GroupOpen(GroupKind::Lookbehind) if lower_lookbehind => {
                out.push_str("(?");
                out.push_str(&source[3..]);
            }
            _ => out.push_str(source),
        }
    }
    Cow::Owned(out)
}

/// Feature gate for one dialect. The error names the first unsupported
/// construct found.
pub fn dialect_check(engine: RegexEngine, f: &SyntaxFeatures) -> Result<(), &'static str> {
    let rejected: Vec<(bool, &'static str)> = match engine {
        RegexEngine::Pcre => Vec::new(),
        RegexEngine::Re2 => vec![
            (f.lookahead, "lookahead"),
            (f.lookbehind, "lookbehind"),
            (f.backreferences, "backreference"),
            (f.atomic_groups, "atomic group"),
            (f.possessive_quantifiers, "possessive quantifier"),
            (f.stacked_quantifiers, "stacked quantifier"),
            (f.quote_named_groups, "quote-named group"),
            (f.special_groups, "special group"),
        ],
        RegexEngine::Rust => vec![
            (f.lookahead, "lookahead"),
            (f.lookbehind, "lookbehind"),
            (f.backreferences, "backreference"),
            (f.atomic_groups, "atomic group"),
            (f.possessive_quantifiers, "possessive quantifier"),
            (f.quoted_literals, "\\Q quote"),
            (f.quote_named_groups, "quote-named group"),
            (f.special_groups, "special group"),
        ],
        RegexEngine::Javascript => vec![
            (f.atomic_groups, "atomic group"),
            (f.possessive_quantifiers, "possessive quantifier"),
            (f.stacked_quantifiers, "stacked quantifier"),
            (f.quoted_literals, "\\Q quote"),
            (f.inline_flags, "inline flags"),
            (f.python_named_groups, "(?P<name> group"),
            (f.quote_named_groups, "quote-named group"),
            (f.input_anchors, "input anchor"),
            (f.special_groups, "special group"),
        ],
        RegexEngine::Java => vec![
            (f.python_named_groups, "(?P<name> group"),
            (f.quote_named_groups, "quote-named group"),
            (f.special_groups, "special group"),
        ],
    };
    match rejected.into_iter().find(|(present, _)| *present) {
        Some((_, construct)) => Err(construct),
        None => Ok(()),
    }
}
