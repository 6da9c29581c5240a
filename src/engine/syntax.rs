//! Tolerant tokenizer for regular-expression pattern text.
//!
//! Every component of the engine looks at patterns through this module.
//! It never fails: malformed input (unbalanced parentheses, unterminated
//! classes, dangling quantifiers) still yields a best-effort token stream,
//! so structural probes keep working on patterns that no engine accepts.
//!
//! An unterminated class, group name, braced escape or `\Q` quote runs to
//! the end of the text as one token, so appending text to a pattern never
//! swallows an operator the shorter pattern already had.

/// How a quantifier treats backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greediness {
    Greedy,
    Lazy,
    Possessive,
}

/// Repetition operator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Optional,
    /// `{n}`
    Exact(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{n,m}`
    Range(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub kind: QuantifierKind,
    pub greediness: Greediness,
}

impl Quantifier {
    /// No upper bound on repetitions.
    pub fn is_unbounded(&self) -> bool {
        matches!(
            self.kind,
            QuantifierKind::Star | QuantifierKind::Plus | QuantifierKind::AtLeast(_)
        )
    }

    pub fn is_possessive(&self) -> bool {
        self.greediness == Greediness::Possessive
    }

    /// Unbounded and still able to give back input on backtracking.
    pub fn is_backtracking_unbounded(&self) -> bool {
        self.is_unbounded() && !self.is_possessive()
    }
}

/// Syntax used to name a capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// `(?<name>...)`
    Angle,
    /// `(?P<name>...)`
    Python,
    /// `(?'name'...)`
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    NonCapturing,
    Named(NameStyle),
    Atomic,
    Lookahead,
    Lookbehind,
    /// `(?i:...)`
    FlagScoped,
    /// Any other `(?` construct (conditionals, recursion, comments).
    Other,
}

impl GroupKind {
    /// Whether the matcher may re-enter the group on backtracking.
    pub fn is_backtrackable(&self) -> bool {
        matches!(
            self,
            GroupKind::Capturing
                | GroupKind::NonCapturing
                | GroupKind::Named(_)
                | GroupKind::FlagScoped
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    /// `\1`..`\99`, `\k<name>`
    Backreference,
    /// `\A`
    StartOfInput,
    /// `\Z`, `\z`
    EndOfInput,
    /// `\Q...\E`; runs to the end of the pattern when `\E` is missing.
    Quoted,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    Escape(EscapeKind),
    /// `[...]`
    Class,
    Dot,
    /// `^` or `$`
    Anchor,
    /// Bare inline flags such as `(?i)`; opens no group.
    Flags,
    GroupOpen(GroupKind),
    GroupClose,
    Alternation,
    Quantifier(Quantifier),
}

/// A token with its byte span in the pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn quantifier(&self) -> Option<Quantifier> {
        match self.kind {
            TokenKind::Quantifier(q) => Some(q),
            _ => None,
        }
    }
}

/// A group with token indices of its opener and (if present) closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    pub open: usize,
    pub close: Option<usize>,
}

/// Constructs used by a pattern that not every dialect supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyntaxFeatures {
    pub lookahead: bool,
    pub lookbehind: bool,
    pub atomic_groups: bool,
    pub possessive_quantifiers: bool,
    pub backreferences: bool,
    pub inline_flags: bool,
    pub python_named_groups: bool,
    pub quote_named_groups: bool,
    pub input_anchors: bool,
    pub special_groups: bool,
    /// A quantifier applied directly to another, as in `a**` or `a{2}{3}`.
    pub stacked_quantifiers: bool,
    pub quoted_literals: bool,
}

/// Tokenized view of a pattern.
#[derive(Debug, Clone)]
pub struct PatternSyntax<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token>,
    pub groups: Vec<Group>,
}

impl<'a> PatternSyntax<'a> {
    pub fn parse(text: &'a str) -> Self {
        let tokens = tokenize(text);
        let groups = match_groups(&tokens);
        Self {
            text,
            tokens,
            groups,
        }
    }

    /// Source text of a token.
    pub fn slice(&self, token: &Token) -> &'a str {
        &self.text[token.start..token.end]
    }

    pub fn quantifier_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Quantifier(_)))
            .count()
    }

    pub fn alternation_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Alternation)
            .count()
    }

    /// Groups plus bare inline-flag constructs; every token opened by `(`.
    pub fn paren_count(&self) -> usize {
        let flags = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Flags)
            .count();
        self.groups.len() + flags
    }

    /// Tokens strictly between a group's opener and closer.
    pub fn body(&self, group: &Group) -> &[Token] {
        match group.close {
            Some(close) => &self.tokens[group.open + 1..close],
            None => &self.tokens[group.open + 1..],
        }
    }

    /// Quantifier applied to the whole group, if any.
    pub fn group_quantifier(&self, group: &Group) -> Option<Quantifier> {
        let close = group.close?;
        self.tokens.get(close + 1).and_then(Token::quantifier)
    }

    /// The group body's final token is an unbounded backtracking quantifier.
    pub fn body_ends_in_unbounded(&self, group: &Group) -> bool {
        self.body(group)
            .last()
            .and_then(Token::quantifier)
            .is_some_and(|q| q.is_backtracking_unbounded())
    }

    /// Any quantifier inside the body (nested groups included).
    pub fn body_has_quantifier(&self, group: &Group) -> bool {
        self.body(group).iter().any(|t| t.quantifier().is_some())
    }

    pub fn body_has_unbounded(&self, group: &Group) -> bool {
        self.body(group)
            .iter()
            .filter_map(Token::quantifier)
            .any(|q| q.is_backtracking_unbounded())
    }

    /// `.` immediately followed by an unbounded backtracking quantifier.
    pub fn wildcard_spans(&self) -> usize {
        self.tokens
            .windows(2)
            .filter(|w| {
                w[0].kind == TokenKind::Dot
                    && w[1]
                        .quantifier()
                        .is_some_and(|q| q.is_backtracking_unbounded())
            })
            .count()
    }

    pub fn features(&self) -> SyntaxFeatures {
        let mut f = SyntaxFeatures::default();
        for t in &self.tokens {
            match t.kind {
                TokenKind::GroupOpen(GroupKind::Lookahead) => f.lookahead = true,
                TokenKind::GroupOpen(GroupKind::Lookbehind) => f.lookbehind = true,
                TokenKind::GroupOpen(GroupKind::Atomic) => f.atomic_groups = true,
                TokenKind::GroupOpen(GroupKind::FlagScoped) | TokenKind::Flags => {
                    f.inline_flags = true
                }
                TokenKind::GroupOpen(GroupKind::Named(NameStyle::Python)) => {
                    f.python_named_groups = true
                }
                TokenKind::GroupOpen(GroupKind::Named(NameStyle::Quote)) => {
                    f.quote_named_groups = true
                }
                TokenKind::GroupOpen(GroupKind::Other) => f.special_groups = true,
                TokenKind::Quantifier(q) if q.is_possessive() => f.possessive_quantifiers = true,
                TokenKind::Escape(EscapeKind::Backreference) => f.backreferences = true,
                TokenKind::Escape(EscapeKind::StartOfInput | EscapeKind::EndOfInput) => {
                    f.input_anchors = true
                }
                TokenKind::Escape(EscapeKind::Quoted) => f.quoted_literals = true,
                _ => {}
            }
        }
        f.stacked_quantifiers = self
            .tokens
            .windows(2)
            .any(|w| w[0].quantifier().is_some() && w[1].quantifier().is_some());
        f
    }
}

/// Split pattern text into tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let end_of = |i: usize| chars.get(i).map(|(b, _)| *b).unwrap_or(text.len());
    let char_at = |i: usize| chars.get(i).map(|(_, c)| *c);

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let start = chars[i].0;
        let c = chars[i].1;
        let (kind, next) = match c {
            '\\' => lex_escape(&chars, i),
            // An unterminated class runs to the end of the pattern.
            '[' => match class_end(&chars, i) {
                Some(last) => (TokenKind::Class, last + 1),
                None => (TokenKind::Class, chars.len()),
            },
            '(' => lex_group_open(&chars, i),
            ')' => (TokenKind::GroupClose, i + 1),
            '|' => (TokenKind::Alternation, i + 1),
            '.' => (TokenKind::Dot, i + 1),
            '^' | '$' => (TokenKind::Anchor, i + 1),
            '*' | '+' | '?' => {
                let kind = match c {
                    '*' => QuantifierKind::Star,
                    '+' => QuantifierKind::Plus,
                    _ => QuantifierKind::Optional,
                };
                let (greediness, next) = greediness_suffix(char_at(i + 1), i + 1);
                (
                    TokenKind::Quantifier(Quantifier { kind, greediness }),
                    next,
                )
            }
            '{' => match counted_repetition(&chars, i) {
                Some((kind, after)) => {
                    let (greediness, next) = greediness_suffix(char_at(after), after);
                    (
                        TokenKind::Quantifier(Quantifier { kind, greediness }),
                        next,
                    )
                }
                None => (TokenKind::Literal('{'), i + 1),
            },
            other => (TokenKind::Literal(other), i + 1),
        };
        tokens.push(Token {
            kind,
            start,
            end: end_of(next),
        });
        i = next;
    }
    tokens
}

fn greediness_suffix(next: Option<char>, idx: usize) -> (Greediness, usize) {
    match next {
        Some('?') => (Greediness::Lazy, idx + 1),
        Some('+') => (Greediness::Possessive, idx + 1),
        _ => (Greediness::Greedy, idx),
    }
}

fn lex_escape(chars: &[(usize, char)], i: usize) -> (TokenKind, usize) {
    let Some(&(_, c)) = chars.get(i + 1) else {
        return (TokenKind::Literal('\\'), i + 1);
    };
    match c {
        '1'..='9' => {
            let mut j = i + 2;
            while chars.get(j).is_some_and(|(_, d)| d.is_ascii_digit()) {
                j += 1;
            }
            (TokenKind::Escape(EscapeKind::Backreference), j)
        }
        'k' => match chars.get(i + 2).map(|(_, d)| *d) {
            Some(open @ ('<' | '{' | '\'')) => {
                let close = match open {
                    '<' => '>',
                    '{' => '}',
                    _ => '\'',
                };
                let end = find_char(chars, i + 3, close).map_or(chars.len(), |j| j + 1);
                (TokenKind::Escape(EscapeKind::Backreference), end)
            }
            _ => (TokenKind::Escape(EscapeKind::Other), i + 2),
        },
        'A' => (TokenKind::Escape(EscapeKind::StartOfInput), i + 2),
        'Q' => {
            let end = (i + 2..chars.len().saturating_sub(1))
                .find(|&j| chars[j].1 == '\\' && chars[j + 1].1 == 'E')
                .map_or(chars.len(), |j| j + 2);
            (TokenKind::Escape(EscapeKind::Quoted), end)
        }
        'Z' | 'z' => (TokenKind::Escape(EscapeKind::EndOfInput), i + 2),
        'p' | 'P' | 'x' | 'u' if chars.get(i + 2).is_some_and(|(_, d)| *d == '{') => {
            let end = find_char(chars, i + 3, '}').map_or(chars.len(), |j| j + 1);
            (TokenKind::Escape(EscapeKind::Other), end)
        }
        _ => (TokenKind::Escape(EscapeKind::Other), i + 2),
    }
}

fn find_char(chars: &[(usize, char)], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j].1 == needle)
}

/// Index of the `]` closing the class opened at `i`, if terminated.
fn class_end(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let mut j = i + 1;
    if chars.get(j).is_some_and(|(_, c)| *c == '^') {
        j += 1;
    }
    // A leading `]` is a literal member.
    if chars.get(j).is_some_and(|(_, c)| *c == ']') {
        j += 1;
    }
    let mut depth = 1usize;
    while j < chars.len() {
        match chars[j].1 {
            '\\' => j += 2,
            '[' if chars.get(j + 1).is_some_and(|(_, c)| *c == ':') => {
                // POSIX class such as [:alpha:] or [:^digit:]
                let mut k = j + 2;
                if chars.get(k).is_some_and(|(_, c)| *c == '^') {
                    k += 1;
                }
                while chars.get(k).is_some_and(|(_, c)| c.is_ascii_alphabetic()) {
                    k += 1;
                }
                let closed = chars.get(k).is_some_and(|(_, c)| *c == ':')
                    && chars.get(k + 1).is_some_and(|(_, c)| *c == ']');
                j = if closed { k + 2 } else { j + 1 };
            }
            '[' => {
                depth += 1;
                j += 1;
            }
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
                j += 1;
            }
            _ => j += 1,
        }
    }
    None
}

/// Parse `{n}`, `{n,}` or `{n,m}` starting at `i`; returns the kind and
/// the index just past `}`.
fn counted_repetition(chars: &[(usize, char)], i: usize) -> Option<(QuantifierKind, usize)> {
    let close = find_char(chars, i + 1, '}')?;
    let inner: String = chars[i + 1..close].iter().map(|(_, c)| *c).collect();
    let kind = match inner.split_once(',') {
        None => QuantifierKind::Exact(parse_count(&inner)?),
        Some((lo, "")) => QuantifierKind::AtLeast(parse_count(lo)?),
        Some((lo, hi)) => QuantifierKind::Range(parse_count(lo)?, parse_count(hi)?),
    };
    Some((kind, close + 1))
}

fn parse_count(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn lex_group_open(chars: &[(usize, char)], i: usize) -> (TokenKind, usize) {
    let at = |k: usize| chars.get(k).map(|(_, c)| *c);
    if at(i + 1) != Some('?') {
        return (TokenKind::GroupOpen(GroupKind::Capturing), i + 1);
    }
    match at(i + 2) {
        Some(':') => (TokenKind::GroupOpen(GroupKind::NonCapturing), i + 3),
        Some('>') => (TokenKind::GroupOpen(GroupKind::Atomic), i + 3),
        Some('=') | Some('!') => (TokenKind::GroupOpen(GroupKind::Lookahead), i + 3),
        Some('<') => match at(i + 3) {
            Some('=') | Some('!') => (TokenKind::GroupOpen(GroupKind::Lookbehind), i + 4),
            _ => {
                let end = find_char(chars, i + 3, '>').map_or(chars.len(), |j| j + 1);
                (
                    TokenKind::GroupOpen(GroupKind::Named(NameStyle::Angle)),
                    end,
                )
            }
        },
        Some('P') if at(i + 3) == Some('<') => {
            let end = find_char(chars, i + 4, '>').map_or(chars.len(), |j| j + 1);
            (
                TokenKind::GroupOpen(GroupKind::Named(NameStyle::Python)),
                end,
            )
        }
        Some('\'') => {
            let end = find_char(chars, i + 3, '\'').map_or(chars.len(), |j| j + 1);
            (
                TokenKind::GroupOpen(GroupKind::Named(NameStyle::Quote)),
                end,
            )
        }
        Some(c) if is_flag(c) => {
            // Inline flags: `(?i)` or scoped `(?i:`
            let mut j = i + 2;
            while at(j).is_some_and(is_flag) {
                j += 1;
            }
            match at(j) {
                Some(')') => (TokenKind::Flags, j + 1),
                Some(':') => (TokenKind::GroupOpen(GroupKind::FlagScoped), j + 1),
                _ => (TokenKind::GroupOpen(GroupKind::Other), i + 2),
            }
        }
        _ => (TokenKind::GroupOpen(GroupKind::Other), i + 2),
    }
}

fn is_flag(c: char) -> bool {
    matches!(c, 'i' | 'm' | 's' | 'x' | 'u' | 'U' | 'n' | 'J' | '-')
}

/// Pair openers with closers. Stray `)` tokens are ignored.
fn match_groups(tokens: &[Token]) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for (idx, t) in tokens.iter().enumerate() {
        match t.kind {
            TokenKind::GroupOpen(kind) => {
                stack.push(groups.len());
                groups.push(Group {
                    kind,
                    open: idx,
                    close: None,
                });
            }
            TokenKind::GroupClose => {
                if let Some(g) = stack.pop() {
                    groups[g].close = Some(idx);
                }
            }
            _ => {}
        }
    }
    groups
}
