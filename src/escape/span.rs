// Span recognizers shared by the scanners.
//
// Each takes a `Finder` over the whole text and a byte offset and returns the
// exclusive end of the span opening there, or `None` when no properly closed
// span starts at that offset. They hold no state of their own, so each kind can
// be tested in isolation.

/// Forward search over one text, memoized per needle.
///
/// Scanner offsets only grow, so a cached hit stays the answer until the scan
/// moves past it, and a failed search means every later search for the same
/// needle fails too. Each needle's region of the text is therefore searched
/// once, keeping a whole pass linear even when no opener is ever closed.
#[derive(Debug)]
pub(crate) struct Finder<'t> {
    text: &'t str,
    /// `(needle, searched from, first hit at or after it)`.
    cache: Vec<(&'static str, usize, Option<usize>)>,
    /// Bytes examined by uncached searches.
    scanned: usize,
}

impl<'t> Finder<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self { text, cache: Vec::with_capacity(6), scanned: 0 }
    }

    pub(crate) fn text(&self) -> &'t str {
        self.text
    }

    pub(crate) fn bytes(&self) -> &'t [u8] {
        self.text.as_bytes()
    }

    /// Offset of the first `needle` at or after `from`.
    pub(crate) fn find(&mut self, from: usize, needle: &'static str) -> Option<usize> {
        let slot = self.cache.iter().position(|(n, _, _)| *n == needle);
        if let Some(slot) = slot {
            let (_, cached_from, hit) = self.cache[slot];
            if cached_from <= from && hit.is_none_or(|hit| hit >= from) {
                return hit;
            }
        }

        let hit = self.text.get(from..).and_then(|rest| rest.find(needle)).map(|pos| from + pos);
        self.scanned += hit.map_or(self.text.len().saturating_sub(from), |hit| hit - from + needle.len());

        match slot {
            Some(slot) => self.cache[slot] = (needle, from, hit),
            None => self.cache.push((needle, from, hit)),
        }
        hit
    }

    /// Total bytes examined so far.
    #[cfg(test)]
    pub(crate) fn scanned(&self) -> usize {
        self.scanned
    }
}

/// A backslash followed by a reserved byte, i.e. input the caller already escaped.
pub(crate) fn escaped(f: &Finder<'_>, start: usize, is_special: impl Fn(u8) -> bool) -> Option<usize> {
    match f.bytes().get(start..start + 2)? {
        [b'\\', next] if is_special(*next) => Some(start + 2),
        _ => None,
    }
}

/// `d…d` with a non-empty body, closed by the next `d`.
pub(crate) fn delimited(f: &mut Finder<'_>, start: usize, delim: &'static str) -> Option<usize> {
    double_delimited(f, start, delim)
}

/// Delimiter such as `*`, `__`, `||` or three backticks, with a non-empty body.
pub(crate) fn double_delimited(f: &mut Finder<'_>, start: usize, delim: &'static str) -> Option<usize> {
    if !f.text().get(start..)?.starts_with(delim) {
        return None;
    }
    let body = start + delim.len();
    let close = f.find(body, delim)?;
    (close > body).then_some(close + delim.len())
}

/// `[text](target)`.
///
/// The span ends at the first `)` after the first `(` that follows the first
/// `]`. Targets containing nested parentheses are cut at the inner `)`.
pub(crate) fn link(f: &mut Finder<'_>, start: usize) -> Option<usize> {
    if f.bytes().get(start) != Some(&b'[') {
        return None;
    }
    let close_bracket = f.find(start + 1, "]")?;
    let open_paren = f.find(close_bracket + 1, "(")?;
    let close_paren = f.find(open_paren + 1, ")")?;
    Some(close_paren + 1)
}

/// A run of `>` that is not the last byte of the text.
pub(crate) fn quote_prefix(f: &Finder<'_>, start: usize) -> Option<usize> {
    let bytes = f.bytes();
    if bytes.get(start) != Some(&b'>') || start + 1 >= bytes.len() {
        return None;
    }
    let run = bytes[start..].iter().take_while(|&&b| b == b'>').count();
    Some(start + run)
}
