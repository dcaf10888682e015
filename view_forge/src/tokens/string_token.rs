/// Tag string → token interning.
///
/// Tokens are assigned sequentially from 1; `StringToken::NONE` (0) is never
/// handed out. Once created, a token is stable for the registry's lifetime.

use rustc_hash::FxHashMap;

/// Small stable integer standing in for a tag string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringToken(pub u32);

impl StringToken {
    /// Reserved "no token" value
    pub const NONE: StringToken = StringToken(0);

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Tag → token mapping used by the view merger
pub trait TokenRegistry {
    /// Return the token for `tag`, creating it on first use.
    ///
    /// Must be idempotent: the same string always yields the same token.
    fn find_or_create(&mut self, tag: &str) -> StringToken;

    /// Return the token for `tag` if it was created before
    fn find(&self, tag: &str) -> Option<StringToken>;
}

/// Interning registry backed by a hash map and a reverse lookup table
#[derive(Debug, Default)]
pub struct StringTokenRegistry {
    tokens: FxHashMap<String, StringToken>,
    strings: Vec<String>,
}

impl StringTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// String for a previously created token
    pub fn resolve(&self, token: StringToken) -> Option<&str> {
        let index = token.0.checked_sub(1)? as usize;
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl TokenRegistry for StringTokenRegistry {
    fn find_or_create(&mut self, tag: &str) -> StringToken {
        if let Some(token) = self.tokens.get(tag) {
            return *token;
        }
        self.strings.push(tag.to_string());
        let token = StringToken(self.strings.len() as u32);
        self.tokens.insert(tag.to_string(), token);
        token
    }

    fn find(&self, tag: &str) -> Option<StringToken> {
        self.tokens.get(tag).copied()
    }
}

#[cfg(test)]
#[path = "string_token_tests.rs"]
mod tests;
