// src/matching/normalizer.rs
//! Text canonicalization: case folding, punctuation stripping, light
//! stemming, synonym resolution.

use std::collections::HashMap;

/// Turns raw text into comparable canonical tokens.
///
/// Each instance owns its alias table, built once from the dictionary's
/// synonym pairs and never mutated, so a Normalizer can be shared across
/// concurrent match calls by reference.
pub struct Normalizer {
    aliases: HashMap<String, Vec<String>>,
    max_alias_len: usize,
}

impl Normalizer {
    /// Build from `(alias, canonical)` pairs, e.g. `("ai", "artificial
    /// intelligence")`. Both sides are canonicalized with the same folding
    /// and stemming so lookups stay consistent.
    pub fn new(pairs: &[(String, String)]) -> Self {
        let mut aliases = HashMap::new();
        let mut max_alias_len = 1;

        for (alias, canonical) in pairs {
            let alias_tokens: Vec<String> = tokenize(alias).iter().map(|t| stem(t)).collect();
            let canonical_tokens: Vec<String> =
                tokenize(canonical).iter().map(|t| stem(t)).collect();
            if alias_tokens.is_empty() || canonical_tokens.is_empty() {
                continue;
            }
            max_alias_len = max_alias_len.max(alias_tokens.len());
            aliases.insert(alias_tokens.join(" "), canonical_tokens);
        }

        Self {
            aliases,
            max_alias_len,
        }
    }

    /// Canonicalize free text into a token sequence. Never fails; empty or
    /// whitespace-only input yields an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let stemmed: Vec<String> = tokenize(text).iter().map(|t| stem(t)).collect();

        // Longest-first alias splice over the token stream, so multi-token
        // aliases like "project mgmt" win over their single-token pieces.
        let mut out = Vec::with_capacity(stemmed.len());
        let mut i = 0;
        while i < stemmed.len() {
            let mut replaced = false;
            let max_n = self.max_alias_len.min(stemmed.len() - i);
            for n in (1..=max_n).rev() {
                let key = stemmed[i..i + n].join(" ");
                if let Some(replacement) = self.aliases.get(&key) {
                    out.extend(replacement.iter().cloned());
                    i += n;
                    replaced = true;
                    break;
                }
            }
            if !replaced {
                out.push(stemmed[i].clone());
                i += 1;
            }
        }
        out
    }

    /// Canonical Term identity for a short phrase: normalized tokens joined
    /// with single spaces.
    pub fn canonical_phrase(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

/// Case-fold and split on punctuation/whitespace, keeping internal hyphens.
fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    let chars: Vec<char> = folded.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if c == '-'
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric())
        {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Light suffix stemming: plural "s", "-ing", "-ed". Deliberately shallow;
/// over-stemming causes false matches.
fn stem(token: &str) -> String {
    if let Some(base) = token.strip_suffix("ing") {
        if base.len() >= 4 {
            return base.to_string();
        }
    }
    if let Some(base) = token.strip_suffix("ed") {
        if base.len() >= 4 {
            return base.to_string();
        }
    }
    if token.len() > 3 && !token.ends_with("ss") && !token.ends_with("us") && !token.ends_with("is")
    {
        if let Some(base) = token.strip_suffix('s') {
            return base.to_string();
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Normalizer {
        Normalizer::new(&[])
    }

    fn pair(alias: &str, canonical: &str) -> (String, String) {
        (alias.to_string(), canonical.to_string())
    }

    #[test]
    fn test_case_fold_and_punctuation() {
        let n = plain();
        assert_eq!(
            n.normalize("Project Management, SQL!"),
            vec!["project", "management", "sql"]
        );
    }

    #[test]
    fn test_internal_hyphen_kept() {
        let n = plain();
        assert_eq!(n.normalize("cross-functional"), vec!["cross-functional"]);
        // Leading/trailing hyphens are punctuation, not word characters.
        assert_eq!(n.normalize("- agile -"), vec!["agile"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let n = plain();
        assert!(n.normalize("").is_empty());
        assert!(n.normalize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_light_stemming() {
        assert_eq!(stem("learning"), "learn");
        assert_eq!(stem("managed"), "manag");
        assert_eq!(stem("dashboards"), "dashboard");
        // Short tokens and -ss/-us/-is endings are left alone.
        assert_eq!(stem("aws"), "aws");
        assert_eq!(stem("business"), "business");
        assert_eq!(stem("analysis"), "analysis");
    }

    #[test]
    fn test_single_token_alias_expands() {
        let n = Normalizer::new(&[pair("ai", "artificial intelligence")]);
        assert_eq!(
            n.normalize("AI experience"),
            vec!["artificial", "intelligence", "experience"]
        );
    }

    #[test]
    fn test_multi_token_alias_wins_longest_first() {
        let n = Normalizer::new(&[
            pair("pm", "project management"),
            pair("project mgmt", "project management"),
        ]);
        assert_eq!(
            n.canonical_phrase("Project Mgmt"),
            n.canonical_phrase("project management")
        );
        assert_eq!(
            n.canonical_phrase("PM"),
            n.canonical_phrase("project management")
        );
    }

    #[test]
    fn test_unmapped_tokens_pass_through() {
        let n = Normalizer::new(&[pair("ai", "artificial intelligence")]);
        assert_eq!(n.normalize("kanban"), vec!["kanban"]);
    }

    #[test]
    fn test_canonical_phrase_is_deterministic() {
        let n = Normalizer::new(&[pair("ai", "artificial intelligence")]);
        assert_eq!(n.canonical_phrase("AI"), "artificial intelligence");
        assert_eq!(n.canonical_phrase("AI"), "artificial intelligence");
    }
}
