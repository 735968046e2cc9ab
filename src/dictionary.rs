// src/dictionary.rs
//! Fixed domain vocabulary: known skill/certification/soft-skill phrases and
//! the synonym table. Loaded once at engine construction and shared
//! immutably; there is no runtime-extensible registry.

use crate::matching::normalizer::Normalizer;
use crate::types::Category;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Raw dictionary data: surface phrases with their fixed category, plus
/// `(alias, canonical)` synonym pairs. General skills are stored as
/// `MustHave`; the extractor downgrades them to `NiceToHave` when the
/// posting marks a section as preferred.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    entries: Vec<DictEntry>,
    synonyms: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct DictEntry {
    pub phrase: String,
    pub category: Category,
}

// Built-in vocabulary. Kept short on purpose: a dictionary term that never
// appears in real postings only slows the scan down.
const SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "sql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "google cloud",
    "docker",
    "kubernetes",
    "terraform",
    "ci/cd",
    "devops",
    "microservices",
    "rest api",
    "graphql",
    "react",
    "angular",
    "machine learning",
    "artificial intelligence",
    "deep learning",
    "natural language processing",
    "generative artificial intelligence",
    "large language models",
    "data science",
    "data engineering",
    "data analytics",
    "big data",
    "data visualization",
    "data warehousing",
    "business intelligence",
    "etl",
    "tableau",
    "power bi",
    "excel",
    "agile",
    "scrum",
    "kanban",
    "lean",
    "project management",
    "program management",
    "product management",
    "pmo",
    "stakeholder management",
    "change management",
    "strategic planning",
    "business development",
    "business analysis",
    "budget management",
    "vendor management",
    "risk management",
    "digital transformation",
    "process improvement",
    "operational excellence",
    "supply chain",
    "quality assurance",
    "cybersecurity",
    "information security",
    "penetration testing",
    "healthcare",
    "telemedicine",
    "electronic health records",
    "clinical decision support",
    "fintech",
    "payments",
    "banking",
    "blockchain",
    "erp",
    "sap",
    "crm",
    "salesforce",
];

const CERTIFICATIONS: &[&str] = &[
    "pmp",
    "certified scrum master",
    "cbap",
    "itil",
    "six sigma",
    "lean six sigma",
    "hipaa",
    "gdpr",
    "soc 2",
    "iso 27001",
    "cissp",
    "mba",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "collaboration",
    "problem solving",
    "critical thinking",
    "decision making",
    "negotiation",
    "conflict resolution",
    "adaptability",
    "mentoring",
    "presentation skills",
    "emotional intelligence",
];

const SYNONYMS: &[(&str, &str)] = &[
    ("ai", "artificial intelligence"),
    ("ml", "machine learning"),
    ("nlp", "natural language processing"),
    ("genai", "generative artificial intelligence"),
    ("generative ai", "generative artificial intelligence"),
    ("llm", "large language models"),
    ("llms", "large language models"),
    ("pm", "project management"),
    ("project mgmt", "project management"),
    ("k8s", "kubernetes"),
    ("gcp", "google cloud"),
    ("amazon web services", "aws"),
    ("js", "javascript"),
    ("postgres", "postgresql"),
    ("bi", "business intelligence"),
    ("qa", "quality assurance"),
    ("infosec", "information security"),
    ("csm", "certified scrum master"),
    ("scrum master", "certified scrum master"),
    ("ehr", "electronic health records"),
    ("emr", "electronic health records"),
    ("electronic medical records", "electronic health records"),
];

impl SkillDictionary {
    /// The compiled-in vocabulary.
    pub fn built_in() -> Self {
        let mut entries = Vec::new();
        for phrase in SKILLS {
            entries.push(DictEntry {
                phrase: (*phrase).to_string(),
                category: Category::MustHave,
            });
        }
        for phrase in CERTIFICATIONS {
            entries.push(DictEntry {
                phrase: (*phrase).to_string(),
                category: Category::Certification,
            });
        }
        for phrase in SOFT_SKILLS {
            entries.push(DictEntry {
                phrase: (*phrase).to_string(),
                category: Category::SoftSkill,
            });
        }
        let synonyms = SYNONYMS
            .iter()
            .map(|(a, c)| ((*a).to_string(), (*c).to_string()))
            .collect();
        Self { entries, synonyms }
    }

    /// Load a replacement vocabulary from TOML:
    ///
    /// ```toml
    /// [[terms]]
    /// phrase = "machine learning"
    /// category = "must_have"
    ///
    /// [synonyms]
    /// ai = "artificial intelligence"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DictionaryFile =
            toml::from_str(content).context("Failed to parse skill dictionary TOML")?;

        let entries = file
            .terms
            .into_iter()
            .map(|spec| DictEntry {
                phrase: spec.phrase,
                category: spec.category,
            })
            .collect();
        let synonyms = file.synonyms.into_iter().collect();

        Ok(Self { entries, synonyms })
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn synonyms(&self) -> &[(String, String)] {
        &self.synonyms
    }
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    terms: Vec<TermSpec>,
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct TermSpec {
    phrase: String,
    category: Category,
}

/// Dictionary phrases canonicalized through one Normalizer: canonical key →
/// display phrase + category, plus the longest key length for the
/// longest-match-first scan.
pub struct PhraseTable {
    phrases: HashMap<String, PhraseInfo>,
    max_phrase_len: usize,
}

#[derive(Debug, Clone)]
pub struct PhraseInfo {
    pub display: String,
    pub category: Category,
}

impl PhraseTable {
    pub fn build(dictionary: &SkillDictionary, normalizer: &Normalizer) -> Self {
        let mut phrases = HashMap::new();
        let mut max_phrase_len = 1;

        for entry in dictionary.entries() {
            let tokens = normalizer.normalize(&entry.phrase);
            if tokens.is_empty() {
                continue;
            }
            max_phrase_len = max_phrase_len.max(tokens.len());
            phrases.insert(
                tokens.join(" "),
                PhraseInfo {
                    display: entry.phrase.clone(),
                    category: entry.category,
                },
            );
        }

        Self {
            phrases,
            max_phrase_len,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&PhraseInfo> {
        self.phrases.get(key)
    }

    /// Longest match starting at `tokens[start]`, if any. Returns the number
    /// of tokens consumed, the canonical key and the phrase info.
    pub fn match_at<'a>(
        &'a self,
        tokens: &[String],
        start: usize,
    ) -> Option<(usize, String, &'a PhraseInfo)> {
        let max_n = self.max_phrase_len.min(tokens.len() - start);
        for n in (1..=max_n).rev() {
            let key = tokens[start..start + n].join(" ");
            if let Some(info) = self.phrases.get(&key) {
                return Some((n, key, info));
            }
        }
        None
    }

    /// Non-overlapping dictionary matches across a whole token sequence,
    /// longest-first. Used to derive covered terms for untagged bullets.
    pub fn matches_in(&self, tokens: &[String]) -> Vec<(String, &PhraseInfo)> {
        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if let Some((n, key, info)) = self.match_at(tokens, i) {
                found.push((key, info));
                i += n;
            } else {
                i += 1;
            }
        }
        found
    }

    pub fn display(&self, key: &str) -> String {
        self.phrases
            .get(key)
            .map(|info| info.display.clone())
            .unwrap_or_else(|| key.to_string())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
