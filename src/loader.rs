// src/loader.rs
//! File-based inputs for the CLI: a TOML profile and a free-text posting.
//! The engine itself only ever sees the parsed in-memory structures.

use crate::types::ProfileEntry;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// On-disk profile shape:
///
/// ```toml
/// skills = ["artificial intelligence", "project management"]
/// certifications = ["pmp"]
///
/// [[experience]]
/// text = "Led agile delivery of a claims platform"
/// terms = ["agile", "project management"]  # optional, derived when absent
/// cost = 2                                  # optional, defaults to 1
/// ```
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    certifications: Vec<String>,
    #[serde(default)]
    experience: Vec<BulletSpec>,
}

#[derive(Debug, Deserialize)]
struct BulletSpec {
    text: String,
    #[serde(default)]
    terms: Vec<String>,
    #[serde(default = "default_cost")]
    cost: u32,
}

fn default_cost() -> u32 {
    1
}

/// Parse profile TOML into the entry collection the engine consumes.
pub fn parse_profile(content: &str) -> Result<Vec<ProfileEntry>> {
    let file: ProfileFile = toml::from_str(content).context("Failed to parse profile TOML")?;

    let mut entries = Vec::new();
    for term in file.skills {
        entries.push(ProfileEntry::Skill { term });
    }
    for term in file.certifications {
        entries.push(ProfileEntry::Certification { term });
    }
    for spec in file.experience {
        entries.push(ProfileEntry::Bullet {
            text: spec.text,
            terms: spec.terms,
            cost: spec.cost,
        });
    }
    Ok(entries)
}

/// Load and parse a profile file.
pub async fn load_profile(path: &Path) -> Result<Vec<ProfileEntry>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
    let entries = parse_profile(&content)?;
    info!(
        entries = entries.len(),
        path = %path.display(),
        "loaded profile"
    );
    Ok(entries)
}

/// Load posting text. Content is free UTF-8 text; an empty file is a valid
/// (degenerate) posting.
pub async fn load_posting(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read posting file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_profile() {
        let toml = r#"
            skills = ["python", "docker"]
            certifications = ["pmp"]

            [[experience]]
            text = "Led agile delivery"
            terms = ["agile"]
            cost = 2

            [[experience]]
            text = "Shipped machine learning models"
        "#;
        let entries = parse_profile(toml).unwrap();
        assert_eq!(entries.len(), 5);

        assert_eq!(
            entries[0],
            ProfileEntry::Skill {
                term: "python".to_string()
            }
        );
        assert_eq!(
            entries[3],
            ProfileEntry::Bullet {
                text: "Led agile delivery".to_string(),
                terms: vec!["agile".to_string()],
                cost: 2,
            }
        );
        // Untagged bullet defaults: no terms, cost 1.
        assert_eq!(
            entries[4],
            ProfileEntry::Bullet {
                text: "Shipped machine learning models".to_string(),
                terms: vec![],
                cost: 1,
            }
        );
    }

    #[test]
    fn test_empty_profile_is_valid() {
        let entries = parse_profile("").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        assert!(parse_profile("skills = 3").is_err());
    }
}
