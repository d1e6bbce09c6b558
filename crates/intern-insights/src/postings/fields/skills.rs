use crate::postings::domain::SkillSet;
use serde::Serialize;

/// Canonical skill tag mapped to the lower-case keywords that signal it.
///
/// Keywords are plain substrings. `" r "` keeps its surrounding spaces so it does not
/// match inside other words.
pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("SQL", &["sql", "hive"]),
    ("Python", &["python", "pandas", "numpy"]),
    ("Excel", &["excel", "数据透视表"]),
    ("Tableau", &["tableau"]),
    ("Power BI", &["power bi", "powerbi"]),
    ("R", &["r语言", " r "]),
    ("SPSS", &["spss"]),
    ("Java", &["java"]),
    ("PPT", &["ppt", "powerpoint"]),
    ("统计分析", &["统计分析", "数据统计"]),
    ("数据可视化", &["数据可视化", "可视化"]),
    ("机器学习", &["机器学习", "深度学习"]),
];

/// Inspectable view over a tag-to-keywords table.
#[derive(Debug, Clone, Copy)]
pub struct SkillTaxonomy {
    entries: &'static [(&'static str, &'static [&'static str])],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillTaxonomyEntry {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
}

impl SkillTaxonomy {
    pub const fn standard() -> Self {
        Self {
            entries: SKILL_KEYWORDS,
        }
    }

    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(tag, _)| *tag)
    }

    pub fn keywords(&self, tag: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == tag)
            .map(|(_, keywords)| *keywords)
    }

    pub fn entries(&self) -> Vec<SkillTaxonomyEntry> {
        self.entries
            .iter()
            .map(|(tag, keywords)| SkillTaxonomyEntry {
                tag: *tag,
                keywords: *keywords,
            })
            .collect()
    }

    /// Tags whose keywords occur anywhere in the lower-cased text.
    pub fn extract(&self, text: Option<&str>) -> SkillSet {
        let Some(text) = text else {
            return SkillSet::new();
        };
        let lowered = text.to_lowercase();

        self.entries
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map(|(tag, _)| *tag)
            .collect()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn extract_skills(description: Option<&str>) -> SkillSet {
    SkillTaxonomy::standard().extract(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_case_insensitive_tags() {
        let skills = extract_skills(Some("需要SQL Python Excel"));
        let expected: SkillSet = ["SQL", "Python", "Excel"].into_iter().collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn keywords_map_to_their_canonical_tag() {
        let skills = extract_skills(Some("熟悉Hive、Pandas，掌握数据透视表与深度学习"));
        let expected: SkillSet = ["SQL", "Python", "Excel", "机器学习"].into_iter().collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn spaced_r_keyword_needs_word_gap() {
        assert!(extract_skills(Some("looking for a partner")).is_empty());
        assert!(extract_skills(Some("use r for modeling")).contains("R"));
        assert!(extract_skills(Some("熟悉R语言")).contains("R"));
    }

    #[test]
    fn missing_description_has_no_skills() {
        assert!(extract_skills(None).is_empty());
        assert!(extract_skills(Some("沟通能力强")).is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = Some("Tableau / PowerBI / PPT 可视化");
        assert_eq!(extract_skills(text), extract_skills(text));
    }

    #[test]
    fn taxonomy_is_inspectable() {
        let taxonomy = SkillTaxonomy::standard();
        assert_eq!(taxonomy.tags().count(), SKILL_KEYWORDS.len());
        assert!(taxonomy
            .entries()
            .iter()
            .all(|entry| !entry.keywords.is_empty()));
        assert_eq!(taxonomy.keywords("Power BI"), Some(&["power bi", "powerbi"][..]));
        assert!(taxonomy.keywords("Rust").is_none());
    }

    #[test]
    fn custom_taxonomy_drives_extraction() {
        const CUSTOM: &[(&str, &[&str])] = &[("Rust", &["rust", "cargo"])];
        let taxonomy = SkillTaxonomy::new(CUSTOM);
        let skills = taxonomy.extract(Some("Cargo workspaces and SQL"));
        assert_eq!(skills.into_iter().collect::<Vec<_>>(), vec!["Rust"]);
    }
}
