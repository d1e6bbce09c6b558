use super::domain::EnrichedRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selection values that mean "no constraint" for city and company type.
const MATCH_ALL: [&str; 2] = ["all", "全部"];

/// Inclusive bounds applied to `avg_salary`. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

impl SalaryRange {
    pub fn between(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Postings without a salary are never excluded by the range.
    pub fn admits(&self, avg_salary: Option<f64>) -> bool {
        let Some(salary) = avg_salary else {
            return true;
        };
        self.lower.map_or(true, |lower| lower <= salary)
            && self.upper.map_or(true, |upper| salary <= upper)
    }
}

/// Conjunctive constraints selecting a subset of postings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub salary: SalaryRange,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub company_type: Option<String>,
}

impl FilterSpec {
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_salary(mut self, salary: SalaryRange) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.insert(skill.into());
        self
    }

    pub fn with_company_type(mut self, company_type: impl Into<String>) -> Self {
        self.company_type = Some(company_type.into());
        self
    }

    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        selection_matches(self.city.as_deref(), Some(record.clean_city.as_str()))
            && self.salary.admits(record.avg_salary)
            && self.skills_match(record)
            && selection_matches(self.company_type.as_deref(), record.company_type())
    }

    fn skills_match(&self, record: &EnrichedRecord) -> bool {
        self.required_skills.is_empty()
            || self
                .required_skills
                .iter()
                .any(|skill| record.has_skill(skill))
    }
}

fn selection_matches(selection: Option<&str>, value: Option<&str>) -> bool {
    match selection {
        None => true,
        Some(selected) if is_match_all(selected.trim()) => true,
        Some(selected) => value == Some(selected),
    }
}

fn is_match_all(selection: &str) -> bool {
    selection.is_empty()
        || MATCH_ALL
            .iter()
            .any(|all| selection.eq_ignore_ascii_case(all))
}

/// Records satisfying every constraint of `spec`, in input order.
pub fn filter_records<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a EnrichedRecord>
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
{
    records
        .into_iter()
        .filter(|record| spec.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postings::domain::RawRecord;
    use crate::postings::fields::SkillTaxonomy;
    use crate::postings::normalizer::normalize_records;

    fn posting(company: &str, location: &str, salary: &str, description: &str, kind: &str) -> RawRecord {
        RawRecord {
            company_name: Some(company.to_string()),
            job_title: Some("数据分析实习生".to_string()),
            location: Some(location.to_string()),
            salary_text: Some(salary.to_string()),
            description: Some(description.to_string()),
            company_type: Some(kind.to_string()),
            company_size: Some("2000人以上".to_string()),
            url: None,
        }
    }

    fn records() -> Vec<EnrichedRecord> {
        normalize_records(
            vec![
                posting("快手", "北京/海淀区", "200-300/天", "SQL Python", "民营企业"),
                posting("字节跳动", "上海", "400/天", "Tableau", "民营企业"),
                posting("滴滴", "北京", "面议", "Excel", "民营企业"),
                posting("中国银行", "北京/西城区", "100-150/天", "SPSS Excel", "国有企业"),
                posting("腾讯", "深圳", "250-300/天", "Python Java", "民营企业"),
            ],
            &SkillTaxonomy::standard(),
        )
    }

    fn companies(matched: &[&EnrichedRecord]) -> Vec<String> {
        matched
            .iter()
            .filter_map(|record| record.raw.company_name.clone())
            .collect()
    }

    #[test]
    fn default_spec_is_identity() {
        let records = records();
        let matched = filter_records(&records, &FilterSpec::default());
        assert_eq!(matched.len(), records.len());
        assert!(matched
            .iter()
            .zip(&records)
            .all(|(kept, original)| std::ptr::eq(*kept, original)));
    }

    #[test]
    fn all_selection_means_unset() {
        let records = records();
        let spec = FilterSpec::default()
            .with_city("全部")
            .with_company_type("All");
        assert_eq!(filter_records(&records, &spec).len(), records.len());
    }

    #[test]
    fn city_match_is_exact() {
        let records = records();
        let matched = filter_records(&records, &FilterSpec::default().with_city("北京"));
        assert_eq!(companies(&matched), vec!["快手", "滴滴", "中国银行"]);

        let matched = filter_records(&records, &FilterSpec::default().with_city("北"));
        assert!(matched.is_empty());
    }

    #[test]
    fn salary_bounds_are_inclusive_and_skip_missing_salaries() {
        let records = records();
        let spec = FilterSpec::default().with_salary(SalaryRange::between(125.0, 275.0));
        let matched = filter_records(&records, &spec);
        assert_eq!(companies(&matched), vec!["快手", "滴滴", "中国银行", "腾讯"]);

        let spec = FilterSpec::default().with_salary(SalaryRange {
            lower: Some(300.0),
            upper: None,
        });
        assert_eq!(companies(&filter_records(&records, &spec)), vec!["字节跳动", "滴滴"]);
    }

    #[test]
    fn inverted_salary_range_only_keeps_unsalaried_postings() {
        let records = records();
        let spec = FilterSpec::default().with_salary(SalaryRange::between(500.0, 100.0));
        assert_eq!(companies(&filter_records(&records, &spec)), vec!["滴滴"]);
    }

    #[test]
    fn skills_require_any_overlap() {
        let records = records();
        let spec = FilterSpec::default().with_skill("Java").with_skill("Tableau");
        assert_eq!(companies(&filter_records(&records, &spec)), vec!["字节跳动", "腾讯"]);

        let spec = FilterSpec::default().with_skill("机器学习");
        assert!(filter_records(&records, &spec).is_empty());
    }

    #[test]
    fn company_type_match_is_exact() {
        let records = records();
        let spec = FilterSpec::default().with_company_type("国有企业");
        assert_eq!(companies(&filter_records(&records, &spec)), vec!["中国银行"]);
    }

    #[test]
    fn filters_commute() {
        let records = records();
        let by_city = FilterSpec::default().with_city("北京");
        let by_salary = FilterSpec::default().with_salary(SalaryRange::between(0.0, 300.0));

        let city_first = filter_records(filter_records(&records, &by_city), &by_salary);
        let salary_first = filter_records(filter_records(&records, &by_salary), &by_city);
        assert_eq!(city_first, salary_first);
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: FilterSpec =
            serde_json::from_str(r#"{"city":"北京","required_skills":["SQL"]}"#).expect("parse");
        assert_eq!(spec.city.as_deref(), Some("北京"));
        assert_eq!(spec.salary, SalaryRange::default());
        assert!(spec.company_type.is_none());
    }
}
