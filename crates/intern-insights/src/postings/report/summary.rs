use super::frequency::FrequencyTable;
use super::views::{FilterOptions, PostingSummary, SalaryStats};
use crate::postings::domain::EnrichedRecord;
use std::collections::{BTreeSet, HashSet};

const SALARY_CEILING_HEADROOM: i64 = 50;

/// Compute counts, salary mean and spread, and frequency tables for `records`.
pub fn summarize<'a, I>(records: I) -> PostingSummary
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
{
    let mut total_postings = 0;
    let mut salaries: Vec<f64> = Vec::new();
    let mut companies: HashSet<&str> = HashSet::new();

    let mut cities = FrequencyTable::new();
    let mut skills = FrequencyTable::new();
    let mut sizes = FrequencyTable::new();
    let mut company_types = FrequencyTable::new();
    let mut recruiters = FrequencyTable::new();

    for record in records {
        total_postings += 1;

        if let Some(salary) = record.avg_salary {
            salaries.push(salary);
        }

        cities.record(&record.clean_city);
        for skill in &record.skills {
            skills.record(skill);
        }
        sizes.record(record.company_size_bucket.label());

        if let Some(kind) = record.company_type() {
            company_types.record(kind);
        }
        if let Some(company) = record.company_name() {
            companies.insert(company);
            recruiters.record(company);
        }
    }

    let mean_salary = (!salaries.is_empty())
        .then(|| salaries.iter().sum::<f64>() / salaries.len() as f64);
    let salary_stats = SalaryStats::from_samples(&mut salaries);

    PostingSummary {
        total_postings,
        mean_salary,
        salary_stats,
        city_count: cities.distinct(),
        company_count: companies.len(),
        city_distribution: cities.into_entries(),
        skill_frequency: skills.into_entries(),
        company_size_distribution: sizes.into_entries(),
        company_type_distribution: company_types.into_entries(),
        top_companies: recruiters.into_entries(),
    }
}

/// Facet values for the whole record set, sorted for display.
pub fn filter_options(records: &[EnrichedRecord]) -> FilterOptions {
    let cities: BTreeSet<&str> = records
        .iter()
        .map(|record| record.clean_city.as_str())
        .collect();
    let skills: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.skills.iter().copied())
        .collect();
    let company_types: BTreeSet<&str> = records
        .iter()
        .filter_map(EnrichedRecord::company_type)
        .collect();
    let salary_ceiling = records
        .iter()
        .filter_map(|record| record.avg_salary)
        .reduce(f64::max)
        .map(|max| max.floor() as i64 + SALARY_CEILING_HEADROOM);

    FilterOptions {
        cities: cities.into_iter().map(str::to_string).collect(),
        skills: skills.into_iter().map(str::to_string).collect(),
        company_types: company_types.into_iter().map(str::to_string).collect(),
        salary_ceiling,
    }
}
