use super::domain::{EnrichedRecord, RawRecord};
use super::fields::{bucket_company_size, normalize_city, parse_salary, SkillTaxonomy};
use tracing::debug;

/// Derive structured attributes for a single posting.
pub fn enrich_record(raw: RawRecord, taxonomy: &SkillTaxonomy) -> EnrichedRecord {
    let salary = parse_salary(raw.salary_text.as_deref());
    let skills = taxonomy.extract(raw.description.as_deref());
    let clean_city = normalize_city(raw.location.as_deref());
    let company_size_bucket = bucket_company_size(raw.company_size.as_deref());

    EnrichedRecord {
        min_salary: salary.min,
        max_salary: salary.max,
        avg_salary: salary.average(),
        skills,
        clean_city,
        company_size_bucket,
        raw,
    }
}

/// Enrich every record independently, one output per input, in input order.
pub fn normalize_records<I>(records: I, taxonomy: &SkillTaxonomy) -> Vec<EnrichedRecord>
where
    I: IntoIterator<Item = RawRecord>,
{
    let enriched: Vec<EnrichedRecord> = records
        .into_iter()
        .map(|raw| enrich_record(raw, taxonomy))
        .collect();

    let without_salary = enriched
        .iter()
        .filter(|record| record.avg_salary.is_none())
        .count();
    debug!(
        records = enriched.len(),
        without_salary, "normalized posting batch"
    );

    enriched
}
