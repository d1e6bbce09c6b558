use intern_insights::postings::domain::{
    COLUMN_COMPANY_NAME, COLUMN_JOB_TITLE, COLUMN_LOCATION, COLUMN_SALARY, COLUMN_URL,
};
use intern_insights::postings::{EnrichedRecord, SkillSet};
use std::io::Write;

const SKILLS_COLUMN: &str = "skills";
const NO_SKILLS: &str = "无";

/// Write the detail-table columns for `records`; the location column carries the
/// normalized city.
pub(crate) fn write_postings<W: Write>(
    records: &[&EnrichedRecord],
    writer: W,
) -> Result<W, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        COLUMN_COMPANY_NAME,
        COLUMN_JOB_TITLE,
        COLUMN_LOCATION,
        COLUMN_SALARY,
        SKILLS_COLUMN,
        COLUMN_URL,
    ])?;

    for record in records {
        let skills = skills_cell(&record.skills);
        csv_writer.write_record([
            record.raw.company_name.as_deref().unwrap_or_default(),
            record.raw.job_title.as_deref().unwrap_or_default(),
            record.clean_city.as_str(),
            record.raw.salary_text.as_deref().unwrap_or_default(),
            skills.as_str(),
            record.raw.url.as_deref().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    csv_writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

pub(crate) fn postings_csv(records: &[&EnrichedRecord]) -> Result<Vec<u8>, csv::Error> {
    write_postings(records, Vec::new())
}

pub(crate) fn skills_cell(skills: &SkillSet) -> String {
    if skills.is_empty() {
        NO_SKILLS.to_string()
    } else {
        skills.iter().copied().collect::<Vec<_>>().join(", ")
    }
}
