//! Pure single-field parsers. None of them fail: unparseable input degrades to an absent
//! value or the `unknown` sentinel.

mod city;
mod salary;
mod size;
mod skills;

pub use city::normalize_city;
pub use salary::{average_salary, parse_salary, SalaryBounds};
pub use size::bucket_company_size;
pub use skills::{extract_skills, SkillTaxonomy, SkillTaxonomyEntry, SKILL_KEYWORDS};
