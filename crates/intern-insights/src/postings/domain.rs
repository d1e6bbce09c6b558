use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::DatasetError;

/// Sentinel used for derived text fields whose source value is missing.
pub const UNKNOWN: &str = "unknown";

/// Salary marker meaning "negotiable"; such postings carry no salary bounds.
pub const NEGOTIABLE_MARKER: &str = "面议";

pub const COLUMN_COMPANY_NAME: &str = "公司名称";
pub const COLUMN_JOB_TITLE: &str = "岗位名称";
pub const COLUMN_LOCATION: &str = "工作地点";
pub const COLUMN_SALARY: &str = "日薪";
pub const COLUMN_DESCRIPTION: &str = "职位描述";
pub const COLUMN_COMPANY_TYPE: &str = "公司性质";
pub const COLUMN_COMPANY_SIZE: &str = "公司规模";
pub const COLUMN_URL: &str = "岗位链接";

/// Every column a postings source must provide, in schema order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COLUMN_COMPANY_NAME,
    COLUMN_JOB_TITLE,
    COLUMN_LOCATION,
    COLUMN_SALARY,
    COLUMN_DESCRIPTION,
    COLUMN_COMPANY_TYPE,
    COLUMN_COMPANY_SIZE,
    COLUMN_URL,
];

/// Canonical skill tags extracted from a description.
pub type SkillSet = BTreeSet<&'static str>;

/// One posting as ingested. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(
        rename(deserialize = "公司名称"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub company_name: Option<String>,
    #[serde(
        rename(deserialize = "岗位名称"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub job_title: Option<String>,
    #[serde(
        rename(deserialize = "工作地点"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub location: Option<String>,
    #[serde(
        rename(deserialize = "日薪"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub salary_text: Option<String>,
    #[serde(
        rename(deserialize = "职位描述"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename(deserialize = "公司性质"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub company_type: Option<String>,
    #[serde(
        rename(deserialize = "公司规模"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub company_size: Option<String>,
    #[serde(
        rename(deserialize = "岗位链接"),
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub url: Option<String>,
}

impl RawRecord {
    /// Build a record from a column-name keyed mapping, rejecting mappings that lack a
    /// required column. Blank values count as missing.
    pub fn from_fields(fields: &BTreeMap<String, Option<String>>) -> Result<Self, DatasetError> {
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !fields.contains_key(*column))
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let value = |column: &str| {
            fields
                .get(column)
                .cloned()
                .flatten()
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        };

        Ok(Self {
            company_name: value(COLUMN_COMPANY_NAME),
            job_title: value(COLUMN_JOB_TITLE),
            location: value(COLUMN_LOCATION),
            salary_text: value(COLUMN_SALARY),
            description: value(COLUMN_DESCRIPTION),
            company_type: value(COLUMN_COMPANY_TYPE),
            company_size: value(COLUMN_COMPANY_SIZE),
            url: value(COLUMN_URL),
        })
    }
}

/// Ordinal employer headcount ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompanySizeBucket {
    #[serde(rename = "<50")]
    Under50,
    #[serde(rename = "50-150")]
    From50To150,
    #[serde(rename = "150-500")]
    From150To500,
    #[serde(rename = "500-2000")]
    From500To2000,
    #[serde(rename = ">2000")]
    Over2000,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CompanySizeBucket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Under50,
            Self::From50To150,
            Self::From150To500,
            Self::From500To2000,
            Self::Over2000,
            Self::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under50 => "<50",
            Self::From50To150 => "50-150",
            Self::From150To500 => "150-500",
            Self::From500To2000 => "500-2000",
            Self::Over2000 => ">2000",
            Self::Unknown => UNKNOWN,
        }
    }
}

/// A raw posting plus the structured attributes derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub raw: RawRecord,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub avg_salary: Option<f64>,
    pub skills: SkillSet,
    pub clean_city: String,
    pub company_size_bucket: CompanySizeBucket,
}

impl EnrichedRecord {
    pub fn company_name(&self) -> Option<&str> {
        self.raw.company_name.as_deref()
    }

    pub fn company_type(&self) -> Option<&str> {
        self.raw.company_type.as_deref()
    }

    pub fn has_skill(&self, tag: &str) -> bool {
        self.skills.contains(tag)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> BTreeMap<String, Option<String>> {
        REQUIRED_COLUMNS
            .iter()
            .map(|column| (column.to_string(), Some(format!("{column}-value"))))
            .collect()
    }

    #[test]
    fn from_fields_reports_every_missing_column() {
        let mut fields = full_fields();
        fields.remove(COLUMN_SALARY);
        fields.remove(COLUMN_URL);

        match RawRecord::from_fields(&fields) {
            Err(DatasetError::MissingColumns(columns)) => {
                assert_eq!(columns, vec![COLUMN_SALARY, COLUMN_URL]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn from_fields_treats_blank_values_as_missing() {
        let mut fields = full_fields();
        fields.insert(COLUMN_LOCATION.to_string(), Some("   ".to_string()));
        fields.insert(COLUMN_COMPANY_SIZE.to_string(), None);

        let record = RawRecord::from_fields(&fields).expect("record builds");
        assert!(record.location.is_none());
        assert!(record.company_size.is_none());
        assert_eq!(record.company_name.as_deref(), Some("公司名称-value"));
    }

    #[test]
    fn size_bucket_labels_serialize_as_text() {
        let json = serde_json::to_string(&CompanySizeBucket::Over2000).expect("serialize");
        assert_eq!(json, "\">2000\"");
        assert_eq!(CompanySizeBucket::Unknown.label(), UNKNOWN);
    }
}
