use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

/// Aggregate statistics over a set of postings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingSummary {
    pub total_postings: usize,
    /// Mean of `avg_salary` over postings that carry one; `None` when none do.
    pub mean_salary: Option<f64>,
    /// Spread of `avg_salary` over the same postings; `None` when none carry one.
    pub salary_stats: Option<SalaryStats>,
    pub city_count: usize,
    pub company_count: usize,
    pub city_distribution: Vec<FrequencyEntry>,
    pub skill_frequency: Vec<FrequencyEntry>,
    pub company_size_distribution: Vec<FrequencyEntry>,
    pub company_type_distribution: Vec<FrequencyEntry>,
    pub top_companies: Vec<FrequencyEntry>,
}

impl PostingSummary {
    pub fn top_cities(&self, limit: usize) -> &[FrequencyEntry] {
        &self.city_distribution[..limit.min(self.city_distribution.len())]
    }

    pub fn top_recruiters(&self, limit: usize) -> &[FrequencyEntry] {
        &self.top_companies[..limit.min(self.top_companies.len())]
    }
}

/// Five-number summary of average daily salaries.
///
/// Quartiles interpolate linearly between the closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryStats {
    pub samples: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl SalaryStats {
    /// Build the summary from unordered samples; `None` for an empty slice.
    pub fn from_samples(samples: &mut [f64]) -> Option<Self> {
        samples.sort_by(f64::total_cmp);
        let (&min, &max) = (samples.first()?, samples.last()?);
        Some(Self {
            samples: samples.len(),
            min,
            q1: quantile(samples, 0.25),
            median: quantile(samples, 0.5),
            q3: quantile(samples, 0.75),
            max,
        })
    }
}

fn quantile(sorted: &[f64], fraction: f64) -> f64 {
    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
}

/// Selectable values for building a filter, derived from the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub skills: Vec<String>,
    pub company_types: Vec<String>,
    /// Suggested upper end for a salary slider: highest average plus 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_ceiling: Option<i64>,
}
