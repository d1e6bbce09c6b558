use crate::cli::SourceArgs;
use crate::export::{skills_cell, write_postings};
use crate::infra::resolve_source;
use clap::Args;
use intern_insights::config::AppConfig;
use intern_insights::error::AppError;
use intern_insights::postings::fields::SkillTaxonomy;
use intern_insights::postings::report::summarize;
use intern_insights::postings::{
    EnrichedRecord, FilterSpec, FrequencyEntry, PostingCatalog, PostingSummary, SalaryRange,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Only include postings in this city (exact match, "all" for every city)
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Lowest average daily salary to include
    #[arg(long)]
    pub(crate) min_salary: Option<f64>,
    /// Highest average daily salary to include
    #[arg(long)]
    pub(crate) max_salary: Option<f64>,
    /// Require at least one of these skills (repeatable)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Only include postings from this company type
    #[arg(long)]
    pub(crate) company_type: Option<String>,
    /// Number of rows shown in ranked tables
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Print every matching posting
    #[arg(long)]
    pub(crate) list_postings: bool,
    /// Write the matching postings to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

impl SummaryArgs {
    fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            city: self.city.clone(),
            salary: SalaryRange {
                lower: self.min_salary,
                upper: self.max_salary,
            },
            required_skills: self.skills.iter().cloned().collect(),
            company_type: self.company_type.clone(),
        }
    }
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let spec = args.filter_spec();
    let SummaryArgs {
        source,
        top,
        list_postings,
        export,
        ..
    } = args;

    let source = resolve_source(source, &config.data)?;
    let catalog = PostingCatalog::load(&source)?;
    let matched = catalog.filter(&spec);
    let summary = summarize(matched.iter().copied());

    println!("Internship posting insights");
    println!(
        "Source: {} ({} postings, loaded {})",
        source,
        catalog.len(),
        catalog.loaded_at().format("%Y-%m-%d %H:%M")
    );
    render_summary(&summary, top);

    if list_postings {
        render_postings(&matched);
    }

    if let Some(path) = export {
        write_postings(&matched, File::create(&path)?)?;
        println!("\nExported {} postings to {}", matched.len(), path.display());
    }

    Ok(())
}

pub(crate) fn run_skills() {
    println!("Skill taxonomy");
    for entry in SkillTaxonomy::standard().entries() {
        println!("- {}: {}", entry.tag, entry.keywords.join(" | "));
    }
}

fn render_summary(summary: &PostingSummary, top: usize) {
    println!("\nKey figures");
    println!("- Postings: {}", summary.total_postings);
    match summary.mean_salary {
        Some(mean) => println!("- Mean daily salary: ¥{mean:.0}"),
        None => println!("- Mean daily salary: n/a"),
    }
    if let Some(stats) = &summary.salary_stats {
        println!(
            "- Daily salary spread ({} postings): min ¥{:.0}, Q1 ¥{:.0}, median ¥{:.0}, Q3 ¥{:.0}, max ¥{:.0}",
            stats.samples, stats.min, stats.q1, stats.median, stats.q3, stats.max
        );
    }
    println!("- Cities covered: {}", summary.city_count);
    println!("- Hiring companies: {}", summary.company_count);

    if summary.total_postings == 0 {
        println!("\nNo postings match the current filters.");
        return;
    }

    render_table("Top cities", summary.top_cities(top));
    render_table(
        "Skill demand",
        &summary.skill_frequency[..top.min(summary.skill_frequency.len())],
    );
    render_table("Company size", &summary.company_size_distribution);
    render_table("Company type", &summary.company_type_distribution);
    render_table("Most active recruiters", summary.top_recruiters(top));
}

fn render_table(title: &str, entries: &[FrequencyEntry]) {
    if entries.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for entry in entries {
        println!("- {}: {}", entry.label, entry.count);
    }
}

fn render_postings(records: &[&EnrichedRecord]) {
    println!("\nMatching postings ({})", records.len());
    for record in records {
        println!(
            "- {} | {} | {} | {} | {}",
            record.raw.company_name.as_deref().unwrap_or("-"),
            record.raw.job_title.as_deref().unwrap_or("-"),
            record.clean_city,
            record.raw.salary_text.as_deref().unwrap_or("-"),
            skills_cell(&record.skills)
        );
    }
}
