//! Built-in demo postings, used only when explicitly requested.

use super::domain::RawRecord;

const SAMPLE_ROWS: [[&str; 8]; 5] = [
    [
        "快手",
        "数据分析实习生",
        "北京",
        "200-300/天",
        "需要SQL Python Excel",
        "民营企业",
        "2000人以上",
        "https://example.com",
    ],
    [
        "字节跳动",
        "数据运营实习生",
        "上海",
        "200/天",
        "SQL Tableau",
        "民营企业",
        "2000人以上",
        "https://example.com",
    ],
    [
        "滴滴",
        "商业分析实习生",
        "北京",
        "150-200/天",
        "Python SQL",
        "民营企业",
        "2000人以上",
        "https://example.com",
    ],
    [
        "美团",
        "数据产品实习生",
        "北京",
        "180-250/天",
        "Excel PPT SQL",
        "民营企业",
        "2000人以上",
        "https://example.com",
    ],
    [
        "腾讯",
        "数据开发实习生",
        "深圳",
        "250-300/天",
        "Python Java SQL",
        "民营企业",
        "2000人以上",
        "https://example.com",
    ],
];

pub fn sample_records() -> Vec<RawRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|[company, title, location, salary, description, kind, size, url]| RawRecord {
            company_name: Some(company.to_string()),
            job_title: Some(title.to_string()),
            location: Some(location.to_string()),
            salary_text: Some(salary.to_string()),
            description: Some(description.to_string()),
            company_type: Some(kind.to_string()),
            company_size: Some(size.to_string()),
            url: Some(url.to_string()),
        })
        .collect()
}
