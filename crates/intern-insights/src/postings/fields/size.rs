use crate::postings::domain::CompanySizeBucket;

/// Substring thresholds, highest first. The first marker found decides the bucket.
const SIZE_THRESHOLDS: [(&str, CompanySizeBucket); 4] = [
    ("2000", CompanySizeBucket::Over2000),
    ("500", CompanySizeBucket::From500To2000),
    ("150", CompanySizeBucket::From150To500),
    ("50", CompanySizeBucket::From50To150),
];

pub fn bucket_company_size(size: Option<&str>) -> CompanySizeBucket {
    let Some(size) = size else {
        return CompanySizeBucket::Unknown;
    };

    SIZE_THRESHOLDS
        .iter()
        .find(|(marker, _)| size.contains(marker))
        .map(|(_, bucket)| *bucket)
        .unwrap_or(CompanySizeBucket::Under50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_threshold_wins() {
        assert_eq!(
            bucket_company_size(Some("2000人以上")),
            CompanySizeBucket::Over2000
        );
        assert_eq!(
            bucket_company_size(Some("500-2000人")),
            CompanySizeBucket::Over2000
        );
        assert_eq!(
            bucket_company_size(Some("500人以上")),
            CompanySizeBucket::From500To2000
        );
        assert_eq!(
            bucket_company_size(Some("150-500人")),
            CompanySizeBucket::From500To2000
        );
        assert_eq!(
            bucket_company_size(Some("150人左右")),
            CompanySizeBucket::From150To500
        );
        assert_eq!(
            bucket_company_size(Some("50-150人")),
            CompanySizeBucket::From150To500
        );
        assert_eq!(
            bucket_company_size(Some("50人")),
            CompanySizeBucket::From50To150
        );
    }

    #[test]
    fn unmatched_and_missing_sizes() {
        assert_eq!(
            bucket_company_size(Some("少于15人")),
            CompanySizeBucket::Under50
        );
        assert_eq!(bucket_company_size(None), CompanySizeBucket::Unknown);
    }
}
