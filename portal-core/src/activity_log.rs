use shared_types::ActivityLogEntry;

use crate::error::ValidationError;

/// Title and details must both have content before an entry is written
pub fn validate_entry(title: &str, details: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing("title"));
    }
    if details.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing("details"));
    }
    Ok(())
}

/// Newest entry first. Stable for entries on the same day.
pub fn sort_by_date_desc(entries: &mut [ActivityLogEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, date: &str) -> ActivityLogEntry {
        ActivityLogEntry {
            id: id.to_string(),
            title: "Repository review".to_string(),
            project: String::new(),
            responsible: String::new(),
            time_spent: "2h".to_string(),
            details: "Read through the ingest module".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_validate_entry() {
        assert!(validate_entry("Review", "Went through PRs").is_ok());
        assert_eq!(
            validate_entry("  ", "Went through PRs"),
            Err(ValidationError::RequiredFieldMissing("title"))
        );
        assert_eq!(
            validate_entry("Review", ""),
            Err(ValidationError::RequiredFieldMissing("details"))
        );
    }

    #[test]
    fn test_sort_by_date_desc() {
        let mut entries = vec![
            entry("a", "2024-03-01"),
            entry("b", "2024-03-05"),
            entry("c", "2024-03-01"),
            entry("d", "2024-02-28"),
        ];
        sort_by_date_desc(&mut entries);

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }
}
