//! ID generation utilities

/// Generate a record ID (UUID v4, hyphenated)
pub fn generate_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generate a record ID for which `is_taken` returns false
pub fn generate_unique_record_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_record_id();
        if !is_taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_record_id_format() {
        let id = generate_record_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_record_id_uniqueness() {
        assert_ne!(generate_record_id(), generate_record_id());
    }

    #[test]
    fn test_generate_unique_record_id() {
        let taken = vec!["a".to_string(), "b".to_string()];
        let id = generate_unique_record_id(|candidate| taken.iter().any(|t| t == candidate));
        assert!(!taken.contains(&id));
    }
}
