use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// National id: 6-20 characters, digits with optional dash separators.
pub fn is_valid_national_id(id: &str) -> bool {
    let len = id.chars().count();
    if !(6..=20).contains(&len) {
        return false;
    }
    id.chars().all(|c| c.is_ascii_digit() || c == '-')
        && id.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_dashed_ids() {
        assert!(is_valid_national_id("1234567890"));
        assert!(is_valid_national_id("123-456-7890"));
    }

    #[test]
    fn rejects_short_long_and_alpha_ids() {
        assert!(!is_valid_national_id("12345"));
        assert!(!is_valid_national_id("123456789012345678901"));
        assert!(!is_valid_national_id("12345A7890"));
        assert!(!is_valid_national_id("------"));
    }
}
