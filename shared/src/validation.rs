//! Input validation functions
//!
//! The stores accept whatever they are given; these helpers are what the
//! controller and presentation layer check before calling into them.

use validator::ValidateEmail;

/// Maximum length of a post body, in characters
pub const MAX_POST_LENGTH: usize = 2000;

/// Maximum length of a comment body, in characters
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate post content and return the trimmed body
pub fn validate_post_content(content: &str) -> Result<&str, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Please enter some content for your post".to_string());
    }
    if trimmed.chars().count() > MAX_POST_LENGTH {
        return Err(format!("Post cannot exceed {} characters", MAX_POST_LENGTH));
    }
    Ok(trimmed)
}

/// Validate comment content and return the trimmed body
pub fn validate_comment_content(content: &str) -> Result<&str, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Comment cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(format!("Comment cannot exceed {} characters", MAX_COMMENT_LENGTH));
    }
    Ok(trimmed)
}

/// Validate a workout name
pub fn validate_workout_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Workout name cannot be empty".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Err("Workout name too long".to_string());
    }
    Ok(())
}

/// Validate a set weight (in kg)
pub fn validate_set_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 0.0 {
        return Err("Weight cannot be negative".to_string());
    }
    if weight_kg > 1000.0 {
        return Err("Weight must be at most 1000 kg".to_string());
    }
    Ok(())
}

/// Validate a set distance (in meters)
pub fn validate_set_distance(distance_m: f64) -> Result<(), String> {
    if distance_m.is_nan() || distance_m.is_infinite() {
        return Err("Distance must be a valid number".to_string());
    }
    if distance_m < 0.0 {
        return Err("Distance cannot be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use proptest::prelude::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("fitness_pro@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
    }

    #[test]
    fn test_generated_emails_are_valid() {
        for _ in 0..20 {
            let email: String = SafeEmail().fake();
            assert!(validate_email(&email).is_ok(), "{}", email);
        }
    }

    #[test]
    fn test_post_content_is_trimmed() {
        assert_eq!(validate_post_content("  New PR!  "), Ok("New PR!"));
    }

    #[test]
    fn test_blank_post_rejected() {
        assert!(validate_post_content("").is_err());
        assert!(validate_post_content("   \n\t").is_err());
    }

    #[test]
    fn test_long_comment_rejected() {
        let long: String = "a".repeat(MAX_COMMENT_LENGTH + 1);
        assert!(validate_comment_content(&long).is_err());
        assert!(validate_comment_content(&long[..MAX_COMMENT_LENGTH]).is_ok());
    }

    #[test]
    fn test_validate_workout_name() {
        assert!(validate_workout_name("Leg Day").is_ok());
        assert!(validate_workout_name("  ").is_err());
    }

    #[test]
    fn test_validate_set_weight() {
        assert!(validate_set_weight(0.0).is_ok());
        assert!(validate_set_weight(-1.0).is_err());
        assert!(validate_set_weight(f64::NAN).is_err());
        assert!(validate_set_distance(f64::INFINITY).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_non_blank_post_accepted(body in "[a-zA-Z0-9!?]{1,200}") {
            let padded = format!("  {}  ", body);
            prop_assert_eq!(validate_post_content(&padded), Ok(body.as_str()));
        }

        #[test]
        fn prop_valid_set_weight_range(weight in 0.0f64..=1000.0) {
            prop_assert!(validate_set_weight(weight).is_ok());
        }
    }
}
