use serde::{Deserialize, Serialize};

/// Profile fields attached to the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub avatar_seed: String,
}

impl UserProfile {
    /// Build the profile created at login: the display name and avatar seed
    /// are derived from the part of the email before the '@'.
    pub fn from_email(email: &str) -> Self {
        let derived = email.split('@').next().unwrap_or(email).to_string();
        Self {
            email: email.to_string(),
            name: derived.clone(),
            phone: String::new(),
            avatar_seed: derived,
        }
    }

    /// Phone numbers are stored as at most 10 digits; everything else is
    /// stripped on save.
    pub fn sanitize_phone(input: &str) -> String {
        input.chars().filter(|c| c.is_ascii_digit()).take(10).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email() {
        let profile = UserProfile::from_email("2301201171@krmu.edu.in");
        assert_eq!(profile.name, "2301201171");
        assert_eq!(profile.avatar_seed, "2301201171");
        assert_eq!(profile.email, "2301201171@krmu.edu.in");
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(UserProfile::sanitize_phone("+91 96546-79617x"), "9654679617");
        assert_eq!(UserProfile::sanitize_phone("123456789012345"), "1234567890");
        assert_eq!(UserProfile::sanitize_phone("abc"), "");
    }
}
