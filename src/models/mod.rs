mod profile;
mod question;

pub use profile::UserProfile;
pub use question::{GeneratedQuestion, CHOICES_PER_QUESTION};
