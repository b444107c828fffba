//! Mock OTP login flow.
//!
//! Mirrors the original email-verification service: 6-digit codes, SHA-256
//! hashed at rest, 5-minute expiry, 3 verification attempts, and a resend
//! throttle while a code is still fresh. There is no SMTP here; the code is
//! handed back to the caller so the login screen can display it. This is a
//! stand-in for a real delivery channel, not a security system.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use sha2::{Digest, Sha256};

const OTP_EXPIRY: Duration = Duration::from_secs(5 * 60);
const MAX_ATTEMPTS: u32 = 3;
/// Resend is refused while more than this much validity remains.
const RESEND_GUARD: Duration = Duration::from_secs(4 * 60);

/// Email suffixes accepted as college addresses.
const COLLEGE_DOMAINS: &[&str] = &["@krmu.edu.in", "@student.college.edu", "@edu.in"];

struct OtpEntry {
    code_hash: String,
    attempts: u32,
    expires_at: Instant,
}

/// Outcome of requesting a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Code issued; carried here in place of email delivery.
    Sent { code: String, expires_in: Duration },
    /// A fresh code is still outstanding; wait before asking again.
    Throttled { retry_after: Duration },
}

/// Outcome of verifying a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    /// Wrong code; this many attempts are left.
    Invalid { attempts_left: u32 },
    Expired,
    TooManyAttempts,
    /// No code was ever requested for this email.
    NotRequested,
}

/// In-memory store of outstanding codes, keyed by email.
pub struct OtpService {
    pending: HashMap<String, OtpEntry>,
    expiry: Duration,
}

impl OtpService {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            expiry: OTP_EXPIRY,
        }
    }

    /// Shortened expiry, for tests.
    #[cfg(test)]
    fn with_expiry(expiry: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            expiry,
        }
    }

    /// Generate and register a code for `email`.
    pub fn send_otp(&mut self, email: &str) -> SendOutcome {
        let now = Instant::now();

        if let Some(existing) = self.pending.get(email) {
            if existing.expires_at > now {
                let time_left = existing.expires_at - now;
                if time_left > self.resend_guard() {
                    return SendOutcome::Throttled {
                        retry_after: time_left - self.resend_guard(),
                    };
                }
            }
        }

        let code = format!("{:06}", rand::thread_rng().gen_range(100_000..=999_999));
        self.pending.insert(
            email.to_string(),
            OtpEntry {
                code_hash: hash_code(&code),
                attempts: 0,
                expires_at: now + self.expiry,
            },
        );

        SendOutcome::Sent {
            code,
            expires_in: self.expiry,
        }
    }

    /// Check a submitted code against the stored hash.
    pub fn verify_otp(&mut self, email: &str, code: &str) -> VerifyOutcome {
        let Some(entry) = self.pending.get_mut(email) else {
            return VerifyOutcome::NotRequested;
        };

        if entry.expires_at < Instant::now() {
            self.pending.remove(email);
            return VerifyOutcome::Expired;
        }

        if entry.attempts >= MAX_ATTEMPTS {
            self.pending.remove(email);
            return VerifyOutcome::TooManyAttempts;
        }

        entry.attempts += 1;

        if hash_code(code) == entry.code_hash {
            self.pending.remove(email);
            VerifyOutcome::Verified
        } else {
            let attempts_left = MAX_ATTEMPTS - entry.attempts;
            VerifyOutcome::Invalid { attempts_left }
        }
    }

    fn resend_guard(&self) -> Duration {
        // Scale the guard with the expiry so shortened test expiries behave.
        if self.expiry >= OTP_EXPIRY {
            RESEND_GUARD
        } else {
            self.expiry * 4 / 5
        }
    }
}

impl Default for OtpService {
    fn default() -> Self {
        Self::new()
    }
}

/// Only college addresses may log in.
pub fn is_college_email(email: &str) -> bool {
    COLLEGE_DOMAINS.iter().any(|d| email.ends_with(d))
}

fn hash_code(code: &str) -> String {
    let digest = Sha256::digest(code.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent_code(outcome: SendOutcome) -> String {
        match outcome {
            SendOutcome::Sent { code, .. } => code,
            other => panic!("expected Sent, got {:?}", other),
        }
    }

    #[test]
    fn test_send_and_verify() {
        let mut svc = OtpService::new();
        let code = sent_code(svc.send_otp("a@edu.in"));
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(svc.verify_otp("a@edu.in", &code), VerifyOutcome::Verified);
        // Consumed on success.
        assert_eq!(svc.verify_otp("a@edu.in", &code), VerifyOutcome::NotRequested);
    }

    #[test]
    fn test_wrong_code_counts_attempts() {
        let mut svc = OtpService::new();
        let code = sent_code(svc.send_otp("a@edu.in"));
        assert_eq!(
            svc.verify_otp("a@edu.in", "000000"),
            VerifyOutcome::Invalid { attempts_left: 2 }
        );
        assert_eq!(
            svc.verify_otp("a@edu.in", "000001"),
            VerifyOutcome::Invalid { attempts_left: 1 }
        );
        assert_eq!(
            svc.verify_otp("a@edu.in", "000002"),
            VerifyOutcome::Invalid { attempts_left: 0 }
        );
        // Fourth try is rejected outright even with the right code.
        assert_eq!(svc.verify_otp("a@edu.in", &code), VerifyOutcome::TooManyAttempts);
        assert_eq!(svc.verify_otp("a@edu.in", &code), VerifyOutcome::NotRequested);
    }

    #[test]
    fn test_expired_code() {
        let mut svc = OtpService::with_expiry(Duration::from_millis(0));
        let code = sent_code(svc.send_otp("a@edu.in"));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(svc.verify_otp("a@edu.in", &code), VerifyOutcome::Expired);
    }

    #[test]
    fn test_resend_throttled_while_fresh() {
        let mut svc = OtpService::new();
        let _ = svc.send_otp("a@edu.in");
        assert!(matches!(
            svc.send_otp("a@edu.in"),
            SendOutcome::Throttled { .. }
        ));
    }

    #[test]
    fn test_unknown_email() {
        let mut svc = OtpService::new();
        assert_eq!(svc.verify_otp("x@edu.in", "123456"), VerifyOutcome::NotRequested);
    }

    #[test]
    fn test_college_email_validation() {
        assert!(is_college_email("2301201171@krmu.edu.in"));
        assert!(is_college_email("someone@edu.in"));
        assert!(is_college_email("s@student.college.edu"));
        assert!(!is_college_email("someone@gmail.com"));
    }
}
