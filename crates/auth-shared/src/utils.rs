//! Utility functions

/// Masks the local part of an email for log output, keeping at most two
/// leading characters.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let keep = local.chars().count().saturating_sub(1).clamp(1, 2);
            let visible: String = local.chars().take(keep).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}
