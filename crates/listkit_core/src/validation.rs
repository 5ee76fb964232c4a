//! String validation helpers.

/// Returns `true` when `text` contains an `@` anywhere.
///
/// This is a presence check only; no domain or RFC 5322 validation.
pub fn is_email_valid(text: &str) -> bool {
    text.contains('@')
}

/// Method-style access to [`is_email_valid`] on string slices.
pub trait EmailExt {
    fn is_email_valid(&self) -> bool;
}

impl EmailExt for str {
    fn is_email_valid(&self) -> bool {
        is_email_valid(self)
    }
}
