//! Generated confirmation codes for reservations.

/// Prefix for reservation confirmation codes.
const RESERVATION_PREFIX: &str = "RSV";
/// Number of characters taken from the random part.
const CODE_LEN: usize = 8;

/// Generate a reservation confirmation code of the form `RSV-3F9A21BC`.
///
/// The random part is the first eight hex characters of a UUID v4,
/// uppercased. Collisions are guarded by a unique constraint on the column.
pub fn confirmation_code() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{RESERVATION_PREFIX}-{}",
        raw[..CODE_LEN].to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_shape() {
        let code = confirmation_code();
        assert_eq!(code.len(), RESERVATION_PREFIX.len() + 1 + CODE_LEN);
        assert!(code.starts_with("RSV-"));
        assert!(code[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn codes_vary() {
        assert_ne!(confirmation_code(), confirmation_code());
    }
}
