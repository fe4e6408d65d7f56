use crate::{Error, parse_id};

/// Validates a user ID of the form `@localpart:server_name`.
///
/// Historical user IDs are accepted as long as the localpart is non-empty and
/// printable; the strict grammar is only enforced for the sigil and delimiter.
pub fn validate(s: &str) -> Result<(), Error> {
    let colon_idx = parse_id(s, b'@')?;
    let localpart = &s[1..colon_idx];
    localpart_is_valid(localpart)
}

fn localpart_is_valid(localpart: &str) -> Result<(), Error> {
    if localpart.is_empty() {
        return Err(Error::Empty);
    }
    #[cfg(not(feature = "compat-user-id"))]
    if localpart.chars().any(|c| c.is_whitespace() || c.is_control() || c == ':') {
        return Err(Error::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::Error;

    #[test]
    fn valid_user_id() {
        assert_eq!(validate("@carl:example.com"), Ok(()));
    }

    #[test]
    fn historical_user_id() {
        assert_eq!(validate("@Carl.Jones=2:example.com"), Ok(()));
    }

    #[test]
    fn missing_sigil() {
        assert_eq!(validate("carl:example.com"), Err(Error::MissingLeadingSigil));
    }

    #[test]
    fn missing_delimiter() {
        assert_eq!(validate("@carl"), Err(Error::MissingColon));
    }

    #[test]
    fn empty_localpart() {
        assert_eq!(validate("@:example.com"), Err(Error::Empty));
    }

    #[test]
    fn whitespace_in_localpart() {
        assert_eq!(validate("@ca rl:example.com"), Err(Error::InvalidCharacters));
    }
}
