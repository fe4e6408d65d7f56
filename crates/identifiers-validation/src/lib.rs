//! Validation logic for the identifiers used by `trellis-core`.

pub mod error;
pub mod room_alias_id;
pub mod room_id;
pub mod user_id;

pub use error::Error;

/// All identifiers must be 255 bytes or less.
#[cfg(not(feature = "compat-arbitrary-length-ids"))]
const MAX_BYTES: usize = 255;

/// Checks if an identifier is valid.
fn validate_id(id: &str, sigil: u8) -> Result<(), Error> {
    #[cfg(not(feature = "compat-arbitrary-length-ids"))]
    if id.len() > MAX_BYTES {
        return Err(Error::MaximumLengthExceeded);
    }

    if id.as_bytes().first() != Some(&sigil) {
        return Err(Error::MissingLeadingSigil);
    }

    Ok(())
}

/// Checks an identifier that contains a localpart and hostname.
///
/// Returns the index of the colon that separates the two.
fn parse_id(id: &str, sigil: u8) -> Result<usize, Error> {
    validate_id(id, sigil)?;
    let colon_idx = id.find(':').ok_or(Error::MissingColon)?;
    server_name::validate(&id[colon_idx + 1..])?;
    Ok(colon_idx)
}

/// Checks an identifier that contains a localpart and hostname.
fn validate_delimited_id(id: &str, sigil: u8) -> Result<(), Error> {
    parse_id(id, sigil)?;
    Ok(())
}

mod server_name {
    use crate::Error;

    /// Accepts `host` or `host:port` where host is a DNS name, IPv4 literal
    /// or bracketed IPv6 literal.
    pub(crate) fn validate(server_name: &str) -> Result<(), Error> {
        if server_name.is_empty() {
            return Err(Error::InvalidServerName);
        }

        let end_of_host = if server_name.starts_with('[') {
            let end_of_ipv6 = server_name.find(']').ok_or(Error::InvalidServerName)?;
            let literal = &server_name[1..end_of_ipv6];
            if literal.is_empty() || !literal.chars().all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.') {
                return Err(Error::InvalidServerName);
            }
            end_of_ipv6 + 1
        } else {
            let end_of_host = server_name.find(':').unwrap_or(server_name.len());
            let host = &server_name[..end_of_host];
            if host.is_empty() || !host.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.') {
                return Err(Error::InvalidServerName);
            }
            end_of_host
        };

        let port = &server_name[end_of_host..];
        if port.is_empty() {
            return Ok(());
        }
        match port.strip_prefix(':') {
            Some(digits) if !digits.is_empty() && digits.len() <= 5 && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
            _ => Err(Error::InvalidServerName),
        }
    }

}
