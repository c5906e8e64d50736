//! Raw request lines for the Engine API.

use crate::utils::{InventoryError, Result};

/// Docker ids and names only use `[A-Za-z0-9_.-]`; anything else would
/// change the request line.
pub fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(InventoryError::InvalidId(id.to_string()))
    }
}

/// Inspect one container: `GET /containers/<id>/json`.
pub fn inspect(id: &str) -> Result<String> {
    validate_id(id)?;
    Ok(format!("GET /containers/{}/json HTTP/1.1\r\n\r\n", id))
}

/// List every container, stopped ones included.
pub fn list_all() -> String {
    "GET /containers/json?all=1 HTTP/1.1\r\n\r\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_is_a_bare_request_line() {
        assert_eq!(
            inspect("abc123").unwrap(),
            "GET /containers/abc123/json HTTP/1.1\r\n\r\n"
        );
        assert!(inspect("web_1.blue-2").is_ok());
    }

    #[test]
    fn inspect_rejects_ids_that_reshape_the_request() {
        for bad in ["", "a b", "a?all=1", "../images", "a/b", "a\r\nX-Injected: 1", "ä"] {
            assert!(
                matches!(inspect(bad), Err(InventoryError::InvalidId(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn list_asks_for_stopped_containers() {
        assert_eq!(list_all(), "GET /containers/json?all=1 HTTP/1.1\r\n\r\n");
    }
}
