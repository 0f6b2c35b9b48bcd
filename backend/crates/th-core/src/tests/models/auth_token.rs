use crate::AuthToken;

use uuid::Uuid;

#[test]
fn test_header_value_uses_token_scheme() {
    let token = AuthToken::new(Uuid::new_v4(), "abc123".to_string());

    assert_eq!(token.header_value(), "Token abc123");
}

#[test]
fn test_auth_headers_has_single_authorization_entry() {
    let token = AuthToken::new(Uuid::new_v4(), "abc123".to_string());

    let headers = token.auth_headers();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("Authorization").unwrap(), "Token abc123");
}
