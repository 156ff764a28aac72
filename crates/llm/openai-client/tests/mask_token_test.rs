//! Unit tests for [`openai_client::mask_token`].
//!
//! API keys are logged as first 7 chars + `***` + last 4 chars; short keys are fully hidden.

use openai_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-proj-123"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
    assert_eq!(mask_token("sk-proj-xyzw"), "sk-proj***xyzw");
}

/// **Test: Tokens that would be cut inside a multi-byte character are fully masked.**
#[test]
fn mask_token_non_ascii_does_not_panic() {
    assert_eq!(mask_token("ключ-ключ-ключ"), "***");
}
