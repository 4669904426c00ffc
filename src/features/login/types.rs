//! Wire types for the wizard submission exchange. Only the redirect URL is
//! modeled on the response side; every other field the server may return is
//! ignored.

use serde::{Deserialize, Serialize};

/// Response returned by the submission endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Outcome of one wizard submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Address the browsing context should navigate to, when the server
    /// supplied one.
    pub redirect: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_deserialization() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"url":"/dashboard"}"#).expect("Failed to deserialize");
        assert_eq!(response.url.as_deref(), Some("/dashboard"));

        let response: LoginResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(response.url, None);
    }

    #[test]
    fn test_login_response_ignores_unknown_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"url":"/home","session":"abc","ttl":300}"#)
                .expect("Failed to deserialize");
        assert_eq!(response.url.as_deref(), Some("/home"));
    }
}
