//! Submission client for the wizard: one JSON POST of the accumulated field
//! values, then an optional full-page redirect decided by the response body.
//! There is no retry and no de-duplication; each wizard run submits at most
//! once.

use crate::app_lib::{AppError, api};
use crate::features::login::fields::FieldValues;
use crate::features::login::types::{LoginResponse, SubmitOutcome};

/// Submits the accumulated field values to `action` as a JSON body.
///
/// The response body is tolerated in any shape, including absent: only a
/// non-empty `url` field produces a redirect target. Transport and HTTP
/// failures surface as errors for the caller to display instead of being
/// silently dropped.
pub async fn submit_login(action: &str, values: &FieldValues) -> Result<SubmitOutcome, AppError> {
    log::info!("Submitting {} collected field(s) to {action}", values.len());
    let body = api::post_json(action, values).await?;

    Ok(SubmitOutcome {
        redirect: redirect_target(&body),
    })
}

/// Extracts the redirect target from a response body, if one is present.
/// Missing, empty, or malformed bodies mean success without navigation.
pub fn redirect_target(body: &str) -> Option<String> {
    let response: LoginResponse = serde_json::from_str(body).ok()?;
    response.url.filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::fields::{FieldEntry, FieldName};

    #[test]
    fn redirect_follows_a_non_empty_url() {
        assert_eq!(
            redirect_target(r#"{"url":"/dashboard"}"#),
            Some("/dashboard".to_string())
        );
    }

    #[test]
    fn no_url_means_success_without_navigation() {
        assert_eq!(redirect_target("{}"), None);
        assert_eq!(redirect_target(r#"{"url":""}"#), None);
        assert_eq!(redirect_target(r#"{"url":null}"#), None);
    }

    #[test]
    fn absent_or_malformed_bodies_mean_no_navigation() {
        assert_eq!(redirect_target(""), None);
        assert_eq!(redirect_target("not json"), None);
        assert_eq!(redirect_target(r#"{"url":42}"#), None);
    }

    #[test]
    fn terminal_submission_body_carries_every_collected_field() {
        let mut values = FieldValues::new();
        for (name, value) in [
            (FieldName::Username, "jsmith"),
            (FieldName::Email, "jsmith@example.com"),
            (FieldName::Password, "secret"),
        ] {
            values.merge(FieldEntry {
                name,
                value: value.to_string(),
            });
        }

        let body = serde_json::to_string(&values).expect("serializes");
        assert_eq!(
            body,
            r#"{"username":"jsmith","email":"jsmith@example.com","password":"secret"}"#
        );
    }
}
