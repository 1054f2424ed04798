use serde::Deserialize;
use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Unexpected format is received")]
    Malformed,

    #[error("{reason}")]
    Rejected { reason: String },

    #[error("no credits")]
    NoCredits,

    #[error("{message}")]
    Failed { message: String },
}

/// Failure markers the gateway mixes into an otherwise free-form payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FailureEnvelope {
    result: Option<String>,
    reason: Option<String>,
    success: Option<bool>,
    message: Option<String>,
}

/// Split a raw response body into a verbatim success payload or a failure.
pub fn classify(body: &str) -> Result<Value, ClassifyError> {
    let value: Value = serde_json::from_str(body).map_err(|_| ClassifyError::Malformed)?;
    // Non-object payloads carry no failure markers and pass through verbatim.
    let envelope = FailureEnvelope::deserialize(&value).unwrap_or_default();

    match envelope.result.as_deref() {
        Some("reject") => {
            return Err(ClassifyError::Rejected {
                reason: envelope.reason.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
            });
        }
        Some("no credits") => return Err(ClassifyError::NoCredits),
        _ => {}
    }

    if envelope.success == Some(false) {
        return Err(ClassifyError::Failed {
            message: envelope.message.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_json_body_is_malformed() {
        assert_eq!(classify("<html>oops</html>"), Err(ClassifyError::Malformed));
        assert_eq!(classify(""), Err(ClassifyError::Malformed));
    }

    #[test]
    fn reject_result_carries_the_reason() {
        let err = classify(r#"{"result":"reject","reason":"test reason"}"#).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Rejected {
                reason: "test reason".to_owned()
            }
        );
        assert_eq!(err.to_string(), "test reason");
    }

    #[test]
    fn reject_without_reason_falls_back_to_unknown_error() {
        let err = classify(r#"{"result":"reject"}"#).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Rejected {
                reason: "Unknown error".to_owned()
            }
        );
    }

    #[test]
    fn no_credits_result_is_its_own_failure() {
        let err = classify(r#"{"result":"no credits"}"#).unwrap_err();
        assert_eq!(err, ClassifyError::NoCredits);
        assert_eq!(err.to_string(), "no credits");
    }

    #[test]
    fn success_false_uses_the_message_field() {
        let err = classify(r#"{"success":false,"message":"test reason"}"#).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Failed {
                message: "test reason".to_owned()
            }
        );

        let err = classify(r#"{"success":false}"#).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Failed {
                message: "Unknown error".to_owned()
            }
        );
    }

    #[test]
    fn well_formed_payloads_pass_through_verbatim() {
        let body = r#"{"success":true,"data":{"id":12345,"extendStatus":"queue"}}"#;
        let value = classify(body).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"id": 12345, "extendStatus": "queue"}})
        );

        assert_eq!(classify("null").unwrap(), Value::Null);
        assert_eq!(classify(r#"[{"id":1}]"#).unwrap(), json!([{"id": 1}]));
    }

    #[test]
    fn success_true_with_result_key_is_not_a_failure() {
        let body = r#"{"result":"success","success":true}"#;
        assert!(classify(body).is_ok());
    }
}
