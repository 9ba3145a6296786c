//! User-facing (Arabic) error text.
//!
//! Two tables live here: the short diagnostics the HTTP client logs when a
//! response fails, and the longer messages pages show to the user.

use std::collections::BTreeMap;

use crate::error::{HerfaError, ServerMessage, StatusClass};

pub const MSG_NETWORK: &str = "خطأ في الاتصال بالشبكة. يرجى التحقق من الاتصال بالإنترنت";
pub const MSG_VALIDATION: &str = "بيانات غير صحيحة. يرجى التحقق من المدخلات";
pub const MSG_UNAUTHORIZED: &str = "يجب تسجيل الدخول للمتابعة";
pub const MSG_FORBIDDEN: &str = "ليس لديك صلاحية للقيام بهذا الإجراء";
pub const MSG_NOT_FOUND: &str = "المورد المطلوب غير موجود";
pub const MSG_CONFLICT: &str = "البيانات موجودة مسبقاً";
pub const MSG_SERVER: &str = "خطأ في الخادم. يرجى المحاولة لاحقاً";
pub const MSG_UNEXPECTED: &str = "حدث خطأ غير متوقع";
pub const MSG_VALIDATION_GENERAL: &str = "خطأ في التحقق من البيانات";

/// Diagnostic logged by the HTTP client for a failed response.
///
/// `None` means no response arrived at all.
pub fn diagnostic_for(status: Option<u16>) -> &'static str {
    match status.map(StatusClass::from_status) {
        None => "خطأ في الاتصال بالشبكة",
        Some(StatusClass::Unauthorized) => "انتهت الجلسة، يرجى تسجيل الدخول",
        Some(StatusClass::Forbidden) => MSG_FORBIDDEN,
        Some(StatusClass::NotFound) => MSG_NOT_FOUND,
        Some(StatusClass::Conflict) => MSG_CONFLICT,
        Some(StatusClass::Server) => "خطأ في الخادم",
        Some(StatusClass::Validation) | Some(StatusClass::Other) => MSG_UNEXPECTED,
    }
}

/// Extracts the message a page should display for `err`.
///
/// Order of preference: the server's validation array (newline-joined), the
/// server's single message, a per-status fallback, then generic text.
pub fn error_message(err: &HerfaError) -> String {
    match err {
        HerfaError::Api { status, body } => {
            if let Some(message) = body.message.as_ref().map(ServerMessage::joined) {
                if !message.is_empty() {
                    return message;
                }
            }
            match StatusClass::from_status(*status) {
                StatusClass::Validation => MSG_VALIDATION,
                StatusClass::Unauthorized => MSG_UNAUTHORIZED,
                StatusClass::Forbidden => MSG_FORBIDDEN,
                StatusClass::NotFound => MSG_NOT_FOUND,
                StatusClass::Conflict => MSG_CONFLICT,
                StatusClass::Server => MSG_SERVER,
                StatusClass::Other => MSG_UNEXPECTED,
            }
            .to_string()
        }
        HerfaError::Network { .. } => MSG_NETWORK.to_string(),
        HerfaError::NotAuthenticated => MSG_UNAUTHORIZED.to_string(),
        other => {
            let text = other.to_string();
            if text.is_empty() {
                MSG_UNEXPECTED.to_string()
            } else {
                text
            }
        }
    }
}

/// Raw validation input: a single string or a list of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrors<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// Groups validation messages by the field named in their first word.
///
/// `"phone must be valid"` lands under `phone`; messages that do not start
/// with a word character land under `general`.
pub fn format_validation_errors(errors: ValidationErrors<'_>) -> BTreeMap<String, Vec<String>> {
    let mut formatted: BTreeMap<String, Vec<String>> = BTreeMap::new();
    match errors {
        ValidationErrors::Text(text) => {
            formatted.insert("general".to_string(), vec![text.to_string()]);
        }
        ValidationErrors::List(list) => {
            for message in list {
                formatted
                    .entry(leading_field(message))
                    .or_default()
                    .push(message.clone());
            }
        }
    }
    formatted
}

fn leading_field(message: &str) -> String {
    let word: String = message
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let followed_by_space = message[word.len()..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    if !word.is_empty() && followed_by_space {
        word
    } else {
        "general".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorBody;

    #[test]
    fn test_validation_array_is_joined() {
        let err = HerfaError::api(
            400,
            ApiErrorBody {
                message: Some(ServerMessage::Many(vec!["a".into(), "b".into()])),
                error: None,
            },
        );
        assert_eq!(error_message(&err), "a\nb");
    }

    #[test]
    fn test_server_message_wins_over_status() {
        let err = HerfaError::api(
            404,
            ApiErrorBody {
                message: Some(ServerMessage::Single("العامل غير موجود".into())),
                error: None,
            },
        );
        assert_eq!(error_message(&err), "العامل غير موجود");
    }

    #[test]
    fn test_empty_server_message_falls_back_to_status_text() {
        let err = HerfaError::api(404, ApiErrorBody::parse(r#"{"message": ""}"#));
        assert_eq!(error_message(&err), MSG_NOT_FOUND);

        let err = HerfaError::api(400, ApiErrorBody::parse(r#"{"message": []}"#));
        assert_eq!(error_message(&err), MSG_VALIDATION);
    }

    #[test]
    fn test_status_fallbacks() {
        let msg = |status| error_message(&HerfaError::api(status, ApiErrorBody::default()));
        assert_eq!(msg(403), MSG_FORBIDDEN);
        assert_eq!(msg(409), MSG_CONFLICT);
        assert_eq!(msg(500), MSG_SERVER);
        assert_eq!(msg(418), MSG_UNEXPECTED);
        assert_eq!(error_message(&HerfaError::network("reset")), MSG_NETWORK);
    }

    #[test]
    fn test_format_validation_errors() {
        let list = vec![
            "phone must be a valid number".to_string(),
            "phone is required".to_string(),
            "كلمة المرور قصيرة".to_string(),
        ];
        let grouped = format_validation_errors(ValidationErrors::List(&list));
        assert_eq!(grouped["phone"].len(), 2);
        assert_eq!(grouped["general"], vec!["كلمة المرور قصيرة".to_string()]);

        let grouped = format_validation_errors(ValidationErrors::Text("bad"));
        assert_eq!(grouped["general"], vec!["bad".to_string()]);
    }
}
