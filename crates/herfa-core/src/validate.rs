//! Client-side form validation with Arabic messages.
//!
//! The backend validates again; these checks only save a round trip.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CreateServiceRequest, RegisterRequest, ReviewInput, WorkerInput};
use crate::upload::UploadFile;

static IRAQI_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^07[3-9]\d{8}$").expect("valid regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:(//)?[^\s/?#]+\S*$").expect("valid regex")
});

pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Field name -> message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Iraqi mobile number: `07[3-9]` followed by 8 digits, spaces and dashes ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    IRAQI_PHONE.is_match(&cleaned)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Password rules; returns every violated rule.
pub fn validate_password(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec!["كلمة المرور مطلوبة".to_string()];
    }
    let mut errors = Vec::new();
    if password.chars().count() < 6 {
        errors.push("كلمة المرور يجب أن تكون 6 أحرف على الأقل".to_string());
    }
    errors
}

pub fn is_valid_name(name: &str) -> bool {
    (2..=100).contains(&name.chars().count())
}

pub fn is_valid_rating(rating: f64) -> bool {
    (1.0..=5.0).contains(&rating)
}

/// Empty counts as valid (the URL fields are optional).
pub fn is_valid_url(url: &str) -> bool {
    url.is_empty() || URL.is_match(url)
}

/// Checks type and size of an image before upload.
pub fn validate_image_file(file: Option<&UploadFile>, max_size_mb: u64) -> Result<(), String> {
    let Some(file) = file else {
        return Err("لم يتم اختيار ملف".to_string());
    };
    if !ALLOWED_IMAGE_TYPES.contains(&file.mime_type.as_str()) {
        return Err("نوع الملف غير مدعوم. يرجى اختيار صورة (JPG, PNG, GIF, WEBP)".to_string());
    }
    if file.size() > max_size_mb * 1024 * 1024 {
        return Err(format!("حجم الملف يجب أن يكون أقل من {} ميجابايت", max_size_mb));
    }
    Ok(())
}

pub fn validate_registration_form(form: &RegisterRequest) -> FormErrors {
    let mut errors = FormErrors::default();
    if !is_valid_name(&form.name) {
        errors.add("name", "الاسم يجب أن يكون بين 2 و 100 حرف");
    }
    if let Some(email) = form.email.as_deref().filter(|e| !e.is_empty()) {
        if !is_valid_email(email) {
            errors.add("email", "البريد الإلكتروني غير صحيح");
        }
    }
    if !is_valid_phone(&form.phone) {
        errors.add("phone", "رقم الهاتف غير صحيح. يجب أن يبدأ بـ 07");
    }
    let password_errors = validate_password(&form.password);
    if !password_errors.is_empty() {
        errors.add("password", password_errors.join(", "));
    }
    errors
}

pub fn validate_login_form(identifier: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    if identifier.trim().is_empty() {
        errors.add("identifier", "يرجى إدخال رقم الهاتف أو البريد الإلكتروني");
    }
    if password.is_empty() {
        errors.add("password", "كلمة المرور مطلوبة");
    }
    errors
}

pub fn validate_worker_profile_form(form: &WorkerInput) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.profession_id.is_none_or(|id| id <= 0) {
        errors.add("profession_id", "يرجى اختيار المهنة");
    }
    let non_empty = |field: &Option<String>| field.clone().filter(|s| !s.is_empty());
    if non_empty(&form.contact_phone).is_some_and(|p| !is_valid_phone(&p)) {
        errors.add("contact_phone", "رقم الهاتف غير صحيح");
    }
    if non_empty(&form.whatsapp_number).is_some_and(|p| !is_valid_phone(&p)) {
        errors.add("whatsapp_number", "رقم الواتساب غير صحيح");
    }
    if non_empty(&form.facebook_url).is_some_and(|u| !is_valid_url(&u)) {
        errors.add("facebook_url", "رابط الفيسبوك غير صحيح");
    }
    if non_empty(&form.instagram_url).is_some_and(|u| !is_valid_url(&u)) {
        errors.add("instagram_url", "رابط الإنستغرام غير صحيح");
    }
    errors
}

pub fn validate_request_form(form: &CreateServiceRequest) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.worker_id <= 0 {
        errors.add("worker_id", "يرجى اختيار العامل");
    }
    if form.problem_description.trim().is_empty() {
        errors.add("problem_description", "يرجى وصف المشكلة");
    }
    errors
}

pub fn validate_review_form(form: &ReviewInput) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.request_id.is_none_or(|id| id <= 0) {
        errors.add("request_id", "معرف الطلب مطلوب");
    }
    if !form.rating.is_some_and(|r| is_valid_rating(f64::from(r))) {
        errors.add("rating", "التقييم يجب أن يكون بين 1 و 5");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("07701234567"));
        assert!(is_valid_phone("0770 123-4567"));
        assert!(!is_valid_phone("07201234567"));
        assert!(!is_valid_phone("0770123456"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_email_and_url() {
        assert!(is_valid_email("a@b.iq"));
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_url(""));
        assert!(is_valid_url("https://facebook.com/worker"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_registration_form() {
        let form = RegisterRequest {
            name: "ع".to_string(),
            email: Some("bad".to_string()),
            phone: "0123".to_string(),
            password: "123".to_string(),
            role: Role::Client,
            neighborhood_id: None,
        };
        let errors = validate_registration_form(&form);
        assert!(!errors.is_valid());
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("phone").is_some());
        assert_eq!(
            errors.get("password"),
            Some("كلمة المرور يجب أن تكون 6 أحرف على الأقل")
        );
    }

    #[test]
    fn test_review_form() {
        let ok = ReviewInput {
            request_id: Some(4),
            rating: Some(5),
            comment: None,
        };
        assert!(validate_review_form(&ok).is_valid());
        let bad = ReviewInput {
            request_id: None,
            rating: Some(6),
            comment: None,
        };
        let errors = validate_review_form(&bad);
        assert!(errors.get("request_id").is_some());
        assert!(errors.get("rating").is_some());
    }

    #[test]
    fn test_image_file() {
        let png = UploadFile::new("a.png", "image/png", vec![0; 10]);
        assert!(validate_image_file(Some(&png), 5).is_ok());
        let pdf = UploadFile::new("a.pdf", "application/pdf", vec![0; 10]);
        assert!(validate_image_file(Some(&pdf), 5).is_err());
        let big = UploadFile::new("a.png", "image/png", vec![0; 2 * 1024 * 1024]);
        assert!(validate_image_file(Some(&big), 1).is_err());
        assert!(validate_image_file(None, 5).is_err());
    }
}
