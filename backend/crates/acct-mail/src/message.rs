pub const VERIFICATION_SUBJECT: &str = "Please certify your email address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationMessage {
    pub subject: String,
    pub body: String,
    pub link: String,
}

/// Render the verification mail for `account_id`.
///
/// The link targets the public verify route, so following it activates the
/// account.
pub fn build_verification_message(
    verify_base_url: &str,
    account_id: i64,
    certification_code: &str,
) -> VerificationMessage {
    let link = format!(
        "{}/api/users/{}/verify?certificationCode={}",
        verify_base_url.trim_end_matches('/'),
        account_id,
        certification_code
    );

    VerificationMessage {
        subject: String::from(VERIFICATION_SUBJECT),
        body: format!("Please click the following link to certify your email address: {link}"),
        link,
    }
}
