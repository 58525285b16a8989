//! The embedded signing inputs.
use crate::{base64_decode, SignError};

pub const GREETING: &str = "Hello Lettile Red Book!";

/// Shared secret for the lead webhook.
pub const TOKEN: &str = "660719b4a7591769583a7c8d20c6dfa4";

/// A sample lead form submission, base64 encoded.
pub const BODY: &str = concat!(
    "eyJkYXRhIjp7ImxhbmRpbmdfcGFnZV9pZCI6MTAwMDAsInVybCI6Imh0dHBzOnBhZ2VzLnhpYW9ob25nc2h1LmNv",
    "bS9hZC9lZmZlY3QvdGVzdCIsInN1Ym1pdHRlZF90aW1lIjoiMjAxOS0xMS0yMSAxNToyMDoyNSIsInNvdXJjZV9j",
    "aGFubmVsIjoi5rWL6K+VIiwiYWNjb3VudF9pZCI6IjVhZmJiNGM1NGVhY2FiNDgyOTE5ZGNiMiIsImFjY291bnRf",
    "bmFtZSI6IuiWr+euoeWutiIsImNhbXBhaWduX2lkIjoxMDAwMCwiY2FtcGFpZ25fbmFtZSI6Iua1i+ivleiuoeWI",
    "kiIsInVuaXRfaWQiOjEwMDAwLCJ1bml0X25hbWUiOiLmtYvor5XljZXlhYMiLCJjcmVhdGl2ZV9pZCI6MTAwMDAs",
    "ImxlYWRzX2lkIjoiNWRkNjNhYjkwNWY3MzA2Yjc4ZDZlODY4IiwiZGF0YSI6W3sibGFiZWwiOiLlp5PlkI0iLCJ2",
    "YWx1ZSI6IuiWr+euoeWutiJ9LHsibGFiZWwiOiLmiYvmnLrlj7ciLCJ2YWx1ZSI6IjEyM3h4eHh4eHh4In0seyJs",
    "YWJlbCI6IumCrueusSIsInZhbHVlIjoidGVzdEB4aWFvaG9uZ3NodS5jb20ifSx7ImxhYmVsIjoi55yB5Lu9Iiwi",
    "dmFsdWUiOiLkuIrmtbcifSx7ImxhYmVsIjoi5Z+O5biCIiwidmFsdWUiOiLkuIrmtbfluIIifSx7ImxhYmVsIjoi",
    "6K+m57uG5Zyw5Z2AIiwidmFsdWUiOiJ4eHgifSx7ImxhYmVsIjoi5oCn5YirIiwidmFsdWUiOiLnlLcifSx7Imxh",
    "YmVsIjoi5pWw5YC8IiwidmFsdWUiOiI1MTUifSx7ImxhYmVsIjoi5paH5pysIiwidmFsdWUiOiIxMjNhYmMifSx7",
    "ImxhYmVsIjoi5aSa6YCJIiwidmFsdWUiOiJbXCLpgInpobkyXCIsXCLpgInpobkxXCIsXCLpgInpobkzXCJdIn0s",
    "eyJsYWJlbCI6IuWNlemAiSIsInZhbHVlIjoi6YCJ6aG5MyJ9XX0sInRpbWVzdGFtcCI6MTU3NDMyMDgyNTc3OCwi",
    "c291cmNlIjoi5bCP57qi5LmmIn0=",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    key: Vec<u8>,
    message: Vec<u8>,
}

impl Payload {
    pub fn new(token: &str, body_b64: &str) -> Result<Self, SignError> {
        let message = base64_decode(body_b64)?;
        tracing::debug!(
            key_len = token.len(),
            message_len = message.len(),
            "payload decoded"
        );
        Ok(Self {
            key: token.as_bytes().to_vec(),
            message,
        })
    }

    pub fn embedded() -> Result<Self, SignError> {
        Self::new(TOKEN, BODY)
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::DecodeError;

    #[test]
    fn embedded_payload_decodes_to_json_body() {
        let payload = Payload::embedded().unwrap();

        assert_eq!(payload.key(), TOKEN.as_bytes());
        assert_eq!(payload.message().len(), 878);
        assert!(payload.message().starts_with(b"{\"data\":{\"landing_page_id\":10000"));
        assert!(std::str::from_utf8(payload.message()).is_ok());
    }

    #[test]
    fn malformed_body_is_invalid_encoding() {
        let err = Payload::new(TOKEN, "eyJk!XRhIjp7").unwrap_err();

        assert_eq!(
            err,
            SignError::InvalidEncoding(DecodeError::InvalidCharacter {
                character: '!',
                index: 4,
            })
        );
    }
}
