/// An API access token, wrapped so we don't print it by accident
#[derive(Clone)]
pub struct Token(String);

impl Token {
    /// True if the token is empty or only whitespace
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token (******)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value.trim().to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn test_debug_hides_token() {
        let token = Token::from("7~supersecret".to_string());
        assert!(!format!("{:?}", token).contains("supersecret"));
    }

    #[test]
    fn test_whitespace_is_empty() {
        assert!(Token::from("  \n".to_string()).is_empty());
        assert_eq!(Token::from(" abc\n".to_string()).as_ref(), "abc");
    }
}
