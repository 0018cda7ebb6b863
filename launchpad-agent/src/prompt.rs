//! Prompt templates for generated copy.

use crate::backend::traits::CompletionRequest;

/// Separator placed between comments in the sentiment prompt.
pub const COMMENT_SEPARATOR: &str = " | ";

/// Prompt asking for a two-sentence elevator pitch.
pub fn pitch_prompt(name: &str, ticker: &str) -> String {
    format!(
        "Write a short, punchy, 2-sentence elevator pitch for a memecoin startup called \"{}\" \
         with ticker ${}. It should sound visionary but slightly degenerate, mixing Apple \
         marketing speak with crypto slang.",
        name, ticker
    )
}

/// Prompt asking for a one-sentence sentiment summary of `comments`.
pub fn sentiment_prompt(comments: &[String]) -> String {
    format!(
        "Analyze these crypto community comments and give a one-sentence \"Market Sentiment\" \
         summary in the style of a cynical financial analyst: {}",
        comments.join(COMMENT_SEPARATOR)
    )
}

/// Completion request for a pitch.
pub fn pitch_request(name: &str, ticker: &str) -> CompletionRequest {
    CompletionRequest::user(pitch_prompt(name, ticker))
}

/// Completion request for a sentiment summary.
pub fn sentiment_request(comments: &[String]) -> CompletionRequest {
    CompletionRequest::user(sentiment_prompt(comments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_prompt() {
        let prompt = pitch_prompt("Acme", "ACME");
        assert!(prompt.contains("called \"Acme\" with ticker $ACME."));
        assert!(prompt.starts_with("Write a short, punchy, 2-sentence elevator pitch"));
    }

    #[test]
    fn test_sentiment_prompt_joins_comments() {
        let prompt = sentiment_prompt(&["wagmi".to_string(), "rug?".to_string()]);
        assert!(prompt.ends_with("cynical financial analyst: wagmi | rug?"));
    }
}
