// src/job_trends/prompts.rs
//! Prompt templates for the two completion stages. Builders are pure: the
//! same inputs always produce the same prompt string.

pub const TREND_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const ADVISOR_SYSTEM_PROMPT: &str = "You are a helpful career advisor.";

pub fn trend_prompt(job_titles: &[String]) -> String {
    format!(
        "Here are the job titles scraped from LinkedIn:\n{}\n\n\
         Analyze these job titles and provide a summary of the 3 most trending \
         domains and job titles, also give a one line description as to why it \
         is in demand. Don't include an introductory sentence.",
        job_titles.join("\n")
    )
}

pub fn insight_prompt(profile_text: &str, trend_analysis: &str) -> String {
    format!(
        "User profile information:\n{}\n\n\
         Job titles analysis:\n{}\n\n\
         Based on the user's profile, provide personalized insights and advice \
         for these job trends.",
        profile_text, trend_analysis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_prompt_joins_titles_with_newlines() {
        let titles = vec![
            "Software Engineer".to_string(),
            "Data Analyst".to_string(),
        ];
        let prompt = trend_prompt(&titles);
        assert!(prompt.contains("Software Engineer\nData Analyst"));
        assert!(prompt.starts_with("Here are the job titles scraped from LinkedIn:"));
    }

    #[test]
    fn trend_prompt_is_deterministic() {
        let titles = vec!["Product Manager".to_string()];
        assert_eq!(trend_prompt(&titles), trend_prompt(&titles));
    }

    #[test]
    fn insight_prompt_carries_both_inputs() {
        let prompt = insight_prompt("10 years of backend work", "AI roles dominate");
        assert!(prompt.contains("User profile information:\n10 years of backend work"));
        assert!(prompt.contains("Job titles analysis:\nAI roles dominate"));
    }
}
