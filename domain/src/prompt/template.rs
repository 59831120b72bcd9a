//! Prompt templates for each agent

/// Templates for the four single-turn agents.
///
/// Caller text is interpolated verbatim: no escaping, no trimming and no
/// length limit. A message containing quotes or instructions lands in the
/// prompt as typed.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the country agent (which may answer via lookup functions)
    pub fn country_info(country: &str) -> String {
        format!("Tell me everything you know about {}.", country)
    }

    /// Prompt for agent 1 of the mood flow
    pub fn mood_analysis(message: &str) -> String {
        format!(
            r#"Analyze the following message and determine the user's primary mood. Respond with only a single, lowercase word: 'happy', 'sad', 'stressed', 'angry', 'neutral', 'excited'.
Message: "{}"
Mood:"#,
            message
        )
    }

    /// Prompt for agent 2 of the mood flow
    pub fn activity_suggestion(mood: &str) -> String {
        format!(
            r#"You are an empathetic activity recommender. Based on the user's mood being '{mood}', suggest a short, helpful activity. For example, if 'sad', suggest 'listening to calming music and reflecting'. If 'stressed', suggest 'taking a 10-minute walk outside'. Be encouraging and concise.

Mood: '{mood}'
Activity Suggestion:"#
        )
    }

    /// Prompt for the smart store agent
    pub fn product_suggestion(need: &str) -> String {
        format!(
            r#"You are a helpful smart store agent. Suggest a product based on user's need.

Example:
User: 'I have a headache'
Agent: 'You might consider ibuprofen. It's an anti-inflammatory for pain relief.'

User: '{}'
Agent:"#,
            need
        )
    }
}
