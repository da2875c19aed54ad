use reverie_model::mood::Mood;

pub(crate) fn mood(entry: &str) -> String {
    format!(
        "Analyze the following journal entry and determine the overall emotional mood. \
Respond with only one word from this list: {}.

Journal entry: \"{entry}\"",
        Mood::list()
    )
}

pub(crate) fn summary(entry: &str) -> String {
    format!(
        "Summarize the following journal entry in 1-2 sentences, capturing the key themes and emotions. \
Keep it concise and meaningful.

Journal entry: \"{entry}\""
    )
}
