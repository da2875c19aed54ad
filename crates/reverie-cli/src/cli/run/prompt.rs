use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use reverie_core::app::View;
use std::borrow::Cow;

/// Shows the current view and, while writing, the size of the draft.
#[derive(Clone)]
pub(crate) struct JournalPrompt {
    view: View,
    words: usize,
}

pub(crate) static PROMPT_INDICATOR: &str = "〉";
pub(crate) static VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub(crate) static MULTILINE_INDICATOR: &str = "::: ";

impl JournalPrompt {
    pub(crate) fn new(view: View, words: usize) -> Self {
        Self { view, words }
    }
}

impl Prompt for JournalPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match self.view {
            View::Write => Cow::Owned(format!("write ({} words)", self.words)),
            view => Cow::Owned(view.to_string()),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => PROMPT_INDICATOR.into(),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                PromptViMode::Normal => PROMPT_INDICATOR.into(),
                PromptViMode::Insert => VI_INSERT_PROMPT_INDICATOR.into(),
            },
            PromptEditMode::Custom(str) => format!("({str})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search) \"{}\": ", prefix, history_search.term))
    }
}
