use reverie_entity::journal::journal_entry::Model as JournalEntryModel;
use reverie_model::journal::JournalEntry;

pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl FromDbModel<JournalEntryModel> for JournalEntry {
    fn from_db_model(model: JournalEntryModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            mood: model.mood,
            summary: model.summary,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
