mod fetch;
mod short_names;
mod vocabulary;

#[cfg(test)]
pub(crate) use {fetch::write_atomically, vocabulary::split_csv_line};

pub use {
    fetch::{
        DEFAULT_LABELS_FILE, DEFAULT_LABELS_URL, LabelRefresh, LabelSource, ensure_labels,
        fetch_labels,
    },
    short_names::{SHORT_NAMES, short_name_for},
    vocabulary::Vocabulary,
};
