use crate::core::{
    EditableField,
    PageContentRecord,
};

pub type PageLoadResult = Result<PageContentRecord, String>;

#[derive(Debug)]
pub enum TaskResult {
    PageLoaded {
        page_key: String,
        result: PageLoadResult,
    },
    FieldSaved {
        page_key: String,
        field: EditableField,
        result: Result<(), String>,
    },
}
