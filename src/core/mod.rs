pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::PageError;
pub use models::{
    ContentPatch,
    EditableField,
    IntroSection,
    PageContentRecord,
    PageDocument,
};
