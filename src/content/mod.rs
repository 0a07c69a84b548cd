pub mod api;
pub mod cache;
pub mod document;
pub mod store;
pub mod weeks;

pub use cache::{
    PageCache,
    SharedPageCache,
};
pub use document::{
    apply_field_update,
    decode_document,
    encode_document,
};
pub use store::{
    ContentStore,
    HttpTransport,
};
