pub mod engine;
pub mod errors;
pub mod notice;
pub mod schema;
pub mod session;
pub mod store;
pub mod tasks;
pub mod validation;

pub use engine::FormEngine;
pub use errors::FormdeckError;
pub use notice::{
    Notice,
    ResetTicket,
};
pub use schema::{
    FieldDescriptor,
    FieldKind,
    FormSchema,
    SchemaRegistry,
};
pub use session::SessionState;
pub use store::{
    EntryId,
    SubmissionStore,
    SubmitKind,
    SubmitOutcome,
    SubmittedEntry,
};
pub use validation::{
    validate,
    FieldErrors,
    FieldValues,
};
