//! Data transfer objects for the Web API.

mod request;
mod response;
mod validation;

pub use request::{ConfirmParams, ContactFormRequest, RegisterTagRequest, SubmitMessageRequest};
pub use response::{
    ContactResponse, RegisterResponse, SubmitMessageResponse, TagOwnerResponse,
};
pub use validation::{not_empty_trimmed, ValidatedJson};
