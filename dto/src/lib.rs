pub mod action_request;
pub mod confirmation_message;
pub mod form_fields;
pub mod password_pair;
pub mod user_action;
pub mod user_summary;
