//! Names and ids shared between the rendered pages, the browser code and the server forms.

// region Account creation form
pub const PASSWORD_INPUT_ID: &str = "senha";
pub const PASSWORD_CONFIRMATION_INPUT_ID: &str = "confirmar_senha";
// endregion

// region Action buttons
pub const ACTION_DATA_ATTRIBUTE: &str = "data-action";
pub const USER_DN_DATA_ATTRIBUTE: &str = "data-user-dn";
pub const USER_CN_DATA_ATTRIBUTE: &str = "data-user-cn";
pub const NEW_PASSWORD_FIELD: &str = "nova_senha";
// endregion

// region Confirmation modal
pub const CONFIRM_MODAL_ID: &str = "confirmModal";
pub const CONFIRM_MODAL_SHOW_EVENT: &str = "show.bs.modal";
pub const CONFIRM_MODAL_TITLE: &str = "Confirmar Ação";
pub const MODAL_USER_DN_INPUT_ID: &str = "modal-confirm-form-user-dn";
pub const MODAL_ACTION_INPUT_ID: &str = "modal-confirm-form-action";
pub const MODAL_NEW_PASSWORD_INPUT_ID: &str = "modal-confirm-form-nova-senha";
// endregion
