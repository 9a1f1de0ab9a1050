use crate::confirmation_message::ConfirmationMessage;
use crate::form_fields::{ACTION_DATA_ATTRIBUTE, USER_CN_DATA_ATTRIBUTE, USER_DN_DATA_ATTRIBUTE};
use crate::user_action::{UnknownAction, UserAction};
use derive_getters::Getters;
use std::str::FromStr;
use thiserror::Error;

/// What the operator asked for when clicking an action button.
/// Each variant carries exactly the data its confirmation and submission need.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ActionRequest {
    Disable {
        user_dn: String,
        user_cn: String,
    },
    Enable {
        user_dn: String,
        user_cn: String,
    },
    ResetPassword {
        user_dn: String,
        user_cn: String,
        new_password: String,
    },
}

/// Reasons an action button can't open the confirmation modal.
/// The message of each variant is shown as is to the operator.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ActionRequestError {
    #[error("Por favor, digite a nova senha antes de clicar em Resetar.")]
    MissingNewPassword,
    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),
    #[error("O botão de ação não informa o atributo `{0}`.")]
    MissingAttribute(&'static str),
}

/// The values the confirmation form submits to the server.
#[derive(Debug, Getters, Clone, Eq, PartialEq)]
pub struct ModalFormFields {
    user_dn: String,
    action: String,
    new_password: String,
}

impl ActionRequest {
    /// Build a request from the metadata of the element that opened the modal.
    /// `new_password` is the value typed next to the button, if there is such an input.
    pub fn from_metadata(
        action: Option<&str>,
        user_dn: Option<&str>,
        user_cn: Option<&str>,
        new_password: Option<&str>,
    ) -> Result<Self, ActionRequestError> {
        let action = action.ok_or(ActionRequestError::MissingAttribute(ACTION_DATA_ATTRIBUTE))?;
        let action = UserAction::from_str(action)?;

        let new_password = new_password.filter(|password| !password.is_empty());
        if action == UserAction::ResetPassword && new_password.is_none() {
            return Err(ActionRequestError::MissingNewPassword);
        }

        let user_dn = user_dn
            .filter(|user_dn| !user_dn.is_empty())
            .ok_or(ActionRequestError::MissingAttribute(USER_DN_DATA_ATTRIBUTE))?
            .to_owned();
        let user_cn = user_cn
            .ok_or(ActionRequestError::MissingAttribute(USER_CN_DATA_ATTRIBUTE))?
            .to_owned();

        Ok(match (action, new_password) {
            (UserAction::Disable, _) => ActionRequest::Disable { user_dn, user_cn },
            (UserAction::Enable, _) => ActionRequest::Enable { user_dn, user_cn },
            (UserAction::ResetPassword, new_password) => ActionRequest::ResetPassword {
                user_dn,
                user_cn,
                new_password: new_password.unwrap_or_default().to_owned(),
            },
        })
    }

    pub fn action(&self) -> UserAction {
        match self {
            ActionRequest::Disable { .. } => UserAction::Disable,
            ActionRequest::Enable { .. } => UserAction::Enable,
            ActionRequest::ResetPassword { .. } => UserAction::ResetPassword,
        }
    }

    pub fn user_dn(&self) -> &str {
        match self {
            ActionRequest::Disable { user_dn, .. }
            | ActionRequest::Enable { user_dn, .. }
            | ActionRequest::ResetPassword { user_dn, .. } => user_dn,
        }
    }

    pub fn user_cn(&self) -> &str {
        match self {
            ActionRequest::Disable { user_cn, .. }
            | ActionRequest::Enable { user_cn, .. }
            | ActionRequest::ResetPassword { user_cn, .. } => user_cn,
        }
    }

    pub fn new_password(&self) -> Option<&str> {
        match self {
            ActionRequest::ResetPassword { new_password, .. } => Some(new_password),
            _ => None,
        }
    }

    pub fn confirmation_message(&self) -> ConfirmationMessage {
        ConfirmationMessage::new(
            self.action(),
            self.user_cn().to_owned(),
            self.new_password().map(str::to_owned),
        )
    }

    /// Values to stage into the confirmation form.
    /// The password field receives what was typed next to the button, whatever the action.
    /// Without such an input it is cleared, so a previous value is never resent.
    pub fn modal_form_fields(&self, staged_password: Option<&str>) -> ModalFormFields {
        ModalFormFields {
            user_dn: self.user_dn().to_owned(),
            action: self.action().as_str().to_owned(),
            new_password: self
                .new_password()
                .or(staged_password)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}
