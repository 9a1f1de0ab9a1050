use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Administrative actions that can be applied onto a directory user.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UserAction {
    Disable,
    Enable,
    ResetPassword,
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Ação desconhecida: {0}.")]
pub struct UnknownAction(pub String);

impl UserAction {
    /// Identifier of the action, as carried by `data-action` and the `acao` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Disable => "desabilitar",
            UserAction::Enable => "habilitar",
            UserAction::ResetPassword => "resetar_senha",
        }
    }

    /// Emphasized verb of the confirmation message.
    pub fn verb(&self) -> &'static str {
        match self {
            UserAction::Disable => "desabilitar",
            UserAction::Enable => "habilitar",
            UserAction::ResetPassword => "resetar a senha",
        }
    }
}

impl FromStr for UserAction {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "desabilitar" => Ok(UserAction::Disable),
            "habilitar" => Ok(UserAction::Enable),
            "resetar_senha" => Ok(UserAction::ResetPassword),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

impl Display for UserAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {"desabilitar", "habilitar", "resetar_senha"},
        expected = {UserAction::Disable, UserAction::Enable, UserAction::ResetPassword}
    )]
    fn should_parse_action(value: &str, expected: UserAction) {
        let action = UserAction::from_str(value).unwrap();
        assert_eq!(expected, action);
        assert_eq!(value, action.as_str());
    }

    #[parameterized(value = {"", "excluir", "Habilitar", " habilitar"})]
    fn should_not_parse_unknown_action(value: &str) {
        let error = UserAction::from_str(value).unwrap_err();
        assert_eq!(UnknownAction(value.to_owned()), error);
    }
}
