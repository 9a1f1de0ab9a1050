use crate::user_action::UserAction;

const LEAD: &str = "Você tem certeza que deseja ";

/// Body of the confirmation modal, shown to the operator before an action is submitted.
/// It reads `lead`, then the emphasized `verb`, then `tail`.
/// Every part is plain text: the page inserts them as text nodes, so nothing is interpreted as markup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConfirmationMessage {
    action: UserAction,
    user_cn: String,
    new_password: Option<String>,
}

impl ConfirmationMessage {
    pub fn new(action: UserAction, user_cn: String, new_password: Option<String>) -> Self {
        Self {
            action,
            user_cn,
            new_password,
        }
    }

    pub fn lead(&self) -> &'static str {
        LEAD
    }

    pub fn verb(&self) -> &'static str {
        self.action.verb()
    }

    /// The rest of the sentence. The password is shown as typed.
    pub fn tail(&self) -> String {
        match (&self.action, &self.new_password) {
            (UserAction::ResetPassword, Some(new_password)) => {
                format!(r#" do usuário {} para "{new_password}"?"#, self.user_cn)
            }
            _ => format!(" o usuário {}?", self.user_cn),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// The message as read by the operator, the verb in `<strong>`.
    pub fn render(message: &ConfirmationMessage) -> String {
        format!(
            "{}<strong>{}</strong>{}",
            message.lead(),
            message.verb(),
            message.tail()
        )
    }

    #[test]
    fn should_render_disable_message() {
        let message = ConfirmationMessage::new(UserAction::Disable, "Jane Doe".to_owned(), None);
        assert_eq!(
            "Você tem certeza que deseja <strong>desabilitar</strong> o usuário Jane Doe?",
            render(&message)
        );
    }

    #[test]
    fn should_render_enable_message() {
        let message = ConfirmationMessage::new(UserAction::Enable, "Jane Doe".to_owned(), None);
        assert_eq!(
            "Você tem certeza que deseja <strong>habilitar</strong> o usuário Jane Doe?",
            render(&message)
        );
    }

    #[test]
    fn should_render_reset_password_message() {
        let message = ConfirmationMessage::new(
            UserAction::ResetPassword,
            "Jane Doe".to_owned(),
            Some("abc123".to_owned()),
        );
        assert_eq!(
            r#"Você tem certeza que deseja <strong>resetar a senha</strong> do usuário Jane Doe para "abc123"?"#,
            render(&message)
        );
    }

    #[test]
    fn should_keep_user_name_and_password_as_typed() {
        let message = ConfirmationMessage::new(
            UserAction::ResetPassword,
            "<b>Jane</b>".to_owned(),
            Some("a<b&c".to_owned()),
        );
        assert_eq!(r#" do usuário <b>Jane</b> para "a<b&c"?"#, message.tail());
    }
}
