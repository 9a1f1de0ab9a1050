use derive_getters::Getters;

pub const PASSWORDS_MISMATCH_MESSAGE: &str = "As senhas não conferem.";

/// A password and its confirmation, as typed in the account creation form.
#[derive(Debug, Getters, Clone, Eq, PartialEq)]
pub struct PasswordPair {
    password: String,
    confirmation: String,
}

impl PasswordPair {
    pub fn new(password: String, confirmation: String) -> Self {
        Self {
            password,
            confirmation,
        }
    }

    pub fn is_matching(&self) -> bool {
        self.password == self.confirmation
    }

    /// Message to give to `setCustomValidity`: an empty string marks the confirmation as valid.
    pub fn custom_validity(&self) -> &'static str {
        if self.is_matching() {
            ""
        } else {
            PASSWORDS_MISMATCH_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        password = {"", "secret", "Secret1!", "ção"},
        confirmation = {"", "secret", "Secret1!", "ção"}
    )]
    fn should_match(password: &str, confirmation: &str) {
        let pair = PasswordPair::new(password.to_owned(), confirmation.to_owned());
        assert!(pair.is_matching());
        assert_eq!("", pair.custom_validity());
    }

    #[parameterized(
        password = {"", "secret", "secret", "Secret"},
        confirmation = {"secret", "", "secret ", "secret"}
    )]
    fn should_not_match(password: &str, confirmation: &str) {
        let pair = PasswordPair::new(password.to_owned(), confirmation.to_owned());
        assert!(!pair.is_matching());
        assert_eq!("As senhas não conferem.", pair.custom_validity());
    }
}
