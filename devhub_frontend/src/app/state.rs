use crate::error::FormError;
use crate::models::CommunityInput;
use crate::query::MutationState;

#[derive(Default)]
pub struct CreateCommunityState {
    pub name: String,
    pub description: String,
    pub mutation: MutationState,
}

impl CreateCommunityState {
    /// Inputs and the submit button are locked while a request is out.
    pub fn inputs_enabled(&self) -> bool {
        !self.mutation.is_pending()
    }

    pub fn can_submit(&self) -> bool {
        !self.mutation.is_pending() && !self.mutation.is_success()
    }

    /// Checks both fields are filled in. The row carries the values exactly
    /// as typed.
    pub fn validate(&self) -> Result<CommunityInput, FormError> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(CommunityInput {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mutation {
            MutationState::Pending => "Creating...",
            MutationState::Success => "Community Created!",
            _ => "Create Community",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, description: &str) -> CreateCommunityState {
        CreateCommunityState {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_or_whitespace_fields_fail_validation() {
        for (name, description) in [("", "desc"), ("name", ""), ("   ", "desc"), ("name", "\n\t ")] {
            assert_eq!(
                form(name, description).validate(),
                Err(FormError::MissingFields),
                "name={name:?} description={description:?}"
            );
        }
    }

    #[test]
    fn valid_form_keeps_values_as_typed() {
        let input = form(" React Devs", "A space for React.").validate().unwrap();
        assert_eq!(input.name, " React Devs");
        assert_eq!(input.description, "A space for React.");
    }

    #[test]
    fn submit_is_locked_while_pending_and_after_success() {
        let mut state = form("a", "b");
        assert!(state.can_submit());
        assert_eq!(state.submit_label(), "Create Community");

        state.mutation = MutationState::Pending;
        assert!(!state.can_submit());
        assert!(!state.inputs_enabled());
        assert_eq!(state.submit_label(), "Creating...");

        state.mutation = MutationState::Success;
        assert!(!state.can_submit());
        assert!(state.inputs_enabled());
        assert_eq!(state.submit_label(), "Community Created!");

        state.mutation = MutationState::Error("nope".into());
        assert!(state.can_submit());
    }
}
