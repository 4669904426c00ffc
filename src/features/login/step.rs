//! Step sequencing for the wizard render shape.
//!
//! The wizard is a fixed, closed progression: username, then email, then
//! password, then a single submission. The transition is an explicit total
//! function over the step enum, invoked by the form after each accepted
//! merge, so sequencing stays decoupled from rendering.

use crate::features::login::fields::FieldName;

/// Phase of the wizard. `Unset` is the idle phase a freshly created wizard
/// leaves immediately; see [`FormStep::initial`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStep {
    #[default]
    Unset,
    Username,
    Email,
    Password,
}

/// Result of advancing the wizard by one accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAdvance {
    /// Move to this step and keep collecting.
    Next(FormStep),
    /// All fields are collected; hand the values to the submission client.
    Submit,
}

impl FormStep {
    /// Advances to the next phase. Total over the closed step set; the
    /// password step is terminal and triggers submission instead.
    pub fn advance(self) -> StepAdvance {
        match self {
            Self::Unset => StepAdvance::Next(Self::Username),
            Self::Username => StepAdvance::Next(Self::Email),
            Self::Email => StepAdvance::Next(Self::Password),
            Self::Password => StepAdvance::Submit,
        }
    }

    /// The step a freshly mounted wizard shows: `Unset` advanced once, so the
    /// first field is active without any user action.
    pub fn initial() -> Self {
        let StepAdvance::Next(step) = Self::Unset.advance() else {
            unreachable!("the idle phase always advances to a field step");
        };
        step
    }

    /// The field collected during this phase, if any.
    pub fn field(self) -> Option<FieldName> {
        match self {
            Self::Unset => None,
            Self::Username => Some(FieldName::Username),
            Self::Email => Some(FieldName::Email),
            Self::Password => Some(FieldName::Password),
        }
    }

    /// Label for the submit control while this phase is active.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Password => "Submit",
            _ => "Next",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounting_advances_from_unset_to_username() {
        assert_eq!(FormStep::default(), FormStep::Unset);
        assert_eq!(FormStep::initial(), FormStep::Username);
    }

    #[test]
    fn advance_follows_the_fixed_transition_table() {
        assert_eq!(
            FormStep::Unset.advance(),
            StepAdvance::Next(FormStep::Username)
        );
        assert_eq!(
            FormStep::Username.advance(),
            StepAdvance::Next(FormStep::Email)
        );
        assert_eq!(
            FormStep::Email.advance(),
            StepAdvance::Next(FormStep::Password)
        );
        assert_eq!(FormStep::Password.advance(), StepAdvance::Submit);
    }

    #[test]
    fn sequence_is_monotonic_with_no_skips_or_repeats() {
        let mut observed = Vec::new();
        let mut step = FormStep::initial();
        loop {
            observed.push(step);
            match step.advance() {
                StepAdvance::Next(next) => step = next,
                StepAdvance::Submit => break,
            }
        }

        assert_eq!(
            observed,
            vec![FormStep::Username, FormStep::Email, FormStep::Password]
        );
    }

    #[test]
    fn each_field_phase_collects_its_own_field() {
        assert_eq!(FormStep::Unset.field(), None);
        assert_eq!(FormStep::Username.field(), Some(FieldName::Username));
        assert_eq!(FormStep::Email.field(), Some(FieldName::Email));
        assert_eq!(FormStep::Password.field(), Some(FieldName::Password));
    }

    #[test]
    fn only_the_terminal_step_is_labeled_submit() {
        assert_eq!(FormStep::Unset.submit_label(), "Next");
        assert_eq!(FormStep::Username.submit_label(), "Next");
        assert_eq!(FormStep::Email.submit_label(), "Next");
        assert_eq!(FormStep::Password.submit_label(), "Submit");
    }
}
