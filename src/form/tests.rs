use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Profile {
    nickname: String,
    confirm: String,
}

const NICKNAME: &str = "nickname";
const CONFIRM: &str = "confirm";

impl FormModel for Profile {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec {
                name: NICKNAME,
                label: "Nickname",
                placeholder: "Nickname",
                secret: false,
            },
            FieldSpec {
                name: CONFIRM,
                label: "Confirm",
                placeholder: "Confirm",
                secret: false,
            },
        ];
        FIELDS
    }

    fn schema() -> Result<Schema, FormError> {
        Ok(Schema::new()
            .field(
                NICKNAME,
                [
                    Rule::required("Nickname is required"),
                    Rule::min_length(3, "Nickname must be at least 3 characters"),
                ],
            )
            .field(
                CONFIRM,
                [Rule::equals_field(NICKNAME, "Nicknames must match")],
            ))
    }

    fn from_state(state: &FormState) -> Self {
        Profile {
            nickname: state.value(NICKNAME).to_string(),
            confirm: state.value(CONFIRM).to_string(),
        }
    }
}

fn controller(mode: ValidationMode) -> FormController<Profile> {
    FormController::new(FormOptions {
        validation_mode: mode,
    })
    .unwrap()
}

fn recording(controller: &mut FormController<Profile>) -> Rc<RefCell<Vec<Profile>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    controller.on_submit(move |profile: &Profile| sink.borrow_mut().push(profile.clone()));
    calls
}

#[test]
fn new_controller_seeds_schema_fields() {
    let form = controller(ValidationMode::OnSubmit);
    assert!(form.state().contains(NICKNAME));
    assert!(form.state().contains(CONFIRM));
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.errors().is_empty());
}

#[test]
fn binding_reads_and_writes_value() {
    let mut form = controller(ValidationMode::OnSubmit);
    let mut field = form.bind(NICKNAME);
    assert_eq!(field.value(), "");
    field.on_change("Ada");
    assert_eq!(field.value(), "Ada");
    field.push_char('!');
    field.pop_char();
    field.pop_char();
    assert_eq!(field.value(), "Ad");
}

#[test]
fn binding_unknown_field_starts_empty() {
    let mut form = controller(ValidationMode::OnSubmit);
    let mut field = form.bind("unknown");
    assert_eq!(field.value(), "");
    assert!(!field.is_touched());
    field.pop_char();
    field.on_blur();
    assert!(field.is_touched());
    assert_eq!(field.error(), None);
}

#[test]
fn blur_marks_touched_without_validating_on_submit_mode() {
    let mut form = controller(ValidationMode::OnSubmit);
    form.bind(NICKNAME).on_blur();
    assert!(form.state().is_touched(NICKNAME));
    assert!(form.errors().is_empty());
}

#[test]
fn blur_validates_touched_fields_in_on_blur_mode() {
    let mut form = controller(ValidationMode::OnBlur);
    form.bind(NICKNAME).on_change("Ad");
    assert!(form.errors().is_empty());
    form.bind(NICKNAME).on_blur();
    assert_eq!(
        form.error(NICKNAME),
        Some("Nickname must be at least 3 characters")
    );
    // Untouched fields stay quiet until blurred or submitted.
    assert_eq!(form.error(CONFIRM), None);
}

#[test]
fn rejected_submit_skips_handler_and_touches_fields() {
    let mut form = controller(ValidationMode::OnSubmit);
    let calls = recording(&mut form);

    let result = form.submit();
    match result {
        SubmissionResult::Rejected(errors) => {
            assert_eq!(errors.get(NICKNAME), Some("Nickname is required"));
            assert!(!errors.contains(CONFIRM));
        }
        SubmissionResult::Accepted(_) => panic!("empty form must be rejected"),
    }
    assert!(calls.borrow().is_empty());
    assert_eq!(form.phase(), FormPhase::Rejected);
    assert!(form.state().is_touched(NICKNAME));
    assert!(form.state().is_touched(CONFIRM));
    assert_eq!(form.submit_count(), 1);
}

#[test]
fn accepted_submit_calls_handler_once() {
    let mut form = controller(ValidationMode::OnSubmit);
    let calls = recording(&mut form);
    form.bind(NICKNAME).on_change("Ada");
    form.bind(CONFIRM).on_change("Ada");

    let result = form.submit();
    let expected = Profile {
        nickname: "Ada".to_string(),
        confirm: "Ada".to_string(),
    };
    assert_eq!(result, SubmissionResult::Accepted(expected.clone()));
    assert_eq!(*calls.borrow(), vec![expected]);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.errors().is_empty());
}

#[test]
fn submit_without_handler_still_accepts() {
    let mut form = controller(ValidationMode::OnSubmit);
    form.bind(NICKNAME).on_change("Ada");
    form.bind(CONFIRM).on_change("Ada");
    assert!(matches!(form.submit(), SubmissionResult::Accepted(_)));
}

#[test]
fn change_after_rejection_revalidates() {
    let mut form = controller(ValidationMode::OnSubmit);
    form.bind(NICKNAME).on_change("Ad");
    form.bind(CONFIRM).on_change("Ad");
    assert!(matches!(form.submit(), SubmissionResult::Rejected(_)));
    assert!(form.error(NICKNAME).is_some());

    form.bind(NICKNAME).push_char('a');
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.error(NICKNAME), None);
    // The sibling changed, so the cross-field rule now fails.
    assert_eq!(form.error(CONFIRM), Some("Nicknames must match"));

    form.bind(CONFIRM).push_char('a');
    assert!(form.errors().is_empty());
    assert!(matches!(form.submit(), SubmissionResult::Accepted(_)));
}

#[test]
fn reset_clears_everything() {
    let mut form = controller(ValidationMode::OnSubmit);
    form.bind(NICKNAME).on_change("A");
    let _ = form.submit();
    form.reset();
    assert_eq!(form.value(NICKNAME), "");
    assert!(!form.state().is_touched(NICKNAME));
    assert!(form.errors().is_empty());
    assert_eq!(form.submit_count(), 0);
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn form_handle_routes_through_bindings() {
    let mut form = controller(ValidationMode::OnSubmit);
    let handle: &mut dyn FormHandle = &mut form;
    for c in "Ada".chars() {
        handle.push_char(NICKNAME, c);
    }
    handle.pop_char(NICKNAME);
    handle.blur(NICKNAME);
    assert_eq!(handle.value(NICKNAME), "Ad");
    assert!(handle.is_touched(NICKNAME));
    assert_eq!(handle.fields().len(), 2);
    assert_eq!(
        handle.submit(),
        SubmitOutcome::Rejected { invalid_fields: 2 }
    );
    handle.reset();
    assert_eq!(handle.value(NICKNAME), "");
}
