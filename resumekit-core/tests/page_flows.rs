use resumekit_core::{
    EditMode, FormEditToggle, PASSWORD_RULES, PasswordReveal, PreviewTracker, RevealTransition,
    SignupFailure, SignupFields, validate_signup,
};

fn fields<'a>(name: &'a str, email: &'a str, pw: &'a str, confirm: &'a str) -> SignupFields<'a> {
    SignupFields {
        name,
        email,
        password: pw,
        confirm,
    }
}

#[test]
fn documented_signup_examples() {
    assert!(validate_signup(&fields("Ann", "a@b.c", "Abcdef1!", "Abcdef1!")).is_ok());

    let err = validate_signup(&fields("Ann", "a@b.c", "abcdef1!", "abcdef1!")).unwrap_err();
    assert_eq!(err.message(), "Password needs an uppercase letter");

    let err = validate_signup(&fields("Al", "a@b.c", "Abcdef1!", "Abcdef1!")).unwrap_err();
    assert_eq!(err, SignupFailure::NameTooShort);

    let err = validate_signup(&fields("Ann", "a@b.c", "Abcdef1!", "Abcdef1@")).unwrap_err();
    assert_eq!(err.message(), "Passwords must match");
}

#[test]
fn each_password_rule_yields_its_own_message() {
    let cases = [
        ("Ab1!", "length"),
        ("abcdef1!", "uppercase"),
        ("ABCDEF1!", "lowercase"),
        ("Abcdefg!", "digit"),
        ("Abcdefg1", "special"),
    ];
    for (password, rule_name) in cases {
        let err = validate_signup(&fields("Ann", "a@b.c", password, password)).unwrap_err();
        let rule = PASSWORD_RULES
            .iter()
            .find(|r| r.name == rule_name)
            .expect("rule exists");
        assert_eq!(err, SignupFailure::Password(rule), "password {password:?}");
    }
}

#[test]
fn rapid_reveal_clicks_leave_only_latest_timer_live() {
    let mut field = PasswordReveal::new();
    let mut sessions = Vec::new();
    for _ in 0..3 {
        if let RevealTransition::Revealed(session) = field.toggle() {
            sessions.push(session);
        }
        field.toggle();
    }
    let RevealTransition::Revealed(live) = field.toggle() else {
        panic!("fourth click should reveal");
    };
    for stale in &sessions {
        assert!(!field.timer_fired(*stale));
    }
    assert!(!field.is_masked());
    assert!(field.timer_fired(live));
    assert!(field.is_masked());
}

#[test]
fn edit_toggle_never_reaches_partial_state() {
    let mut toggle = FormEditToggle::new();
    for step in 0..6 {
        let access = if step % 2 == 0 {
            toggle.edit()
        } else {
            toggle.save()
        }
        .expect("alternating clicks always transition");
        assert_eq!(access.fields_disabled, access.save_disabled);
        assert_ne!(access.edit_disabled, access.save_disabled);
    }
    assert_eq!(toggle.mode(), EditMode::ReadOnly);
}

#[test]
fn preview_reset_then_new_selection_displays() {
    let mut tracker = PreviewTracker::new();
    let stale = tracker.select();
    tracker.reset();
    let fresh = tracker.select();
    assert!(tracker.complete(fresh));
    assert!(!tracker.complete(stale));
}
