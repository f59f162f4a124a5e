use project_records_inquiry::{
    Composer, InquiryForm, InvalidFields, decode_uri_component, encode_uri_component,
};

const RECIPIENT: &str = "tom@project-records.com";

fn form(name: &str, email: &str, project_type: &str, message: &str) -> InquiryForm {
    InquiryForm {
        name: name.to_owned(),
        email: email.to_owned(),
        project_type: project_type.to_owned(),
        message: message.to_owned(),
    }
}

fn split_mailto(uri: &str) -> (&str, &str, &str) {
    let rest = uri.strip_prefix("mailto:").expect("mailto scheme");
    let (recipient, query) = rest.split_once('?').expect("query");
    let (subject, body) = query.split_once('&').expect("two params");
    let subject = subject.strip_prefix("subject=").expect("subject param");
    let body = body.strip_prefix("body=").expect("body param");

    (recipient, subject, body)
}

#[test]
fn test_scenario_jane_doe() {
    let composer = Composer::new(RECIPIENT);
    let email = composer
        .submit(
            &form(
                "Jane Doe",
                "jane@example.com",
                "Mixing",
                "Need a 3-song EP mixed by March.",
            ),
            &[],
        )
        .expect("valid form");

    let uri = email.mailto_uri();
    let (recipient, subject, body) = split_mailto(&uri);

    assert_eq!(recipient, RECIPIENT);
    assert_eq!(
        decode_uri_component(subject).as_deref(),
        Some("Session inquiry – Jane Doe")
    );

    let body = decode_uri_component(body).expect("utf-8 body");
    let lines: Vec<&str> = body.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "Name: Jane Doe",
            "Email: jane@example.com",
            "Type: Mixing",
            "",
            "Message:",
            "Need a 3-song EP mixed by March.",
        ]
    );
}

#[test]
fn test_round_trip_recovers_template_text() {
    let composer = Composer::new(RECIPIENT);
    let samples = [
        form("Ana & Bo", "ana+bo@example.com", "Recording", "a=b?c#d"),
        form("Zoë O'Neil", "zoe@example.com", "", "Line one\nLine two\r\n\ttabbed"),
        form("100% Crew", "crew@example.com", "Mastering (stems)", "😀 emoji *bold*"),
        form("Plain", "p@example.com", "Other", ""),
    ];

    for fields in samples {
        let email = composer.compose(&fields);
        let uri = email.mailto_uri();
        let (_, subject, body) = split_mailto(&uri);

        assert_eq!(
            decode_uri_component(subject).as_deref(),
            Some(format!("Session inquiry – {}", fields.name).as_str())
        );
        assert_eq!(
            decode_uri_component(body).as_deref(),
            Some(
                format!(
                    "Name: {}\nEmail: {}\nType: {}\n\nMessage:\n{}",
                    fields.name, fields.email, fields.project_type, fields.message
                )
                .as_str()
            )
        );
    }
}

#[test]
fn test_subject_is_prefix_plus_encoded_name() {
    let composer = Composer::new(RECIPIENT);

    for name in ["Jane Doe", "Ana & Bo", "Zoë", "a/b?c"] {
        let email = composer.compose(&form(name, "x@example.com", "", ""));
        assert_eq!(
            email.encoded_subject(),
            format!(
                "{}{}",
                encode_uri_component("Session inquiry – "),
                encode_uri_component(name)
            )
        );
    }
}

#[test]
fn test_body_contains_every_encoded_value() {
    let fields = form("Ana & Bo", "ana+bo@example.com", "Live/Session", "Hi?");
    let email = Composer::new(RECIPIENT).compose(&fields);
    let body = email.encoded_body();

    for value in [
        &fields.name,
        &fields.email,
        &fields.project_type,
        &fields.message,
    ] {
        assert!(body.contains(&encode_uri_component(value)), "{value}");
    }
}

#[test]
fn test_empty_message_keeps_message_section() {
    let email = Composer::new(RECIPIENT).compose(&form("Jane", "jane@example.com", "", ""));

    assert!(email.encoded_body().ends_with("Message%3A%0A"));
}

#[test]
fn test_invalid_form_is_never_composed() {
    let composer = Composer::new(RECIPIENT);

    let err = composer
        .submit(&form("", "", "", "hello"), &[])
        .expect_err("missing required fields");
    let invalid = InvalidFields::from(&err);

    assert!(invalid.name);
    assert!(invalid.email);
    assert!(invalid.any());
}
