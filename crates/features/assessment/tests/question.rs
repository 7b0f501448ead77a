use qhub_assessment::{AssessmentError, ChoiceId, Question, QuestionLimits};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

#[test]
fn create_question() {
    init_tracing();
    let question = Question::new("q1").unwrap();

    assert!(!question.id().as_str().is_empty());
    assert_eq!(question.title(), "q1");
    assert_eq!(question.points(), 1);
    assert_eq!(question.max_selections(), 1);
    assert!(question.choices().is_empty());
}

#[test]
fn create_multiple_questions() {
    let first = Question::new("q1").unwrap();
    let second = Question::new("q2").unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn create_question_with_invalid_title() {
    for title in [String::new(), "a".repeat(201), "a".repeat(500)] {
        let err = Question::new(title).unwrap_err();
        assert!(matches!(err, AssessmentError::Validation { field: "title", .. }), "{err}");
    }
}

#[test]
fn title_bounds_are_inclusive() {
    assert!(Question::new("a").is_ok());
    assert!(Question::new("a".repeat(200)).is_ok());
}

#[test]
fn create_question_with_valid_points() {
    let question = Question::builder().title("q1").points(1).build().unwrap();
    assert_eq!(question.points(), 1);

    let question = Question::builder().title("q1").points(100).build().unwrap();
    assert_eq!(question.points(), 100);
}

#[test]
fn create_question_with_invalid_points() {
    for points in [0, 101] {
        let err = Question::builder().title("Test").points(points).build().unwrap_err();
        assert!(matches!(err, AssessmentError::Validation { field: "points", .. }), "{err}");
    }
}

#[test]
fn zero_max_selections_is_rejected() {
    let err = Question::builder().title("Test").max_selections(0).build().unwrap_err();
    assert!(matches!(err, AssessmentError::Validation { field: "max_selections", .. }));
}

#[test]
fn custom_limits_apply() {
    let limits = QuestionLimits { title_max_len: 5, points_max: 10, ..QuestionLimits::default() };

    assert!(Question::builder().title("short").limits(limits).build().is_ok());
    assert!(Question::builder().title("longer").limits(limits).build().is_err());
    assert!(Question::builder().title("q").points(11).limits(limits).build().is_err());

    let question = Question::builder().title("q").points(10).limits(limits).build().unwrap();
    assert_eq!(question.limits(), &limits);
}

#[test]
fn inconsistent_limits_are_rejected() {
    let limits = QuestionLimits { points_min: 0, ..QuestionLimits::default() };
    let err = Question::builder().title("q").limits(limits).build().unwrap_err();
    assert!(matches!(err, AssessmentError::Validation { field: "limits", .. }));
}

#[test]
fn limits_cannot_widen_canonical_bounds() {
    let wide = QuestionLimits {
        title_max_len: 1000,
        choice_text_max_len: 1000,
        points_max: 5000,
        ..QuestionLimits::default()
    };

    let err = Question::builder().title("a".repeat(300)).points(4000).limits(wide).build().unwrap_err();
    assert!(matches!(err, AssessmentError::Validation { field: "limits", .. }), "{err}");

    for limits in [
        QuestionLimits { title_max_len: 201, ..QuestionLimits::default() },
        QuestionLimits { choice_text_max_len: 101, ..QuestionLimits::default() },
        QuestionLimits { points_max: 101, ..QuestionLimits::default() },
    ] {
        assert!(Question::builder().title("q").limits(limits).build().unwrap_err().is_validation());
    }
}

#[test]
fn create_choice() {
    init_tracing();
    let mut question = Question::new("q1").unwrap();

    let returned = question.add_choice("a", false).unwrap().clone();

    assert_eq!(question.choices().len(), 1);
    let choice = &question.choices()[0];
    assert_eq!(choice.text(), "a");
    assert!(!choice.is_correct());
    assert_eq!(choice, &returned);
}

#[test]
fn create_choice_with_invalid_text() {
    let mut question = Question::new("Test").unwrap();

    for text in [String::new(), "a".repeat(120)] {
        let err = question.add_choice(text, false).unwrap_err();
        assert!(err.is_validation());
    }
    assert!(question.choices().is_empty());
}

#[test]
fn choices_keep_insertion_order_and_unique_ids() {
    let mut question = Question::new("Test").unwrap();
    for text in ["a", "b", "c", "d"] {
        question.add_choice(text, false).unwrap();
    }

    let texts: Vec<&str> = question.choices().iter().map(|c| c.text()).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);

    let mut ids: Vec<&ChoiceId> = question.choices().iter().map(|c| c.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn remove_valid_choice() {
    let mut question = Question::new("Test").unwrap();
    let id = question.add_choice("a", false).unwrap().id().clone();
    assert_eq!(question.choices().len(), 1);

    let removed = question.remove_choice_by_id(&id).unwrap();
    assert_eq!(removed.text(), "a");
    assert!(question.choices().is_empty());
}

#[test]
fn remove_keeps_relative_order() {
    let mut question = Question::new("Test").unwrap();
    question.add_choice("a", false).unwrap();
    let b = question.add_choice("b", false).unwrap().id().clone();
    question.add_choice("c", false).unwrap();

    question.remove_choice_by_id(&b).unwrap();
    let texts: Vec<&str> = question.choices().iter().map(|c| c.text()).collect();
    assert_eq!(texts, ["a", "c"]);
}

#[test]
fn remove_invalid_choice() {
    let mut question = Question::new("Test").unwrap();
    question.add_choice("a", false).unwrap();
    let before = question.choices().to_vec();

    let err = question.remove_choice_by_id(&ChoiceId::from("invalid_id")).unwrap_err();
    assert!(matches!(&err, AssessmentError::ChoiceNotFound { id, .. } if id.as_str() == "invalid_id"));
    assert_eq!(question.choices(), before);
}

#[test]
fn remove_all_choices() {
    let mut question = Question::new("Test").unwrap();
    question.add_choice("a", false).unwrap();
    question.add_choice("b", false).unwrap();
    assert_eq!(question.choices().len(), 2);

    question.remove_all_choices();
    assert!(question.choices().is_empty());

    question.remove_all_choices();
    assert!(question.choices().is_empty());
}

#[test]
fn serializes_public_fields_only() {
    let mut question = Question::builder().title("q1").points(3).build().unwrap();
    question.add_choice("a", true).unwrap();

    let value = serde_json::to_value(&question).unwrap();
    assert_eq!(value["title"], "q1");
    assert_eq!(value["points"], 3);
    assert_eq!(value["maxSelections"], 1);
    assert_eq!(value["id"], question.id().as_str());
    assert_eq!(value["choices"][0]["text"], "a");
    assert_eq!(value["choices"][0]["isCorrect"], true);
    assert!(value.get("limits").is_none());
}

#[test]
fn errors_render_field_and_context() {
    use qhub_assessment::AssessmentErrorExt;

    let err = Question::new("").context("Importing quiz").unwrap_err();
    assert_eq!(err.to_string(), "Invalid title (Importing quiz): must not be empty");
}
