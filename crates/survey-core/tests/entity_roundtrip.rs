//! Serde roundtrip and JsonSchema validation tests for the wire types.

use chrono::Utc;
use schemars::schema_for;
use survey_core::entities::*;
use survey_core::enums::QuestionType;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn color_question() -> Question {
    Question {
        id: "qst-a3f8b2c1".into(),
        question_text: "Color?".into(),
        question_type: Some(QuestionType::MultipleChoice),
        options: vec!["Red".into(), "Blue".into()],
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(question_roundtrip, Question, color_question());

roundtrip_and_validate!(
    question_without_type_roundtrip,
    Question,
    Question {
        question_type: None,
        options: vec![],
        ..color_question()
    }
);

roundtrip_and_validate!(
    question_with_unknown_type_roundtrip,
    Question,
    Question {
        question_type: Some(QuestionType::Other("rating".into())),
        ..color_question()
    }
);

roundtrip_and_validate!(
    new_question_roundtrip,
    NewQuestion,
    NewQuestion::new("Why?", "feedback", Vec::<String>::new())
);

roundtrip_and_validate!(
    survey_roundtrip,
    Survey,
    Survey {
        id: "srv-0badf00d".into(),
        title: "T".into(),
        description: "D".into(),
        questions: vec![
            SurveyQuestion::new("qst-a3f8b2c1"),
            SurveyQuestion::when("qst-b4c5d6e7", "qst-a3f8b2c1", "Red"),
        ],
        link: "/survey/srv-0badf00d".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    populated_survey_roundtrip,
    PopulatedSurvey,
    Survey {
        id: "srv-0badf00d".into(),
        title: "T".into(),
        description: "D".into(),
        questions: vec![
            SurveyQuestion {
                question: Some(color_question()),
                condition: None,
            },
            SurveyQuestion {
                question: None,
                condition: Some(Condition {
                    field: Some("qst-a3f8b2c1".into()),
                    value: Some("Red".into()),
                }),
            },
        ],
        link: "/survey/srv-0badf00d".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_survey_roundtrip,
    NewSurvey,
    NewSurvey {
        title: "T".into(),
        description: "D".into(),
        questions: vec![SurveyQuestion::new("qst-a3f8b2c1")],
    }
);

#[test]
fn question_uses_wire_field_names() {
    let json = serde_json::to_value(color_question()).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["_id", "questionText", "questionType", "options", "createdAt"] {
        assert!(obj.contains_key(key), "missing key '{key}' in {json}");
    }
    assert_eq!(json["questionType"], "multiple-choice");
}

#[test]
fn new_question_from_wire_payload() {
    let payload: NewQuestion = serde_json::from_str(
        r#"{"questionText":"Color?","questionType":"multiple-choice","options":["Red","Blue"]}"#,
    )
    .unwrap();
    assert_eq!(payload.question_text, "Color?");
    assert_eq!(payload.question_type, Some(QuestionType::MultipleChoice));
    assert_eq!(payload.options, vec!["Red", "Blue"]);
}
