use crate::{MigrateError, Prompter, ScriptedAnswer, ScriptedPrompter};

fn choices() -> Vec<String> {
    vec!["a".to_string(), "b".to_string()]
}

#[tokio::test]
async fn given_empty_script_when_prompted_then_defaults_used() {
    let prompter = ScriptedPrompter::default();

    assert_eq!(prompter.select("pick", &choices(), 1).await.unwrap(), 1);
    assert!(prompter.confirm("sure?", true).await.unwrap());
    assert_eq!(prompter.text("name", Some("x")).await.unwrap(), "x");
    assert_eq!(prompter.asked().len(), 3);
}

#[tokio::test]
async fn given_text_without_default_when_script_empty_then_cancelled() {
    let prompter = ScriptedPrompter::default();

    let err = prompter.text("token", None).await.unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn given_out_of_range_answer_when_select_then_configuration_error() {
    let prompter = ScriptedPrompter::new([ScriptedAnswer::Select(5)]);

    let err = prompter.select("pick", &choices(), 0).await.unwrap_err();

    assert!(matches!(err, MigrateError::Configuration { .. }));
}
