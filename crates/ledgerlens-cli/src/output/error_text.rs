use ledgerlens_engine::EngineError;

pub fn render_error(error: &EngineError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use ledgerlens_engine::EngineError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = EngineError::invalid_argument_with_recovery(
            "bad input",
            vec!["run ledgerlens --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Something went wrong, but it's easy to fix."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run ledgerlens --help"));
    }

    #[test]
    fn empty_recovery_steps_fall_back_to_retry() {
        let error = EngineError::new("statement_unreadable", "boom", Vec::new());
        let rendered = render_error(&error);
        assert!(rendered.contains("  1. Retry the command."));
    }
}
