use polita_core::parsing::labels::FIELD_RULES;

pub fn run(output_format: &str) -> Result<(), polita_core::error::PolitaError> {
    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(FIELD_RULES)?),
        _ => {
            for rule in FIELD_RULES {
                println!("=== {} ===", rule.field);
                println!("  labels:  {}", rule.labels.join(", "));
                println!("  window:  {} chars after the label", rule.window);
                println!("  pattern: {}", rule.pattern);
                println!();
            }
        }
    }

    Ok(())
}
