//! Pretty output formatting.

use crate::commands::Canonical;

/// Format a decoded value for display.
pub fn format_canonical(canonical: &Canonical) -> String {
    let status = if canonical.changed {
        "rewritten"
    } else {
        "already canonical"
    };
    let mut output = format!(
        "{} ({})\n  Input: {}\n  Canonical: {}",
        canonical.codec, status, canonical.input, canonical.canonical
    );
    for (label, value) in &canonical.details {
        output.push_str(&format!("\n  {label}: {value}"));
    }
    output
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::output::format_output;

    fn decode(args: &[&str]) -> Canonical {
        let mut argv = vec!["dynamarshal"];
        argv.extend_from_slice(args);
        crate::run(&Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_format_canonical() {
        let canonical = decode(&["string-set", r#"["b","a"]"#]);

        assert_eq!(
            format_canonical(&canonical),
            "string-set (rewritten)\n  Input: [\"b\",\"a\"]\n  Canonical: [\"a\",\"b\"]\n  members: 2"
        );
    }

    #[test]
    fn test_format_json_output() {
        let canonical = decode(&["epoch-millis", "0"]);
        let output = format_output(&canonical, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["codec"], "epoch-millis");
        assert_eq!(parsed["canonical"], 0);
        assert_eq!(parsed["changed"], false);
        assert_eq!(parsed["details"]["utc"], "1970-01-01T00:00:00.000Z");
    }
}
