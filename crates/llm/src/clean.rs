/// Role labels small models like to echo back at the start of a reply.
const ROLE_PREFIXES: &[&str] = &["Pale Luna:", "Response:"];

/// Strip conversational artifacts from raw model output.
///
/// Removes a leading `Pale Luna:` and then a leading `Response:` label, then
/// surrounding `*` emphasis markers, trimming whitespace after each step.
pub fn clean_response(raw: &str) -> String {
    let mut text = raw.trim();
    for prefix in ROLE_PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest.trim();
        }
    }
    text.trim_start_matches('*')
        .trim_end_matches('*')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_role_label_and_emphasis() {
        assert_eq!(
            clean_response("Pale Luna: *The soil remembers.*"),
            "The soil remembers."
        );
    }

    #[test]
    fn strips_both_labels_in_order() {
        assert_eq!(
            clean_response("Pale Luna: Response:  Dig deeper."),
            "Dig deeper."
        );
    }

    #[test]
    fn response_label_alone() {
        assert_eq!(clean_response("Response: east."), "east.");
    }

    #[test]
    fn leaves_inner_text_alone() {
        assert_eq!(
            clean_response("The rope, the *shovel*, the gold."),
            "The rope, the *shovel*, the gold."
        );
    }

    #[test]
    fn bold_markers_removed() {
        assert_eq!(clean_response("  **Silence.**\n"), "Silence.");
    }

    #[test]
    fn artifacts_only_becomes_empty() {
        assert_eq!(clean_response("Pale Luna: **"), "");
        assert_eq!(clean_response("   "), "");
    }
}
