//! Prompt text sent to the language model.

/// JSON shape the model must answer with
const RESPONSE_SCHEMA: &str = r#"{
  "correctedDocument": "string - the full document with grammar, spelling and rule violations fixed",
  "errors": [
    {
      "message": "string - what is wrong and how to fix it",
      "line": "integer - 1-indexed line number in the ORIGINAL document",
      "start": "integer - 0-indexed character offset of the error within that line",
      "end": "integer - exclusive character offset of the end of the error within that line",
      "ruleId": "string - id of the Vale rule that triggered the error, or Grammar/Spelling"
    }
  ]
}"#;

/// Build the system prompt: editor role, task and the exact response schema.
pub fn build_system_prompt() -> String {
    format!(
        "You are a sophisticated AI-powered editor that reviews documents for grammar, \
spelling, and style.

You will receive the content of a document and a set of custom Vale rules. \
Correct any grammar and spelling errors in the document while making sure it \
adheres to the provided Vale rules.

Return the corrected document along with a list of every error found in the \
original document. Line numbers and character offsets must refer to the \
original document, not the corrected one. Offsets count characters, not bytes.

Respond with a single JSON object and nothing else, matching this shape:
{RESPONSE_SCHEMA}"
    )
}

/// JSON shape of a writing-suggestions answer
const SUGGESTIONS_SCHEMA: &str = r#"{
  "suggestions": ["string - one specific, actionable suggestion"]
}"#;

/// System prompt for writing suggestions beyond grammar and spelling
pub fn build_suggestions_system_prompt() -> String {
    format!(
        "You are an AI writing assistant. Your task is to provide suggestions for \
improving the quality of the given document.

Give specific and actionable suggestions for improving clarity, conciseness, and \
overall quality. Focus on aspects beyond basic grammar and spelling.

Respond with a single JSON object and nothing else, matching this shape:
{SUGGESTIONS_SCHEMA}"
    )
}

/// User message for a writing-suggestions request
pub fn build_suggestions_user_message(document_content: &str) -> String {
    format!("Document Content:\n<<<DOCUMENT\n{document_content}\nDOCUMENT>>>")
}

/// Build the user message carrying the document and the effective rules.
pub fn build_user_message(document_content: &str, rules: &str) -> String {
    format!(
        "Document Content:\n<<<DOCUMENT\n{document_content}\nDOCUMENT>>>\n\n\
Vale Rules:\n<<<RULES\n{rules}\nRULES>>>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_describes_every_field() {
        let prompt = build_system_prompt();
        for field in ["correctedDocument", "errors", "message", "line", "start", "end", "ruleId"] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_user_message_contains_document_and_rules() {
        let message = build_user_message("Teh cat sat.", "extends: spelling");
        assert!(message.contains("<<<DOCUMENT\nTeh cat sat.\nDOCUMENT>>>"));
        assert!(message.contains("<<<RULES\nextends: spelling\nRULES>>>"));
        assert!(message.find("DOCUMENT").unwrap() < message.find("RULES").unwrap());
    }

    #[test]
    fn test_user_message_keeps_empty_rules_block() {
        let message = build_user_message("Text", "");
        assert!(message.contains("<<<RULES\n\nRULES>>>"));
    }

    #[test]
    fn test_suggestions_prompt_names_schema() {
        let prompt = build_suggestions_system_prompt();
        assert!(prompt.contains("\"suggestions\""));
        assert!(prompt.contains("beyond basic grammar and spelling"));

        let message = build_suggestions_user_message("Draft text");
        assert!(message.contains("<<<DOCUMENT\nDraft text\nDOCUMENT>>>"));
        assert!(!message.contains("RULES"));
    }
}
