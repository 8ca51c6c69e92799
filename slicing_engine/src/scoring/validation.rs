//! Keyword matching between authored stories and a level's expected stories.
//!
//! The check is deliberately crude: a story passes when any word longer than three
//! characters from any expected story's action shows up anywhere in the story's
//! sentence, as a plain substring. Short words never count; common long words do.

use slicing_catalog::UserStory;

use crate::session::CreatedStory;

/// Feedback attached to a story that passed validation.
pub const VALID_FEEDBACK: &str = "¡Excelente historia!";

/// Feedback attached to a story that did not.
pub const INVALID_FEEDBACK: &str = "Esta historia podría mejorarse";

/// Words of this many characters or fewer are ignored as keywords.
const MAX_IGNORED_KEYWORD_LEN: usize = 3;

/// The lowercase sentence a story is matched against.
pub fn story_sentence(role: &str, action: &str, benefit: &str) -> String {
    format!("Como {role} quiero {action} para {benefit}").to_lowercase()
}

/// Lowercased words of an expected action that are long enough to act as keywords.
pub fn action_keywords(action: &str) -> Vec<String> {
    action
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > MAX_IGNORED_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

/// True if any keyword of any expected story appears in the sentence.
pub fn matches_expected(sentence: &str, expected: &[UserStory]) -> bool {
    expected.iter().any(|story| {
        action_keywords(&story.action)
            .iter()
            .any(|keyword| sentence.contains(keyword.as_str()))
    })
}

/// Annotate every story with its verdict and feedback.
///
/// Returns the annotated list and how many passed. Two stories matching the same
/// expected story both count.
pub fn validate_stories(
    stories: &[CreatedStory],
    expected: &[UserStory],
) -> (Vec<CreatedStory>, usize) {
    let mut correct = 0;
    let validated = stories
        .iter()
        .map(|story| {
            let sentence = story_sentence(&story.role, &story.action, &story.benefit);
            let is_valid = matches_expected(&sentence, expected);
            if is_valid {
                correct += 1;
            }
            let feedback = if is_valid {
                VALID_FEEDBACK
            } else {
                INVALID_FEEDBACK
            };
            CreatedStory {
                is_valid: Some(is_valid),
                feedback: Some(feedback.to_string()),
                ..story.clone()
            }
        })
        .collect();
    (validated, correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StoryDraft;

    fn expected(action: &str) -> UserStory {
        UserStory::new("s", "text", "administrador", action, "para algo")
    }

    fn created(role: &str, action: &str, benefit: &str) -> CreatedStory {
        CreatedStory::from_draft(StoryDraft::new(role, action, benefit))
    }

    #[test]
    fn test_sentence_is_folded() {
        assert_eq!(
            story_sentence("Administrador", "Crear Usuarios", "dar ACCESO"),
            "como administrador quiero crear usuarios para dar acceso"
        );
    }

    #[test]
    fn test_keywords_drop_short_words() {
        assert_eq!(
            action_keywords("ver la lista de usuarios"),
            vec!["lista".to_string(), "usuarios".to_string()]
        );
        assert!(action_keywords("ver la red").is_empty());
    }

    #[test]
    fn test_keyword_length_counts_characters() {
        // "envío" is five characters even though it is six bytes.
        assert_eq!(action_keywords("de envío"), vec!["envío".to_string()]);
        assert!(action_keywords("más").is_empty());
    }

    #[test]
    fn test_match_is_substring_anywhere_in_sentence() {
        let level = [expected("crear nuevos usuarios")];
        // Keyword found in the benefit, not the action.
        let sentence = story_sentence("admin", "algo", "gestionar usuarios");
        assert!(matches_expected(&sentence, &level));
        // Keyword found inside a longer word.
        let sentence = story_sentence("admin", "recrear", "x");
        assert!(matches_expected(&sentence, &level));
    }

    #[test]
    fn test_no_match_when_only_short_words_overlap() {
        let level = [expected("ver la red")];
        let sentence = story_sentence("usuario", "ver la red", "x");
        assert!(!matches_expected(&sentence, &level));
    }

    #[test]
    fn test_validate_stories_annotates_and_counts_duplicates() {
        let level = [expected("crear nuevos usuarios"), expected("eliminar usuarios")];
        let stories = vec![
            created("administrador", "crear nuevos usuarios", "dar acceso"),
            created("administrador", "crear cuentas de usuarios", "dar acceso"),
            created("jefe", "ver", "nada"),
        ];

        let (validated, correct) = validate_stories(&stories, &level);

        assert_eq!(correct, 2);
        assert_eq!(validated.len(), 3);
        assert_eq!(validated[0].id, stories[0].id);
        assert_eq!(validated[0].is_valid, Some(true));
        assert_eq!(validated[0].feedback.as_deref(), Some(VALID_FEEDBACK));
        assert_eq!(validated[1].is_valid, Some(true));
        assert_eq!(validated[2].is_valid, Some(false));
        assert_eq!(validated[2].feedback.as_deref(), Some(INVALID_FEEDBACK));
    }

    #[test]
    fn test_template_words_can_match() {
        // The connective "quiero" is part of the sentence, so an expected action
        // containing it matches any story.
        let level = [expected("quiero algo")];
        let sentence = story_sentence("x", "y", "z");
        assert!(matches_expected(&sentence, &level));
    }
}
