//! Post actions and their user-facing messages.

use crate::core::validation::FormIntent;

/// Mutations a user can trigger on posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostAction {
    /// Publish a new post.
    Create,
    /// Save changes to an existing post.
    Update {
        /// Post identifier.
        id: String,
    },
    /// Remove a post.
    Delete {
        /// Post identifier.
        id: String,
    },
}

/// Toast text after the action succeeded.
#[must_use]
pub fn success_message(action: &PostAction, title: &str) -> String {
    match action {
        PostAction::Create => format!("Post \"{title}\" created"),
        PostAction::Update { .. } => format!("Post \"{title}\" updated"),
        PostAction::Delete { .. } => format!("Post \"{title}\" deleted"),
    }
}

/// Fallback text when the backend rejects the action without a message.
#[must_use]
pub const fn failure_fallback(action: &PostAction) -> &'static str {
    match action {
        PostAction::Create => FormIntent::Create.fallback_message(),
        PostAction::Update { .. } => FormIntent::Update.fallback_message(),
        PostAction::Delete { .. } => "Failed to delete post. Please try again.",
    }
}

/// Confirmation prompt shown before deleting.
#[must_use]
pub fn delete_prompt(title: &str) -> String {
    format!("Delete \"{title}\"? This cannot be undone.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_switch_on_action() {
        let delete = PostAction::Delete { id: "1".into() };
        assert_eq!(success_message(&PostAction::Create, "Hi"), "Post \"Hi\" created");
        assert_eq!(
            success_message(&PostAction::Update { id: "1".into() }, "Hi"),
            "Post \"Hi\" updated"
        );
        assert_eq!(success_message(&delete, "Hi"), "Post \"Hi\" deleted");
        assert!(failure_fallback(&delete).starts_with("Failed to delete"));
        assert!(delete_prompt("Hi").contains("\"Hi\""));
    }
}
