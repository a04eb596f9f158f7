//! Interactive confirmation seam used before destructive actions.

/// Prompt shown before an article is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this article?";

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
