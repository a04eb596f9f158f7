use tabloid_view::Confirm;

use crate::ui;

/// Terminal yes/no prompt. Defaults to "no"; a prompt that cannot be shown
/// counts as a refusal.
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if !ui::prefs().interactive {
            tracing::warn!("cannot prompt for confirmation without a terminal; pass --yes");
            return false;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "confirmation prompt failed");
                false
            })
    }
}
