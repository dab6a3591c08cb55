//! Console listing of a user's mood history.

use crate::journal_core::User;

/// Renders `user`'s history as shown by the "View Mood history" menu option.
///
/// Entries are listed one per line in store order under a
/// `<name>'s Mood History:` header. An empty history renders as
/// `No entries found.`.
pub fn render_history(user: &User) -> String {
    let history = user.get_history();
    if history.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut out = format!("\n{}'s Mood History:\n", user.name);
    for entry in history {
        out.push_str(&format!(
            "Date: {}, Description: {}, Mood: {} (Score: {})\n",
            entry.date_key(),
            entry.description,
            entry.mood,
            entry.score()
        ));
    }
    out
}
