//! Additive line merge for ignore-list files such as `.gitignore`.

/// What to do with an ignore-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreUpdate {
    /// File is absent; write this content.
    Create(String),
    /// File exists but lacks some tokens; replace it with this content.
    Append(String),
    /// Every token is already mentioned.
    Unchanged,
}

/// Decide how an ignore list must change so it mentions every token.
///
/// A token counts as present when it appears anywhere in the file, so
/// `node_modules/` and `/node_modules` both satisfy `node_modules`. Missing
/// tokens are appended as directory patterns (`\n<token>/`).
pub fn merge_ignore_lines<S: AsRef<str>>(existing: Option<&str>, tokens: &[S]) -> IgnoreUpdate {
    let Some(existing) = existing else {
        let lines: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        return IgnoreUpdate::Create(lines.join("\n"));
    };

    let mut content = existing.to_owned();
    let mut changed = false;
    for token in tokens.iter().map(AsRef::as_ref) {
        if !content.contains(token) {
            content.push('\n');
            content.push_str(token);
            content.push('/');
            changed = true;
        }
    }

    if changed {
        IgnoreUpdate::Append(content)
    } else {
        IgnoreUpdate::Unchanged
    }
}
