//! Sanitizing catalog-provided text before it reaches the terminal.
//!
//! Set names, part names and colors come from a remote catalog and end up printed
//! verbatim by the CLI. Escape sequences in that text could clear the screen or
//! restyle output, so everything printed goes through [`sanitize_line`].

/// Strips ANSI CSI escape sequences and control characters from one display line
///
/// Newlines, tabs and carriage returns become single spaces so one catalog field
/// never breaks a table row.
///
/// # Examples
///
/// ```
/// use brick_tracker::utils::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mBrick 2 x 4\x1b[0m"), "Brick 2 x 4");
/// assert_eq!(sanitize_line("Sticker\nSheet"), "Sticker Sheet");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ params final-letter
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if matches!(ch, '\n' | '\r' | '\t') {
            result.push(' ');
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and cut to at most `max_chars` characters, marking the cut with `…`
pub fn truncate_line(text: &str, max_chars: usize) -> String {
    let clean = sanitize_line(text);
    if clean.chars().count() <= max_chars {
        return clean;
    }
    let mut cut: String = clean.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
