//! Inline code to bold marker rewriting.
//!
//! Scans documentation text once, left to right, and rewrites backtick
//! markers. Inline code spans become bold emphasis, fenced code blocks keep
//! their content verbatim and only have their fence delimiters normalized.
//!
//! Fence normalization is asymmetric: an opening fence is shortened to two
//! backticks while a closing fence keeps three.

const BACKTICK: u8 = b'`';

/// Length of a fence delimiter run.
const FENCE_LEN: usize = 3;

/// Marker emitted for a fence that enters a code block.
const OPENING_FENCE: &str = "``";

/// Marker emitted for a fence that leaves a code block.
const CLOSING_FENCE: &str = "```";

/// Bold marker replacing a lone inline code backtick.
const BOLD: &str = "**";

/// Scanner state, switched only by fence delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Outside any fenced code block
    #[default]
    Prose,
    /// Inside a fenced code block
    Fenced,
}

impl Mode {
    fn toggled(self) -> Self {
        match self {
            Self::Prose => Self::Fenced,
            Self::Fenced => Self::Prose,
        }
    }
}

/// Result of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Rewritten text
    pub text: String,
    /// Scanner mode after the last input character
    pub final_mode: Mode,
}

impl Rewrite {
    /// Returns true when every opened fence was closed again.
    pub fn is_balanced(&self) -> bool {
        self.final_mode == Mode::Prose
    }
}

/// Rewrites inline code markers to bold and normalizes fence delimiters.
///
/// Never fails. Unbalanced backticks and unterminated fences produce a
/// best effort result; use [`rewrite`] to find out whether the scan ended
/// inside a fence.
///
/// # Examples
///
/// ```
/// use docprep::rewrite_markers;
///
/// assert_eq!(rewrite_markers("Use `go` keyword"), "Use **go** keyword");
/// assert_eq!(rewrite_markers("```code```"), "``code```");
/// ```
pub fn rewrite_markers(input: &str) -> String {
    rewrite(input).text
}

/// Rewrites markers and reports the scanner mode at end of input.
///
/// Classification of a backtick at the cursor, in order:
/// 1. Three backticks starting here form a fence delimiter and toggle the mode
/// 2. A backtick next to another backtick in the input is a span boundary,
///    dropped in prose and kept inside a fence
/// 3. A lone backtick becomes `**` in prose and is kept inside a fence
///
/// Neighbours are always looked up in the input, never in the output.
pub fn rewrite(input: &str) -> Rewrite {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len() + input.len() / 8);
    let mut mode = Mode::Prose;

    // Start of the pending run of non-backtick text. Backtick is ASCII, so
    // every cursor position holding one is a char boundary.
    let mut pending = 0;
    let mut cursor = 0;

    while cursor < bytes.len() {
        if bytes[cursor] != BACKTICK {
            cursor += 1;
            continue;
        }

        output.push_str(&input[pending..cursor]);

        if is_fence_at(bytes, cursor) {
            mode = mode.toggled();
            output.push_str(match mode {
                Mode::Fenced => OPENING_FENCE,
                Mode::Prose => CLOSING_FENCE,
            });
            cursor += FENCE_LEN;
        } else {
            let prev = cursor > 0 && bytes[cursor - 1] == BACKTICK;
            let next = !prev && bytes.get(cursor + 1) == Some(&BACKTICK);

            match (prev || next, mode) {
                (true, Mode::Prose) => {}
                (false, Mode::Prose) => output.push_str(BOLD),
                (_, Mode::Fenced) => output.push('`'),
            }
            cursor += 1;
        }

        pending = cursor;
    }

    output.push_str(&input[pending..]);

    Rewrite {
        text: output,
        final_mode: mode,
    }
}

fn is_fence_at(bytes: &[u8], cursor: usize) -> bool {
    bytes
        .get(cursor..cursor + FENCE_LEN)
        .is_some_and(|run| run.iter().all(|&b| b == BACKTICK))
}
