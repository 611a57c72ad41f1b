//! Stack-based auto-indent tracking
//!
//! When a line break is committed after a line that opens a block (its
//! first token is a block keyword and it ends with a colon), the keyword is
//! pushed and the new line is indented one level deeper. The stack is never
//! popped: depth only grows for the lifetime of the session. Dedent would
//! need a policy for matching the enclosing block and is not implemented.

/// Keywords that open an indented block when the line ends with `:`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKeyword {
    Class,
    Def,
    For,
    While,
    If,
    Elif,
    Else,
}

impl BlockKeyword {
    /// Parse a whitespace-delimited token into a block keyword
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "class" => Some(Self::Class),
            "def" => Some(Self::Def),
            "for" => Some(Self::For),
            "while" => Some(Self::While),
            "if" => Some(Self::If),
            "elif" => Some(Self::Elif),
            "else" => Some(Self::Else),
            _ => None,
        }
    }
}

/// Open-block stack for one editing session. Depth is the stack length;
/// there is no separate counter to keep in sync.
#[derive(Debug, Default)]
pub struct IndentTracker {
    stack: Vec<BlockKeyword>,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth, in indent units
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The open blocks, outermost first
    pub fn stack(&self) -> &[BlockKeyword] {
        &self.stack
    }

    /// Evaluate the just-completed line when the user commits a line break.
    ///
    /// If the line, after trimming trailing whitespace, ends with `:` and
    /// its first token is a block keyword, the block is pushed. Returns the
    /// depth the new line should be indented to. Any other line, including
    /// a bare `:`, leaves the stack untouched.
    pub fn on_line_break(&mut self, completed: &str) -> usize {
        let trimmed = completed.trim_end();
        if let Some(body) = trimmed.strip_suffix(':') {
            if let Some(keyword) = body.split_whitespace().next().and_then(BlockKeyword::from_token) {
                self.stack.push(keyword);
            }
        }
        self.depth()
    }
}
