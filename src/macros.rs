//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$content` - The token's literal text
/// * `$position` - Where the lexeme starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Position(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $content:expr, $position:expr) => {
        $crate::scanner::tokens::Token {
            kind: $kind,
            content: $content,
            position: $position,
        }
    };
}
