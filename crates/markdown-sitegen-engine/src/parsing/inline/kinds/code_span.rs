/// Code span inline type with owned delimiter constant.
///
/// Code spans are split after emphasis, so `` `*x*` `` yields italic text
/// wrapped in literal backticks, not a code span.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
