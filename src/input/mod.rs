//! Strict numeric input.
//!
//! Every number the calculator accepts passes through this module. A line is
//! accepted only when the numeric conversion consumes the whole line apart
//! from trailing spaces and tabs:
//!
//! ```text
//! integer = [ws] [sign] digit+ [' ' | '\t']*
//! real    = [ws] [sign] (digit+ ['.' digit*] | '.' digit+) [('e'|'E') [sign] digit+] [' ' | '\t']*
//! ```
//!
//! So `"42  "` and `"-3.5\t"` parse, while `"12abc"`, `"3.3.3"`, `"  "` and
//! `""` do not. Values outside the representable range are rejected too.
//!
//! [`Prompter`] wraps the parser in the interactive re-prompt loop: it keeps
//! asking until a valid value arrives or the input stream ends.

mod number;
mod prompt;

pub use number::{parse_int, parse_real};
pub use prompt::Prompter;
