//! Character classes used by the rule-tag state machine.
//!
//! Both predicates are ASCII-only; no locale awareness.

/// True iff `c` is an ASCII alphabetic character (A-Z or a-z).
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True iff `c` is a single ASCII decimal digit. Sign, decimal point, and
/// exponent characters are not digits here, so floating-point shapes never
/// classify as numeric.
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}
