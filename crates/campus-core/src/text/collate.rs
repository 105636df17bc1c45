//! Spanish collation for catalog names and categories
//!
//! Ordering rules:
//! - Primary level ignores case and accents (`á` sorts with `a`, `ü` with `u`)
//! - `ñ` is its own letter between `n` and `o`
//! - Accented forms sort after their bare form when the primary level ties
//! - Remaining ties fall back to code point order, so the comparison is total

use std::cmp::Ordering;

/// Primary collation weight for a single character
fn primary_weight(c: char) -> u32 {
    let folded = match c {
        'á' | 'à' | 'â' | 'ä' | 'Á' | 'À' | 'Â' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        // ñ sits between n and o
        'ñ' | 'Ñ' => return ('n' as u32) * 2 + 1,
        other => other.to_lowercase().next().unwrap_or(other),
    };
    (folded as u32) * 2
}

/// Primary sort key of a string
pub fn sort_key(s: &str) -> Vec<u32> {
    s.chars().map(primary_weight).collect()
}

/// Compare two strings with Spanish collation
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a)
        .cmp(&sort_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
