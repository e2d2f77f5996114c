//! Spelling helpers shared by the tagger's suffix guesses and the
//! lemmatizer's fallback.

/// Whether `c` is an ASCII vowel letter.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Drop one letter of a final doubled consonant ("runn" → "run",
/// "stopp" → "stop"). Doubled `l`, `s` and `z` are left alone, and the
/// result must end consonant-vowel-consonant.
pub fn undouble(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 4 {
        return None;
    }

    let last = chars[n - 1];
    if last != chars[n - 2]
        || !last.is_ascii_alphabetic()
        || is_vowel(last)
        || matches!(last, 'l' | 's' | 'z')
    {
        return None;
    }

    let undoubled: String = chars[..n - 1].iter().collect();
    ends_cvc(&undoubled).then_some(undoubled)
}

/// Whether a single-syllable stem lost a silent final `e`
/// ("mak" → "make", "us" → "use").
pub fn needs_final_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 || !chars.iter().all(char::is_ascii_lowercase) {
        return false;
    }

    let last = chars[n - 1];
    if is_vowel(last) || matches!(last, 'w' | 'x' | 'y') || !is_vowel(chars[n - 2]) {
        return false;
    }
    if n >= 3 && is_vowel(chars[n - 3]) {
        return false;
    }

    vowel_groups(&chars) == 1
}

/// Rebuild the base of a stem that lost `-ed`, `-ing`, `-er` or `-est`.
///
/// A doubled consonant is undone ("stopp" → "stop") and a dropped silent
/// `e` is put back ("complet" → "complete", "amaz" → "amaze"). Stems that
/// end in a consonant cluster or a long vowel are kept ("zorb", "rain").
/// `None` means the spelling does not say whether an `e` was dropped
/// ("pivot", "monitor"), and the caller keeps the inflected word.
pub fn restore_stem(stem: &str) -> Option<String> {
    if stem.chars().count() < 2 || !stem.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    if let Some(undoubled) = undouble(stem) {
        return Some(undoubled);
    }
    if needs_final_e(stem) || takes_final_e(stem) {
        return Some(format!("{stem}e"));
    }
    if is_unclear(stem) {
        return None;
    }
    Some(stem.to_string())
}

/// Unstressed endings of multi-syllable stems that never drop an `e`.
const PLAIN_ENDINGS: &[&str] = &[
    "it", "en", "er", "on", "om", "et", "el", "al", "ip", "op", "us",
];

/// Endings of longer stems that show a dropped `e`: `c`, `v` and single
/// `z` always, `s` nearly always, consonant clusters such as "bl" and
/// "rg", and short-vowel endings such as "at", "id", "in", "ur".
fn takes_final_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let (last, prev) = (chars[n - 1], chars[n - 2]);
    let cvc = ends_cvc(stem);

    match last {
        'c' | 'v' => true,
        'z' => prev != 'z',
        's' => prev != 's' && !stem.ends_with("ocus"),
        'l' => (!is_vowel(prev) && !matches!(prev, 'l' | 'r' | 'w')) || (cvc && prev == 'i'),
        'g' => {
            matches!(prev, 'r' | 'd')
                || stem.ends_with("eng")
                || (n >= 5 && stem.ends_with("ang"))
                || (cvc && prev == 'a')
        }
        'd' | 'k' => cvc,
        'b' => cvc && prev == 'i',
        'm' => cvc && matches!(prev, 'a' | 'u'),
        'p' => cvc && prev == 'a',
        'n' => cvc && prev == 'i',
        'r' => cvc && matches!(prev, 'a' | 'i' | 'u'),
        't' => {
            (cvc && matches!(prev, 'a' | 'u'))
                || stem.ends_with("let")
                || stem.ends_with("iat")
                || stem.ends_with("uat")
        }
        _ => false,
    }
}

/// A multi-syllable stem ending in a short vowel and a single consonant
/// that no rule above settles ("pivot" or "pivote").
fn is_unclear(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    ends_cvc(stem)
        && !matches!(chars[chars.len() - 1], 'w' | 'x' | 'y')
        && vowel_groups(&chars) >= 2
        && !PLAIN_ENDINGS.iter().any(|ending| stem.ends_with(ending))
}

/// Consonant-vowel-consonant ending.
fn ends_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    n >= 3 && !is_vowel(chars[n - 1]) && is_vowel(chars[n - 2]) && !is_vowel(chars[n - 3])
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &c in chars {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}
