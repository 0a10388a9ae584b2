//! Code fence detection for region scanning.
//!
//! Fences use backticks or tildes (three or more). A closing fence must use
//! the same character and be at least as long as the opening fence, with
//! nothing but whitespace after it.

/// An open code fence: the character and length a closing line must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fence {
    ch: char,
    len: usize,
}

/// Detect an opening fence, returning it together with the trimmed info
/// string (the text after the fence characters, e.g. a language tag).
pub(crate) fn detect(line: &str) -> Option<(Fence, &str)> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let len = trimmed.chars().take_while(|&c| c == first).count();
    if len < 3 {
        return None;
    }

    Some((Fence { ch: first, len }, trimmed[len..].trim()))
}

/// Check whether `line` closes `fence`.
pub(crate) fn closes(line: &str, fence: Fence) -> bool {
    let trimmed = line.trim_start();
    match trimmed.chars().next() {
        Some(c) if c == fence.ch => {}
        _ => return false,
    }

    let count = trimmed.chars().take_while(|&c| c == fence.ch).count();
    if count < fence.len {
        return false;
    }

    // Only whitespace may follow the fence characters.
    trimmed[count..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_backtick_fence_with_info() {
        let (fence, info) = detect("```pseudocode").unwrap();
        assert_eq!(info, "pseudocode");
        assert!(closes("```", fence));
    }

    #[test]
    fn test_detect_tilde_fence() {
        let (fence, info) = detect("~~~python").unwrap();
        assert_eq!(info, "python");
        assert!(closes("~~~", fence));
        assert!(!closes("```", fence));
    }

    #[test]
    fn test_detect_bare_fence() {
        let (_, info) = detect("```").unwrap();
        assert_eq!(info, "");
    }

    #[test]
    fn test_info_string_trimmed() {
        let (_, info) = detect("```  pseudocode  ").unwrap();
        assert_eq!(info, "pseudocode");
    }

    #[test]
    fn test_not_a_fence() {
        assert!(detect("``inline``").is_none());
        assert!(detect("text").is_none());
        assert!(detect("").is_none());
    }

    #[test]
    fn test_indented_fence() {
        let (fence, _) = detect("   ```rust").unwrap();
        assert!(closes("  ```", fence));
    }

    #[test]
    fn test_longer_closing_fence() {
        let (fence, _) = detect("```").unwrap();
        assert!(closes("````", fence));
    }

    #[test]
    fn test_shorter_fence_does_not_close() {
        let (fence, _) = detect("````").unwrap();
        assert!(!closes("```", fence));
        assert!(closes("````", fence));
    }

    #[test]
    fn test_closing_fence_with_trailing_text_invalid() {
        let (fence, _) = detect("```").unwrap();
        assert!(!closes("``` rust", fence));
        assert!(closes("```   ", fence));
    }
}
