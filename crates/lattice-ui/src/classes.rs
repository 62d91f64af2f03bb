//! Class-name merge utility.
//!
//! Components assemble their `class` attribute from fixed fragments,
//! conditional fragments, and caller-supplied extras. The [`classes!`]
//! macro merges any mix of those into one space-separated string.
//! Empty and absent fragments are dropped; order is preserved, so
//! fragments listed later win CSS override ties.

/// A value contributing zero or one fragment to a merged class list.
pub trait ClassFragment {
    /// Append this fragment to `out`, inserting a separating space when
    /// `out` is non-empty. Empty fragments append nothing.
    fn append_to(&self, out: &mut String);
}

impl ClassFragment for str {
    fn append_to(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(self);
    }
}

impl ClassFragment for String {
    fn append_to(&self, out: &mut String) {
        self.as_str().append_to(out);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(&self, out: &mut String) {
        if let Some(fragment) = self {
            fragment.append_to(out);
        }
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

/// Merge class fragments into one space-separated class list.
///
/// Accepts string slices, owned strings, and `Option`s of either;
/// `None` and empty fragments are skipped.
#[macro_export]
macro_rules! classes {
    ($($fragment:expr),* $(,)?) => {{
        let mut merged = String::new();
        $($crate::classes::ClassFragment::append_to(&$fragment, &mut merged);)*
        merged
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_merges_in_order() {
        assert_eq!(crate::classes!["a", "b", "c"], "a b c");
    }

    #[test]
    fn test_drops_empty_fragments() {
        assert_eq!(crate::classes!["a", "", "b"], "a b");
        assert_eq!(crate::classes!["", ""], "");
    }

    #[test]
    fn test_drops_none_keeps_some() {
        let absent: Option<String> = None;
        let present = Some("late".to_string());
        assert_eq!(crate::classes!["base", absent, present], "base late");
    }

    #[test]
    fn test_mixes_owned_and_borrowed() {
        let owned = String::from("owned");
        assert_eq!(crate::classes![owned, "borrowed"], "owned borrowed");
    }

    #[test]
    fn test_conditional_fragment() {
        let padded = true;
        assert_eq!(
            crate::classes!["base", padded.then_some("pad")],
            "base pad"
        );
        assert_eq!(
            crate::classes!["base", false.then_some("pad")],
            "base"
        );
    }
}
