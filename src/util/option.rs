use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a link that the structure of a collection guarantees to be present, such as the
    /// neighbours of a node sitting between two sentinels. Hits [`unreachable!`] in debug builds
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// No panics section is given, using this method asserts that None is impossible.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
