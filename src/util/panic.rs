/// Asserts that the provided block panics. Everything the block touches has to be created inside
/// it, because the closure passed to [`catch_unwind`](std::panic::catch_unwind) must be
/// [`UnwindSafe`](std::panic::UnwindSafe).
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
