use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value of an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of
    /// the error. Used for the few conditions a caller can't reasonably recover from, such as a
    /// length overflowing [`usize`] or a bounded collection being over-filled through [`Extend`].
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`]. The panic is reported at the caller's location.
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
