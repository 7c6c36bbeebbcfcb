use std::panic::Location;

/// Append the caller's source location to an error message.
///
/// Produces the body a host UI puts in its error dialog:
/// `"{message}\n\n{file} L{line}"`.
#[track_caller]
pub fn annotate(message: &str) -> String {
    let caller = Location::caller();
    format!("{message}\n\n{} L{}", caller.file(), caller.line())
}
